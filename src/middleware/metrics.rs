//! Per-route request metrics.
//!
//! Requests are labelled with the matched route pattern (`/api/weather/{city}`,
//! `/api/history/{id}`) rather than the raw path, so one label covers every
//! city or history id. Paths that hit the 404 fallback share the
//! [`UNMATCHED_ROUTE`] label.

use crate::{
    config::MetricsConfig,
    services::AppMetrics,
    utils::route::{UNMATCHED_ROUTE, extract_route_pattern},
};
use actix_web::{
    Error, HttpRequest,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    web,
};
use std::{
    future::{Ready, ready},
    pin::Pin,
    time::Instant,
};

/// Middleware factory recording request count and latency into [`AppMetrics`]
pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RouteMetricsService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteMetricsService { service }))
    }
}

pub struct RouteMetricsService<S> {
    service: S,
}

/// Collector to record into, or `None` when metrics are absent or switched off
fn active_metrics(req: &HttpRequest) -> Option<&web::Data<AppMetrics>> {
    let enabled = req
        .app_data::<web::Data<MetricsConfig>>()
        .is_none_or(|config| config.enabled);
    if !enabled {
        return None;
    }
    req.app_data::<web::Data<AppMetrics>>()
}

impl<S, B> Service<ServiceRequest> for RouteMetricsService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let started = Instant::now();
        let method = req.method().to_string();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            // The pattern is only known once routing has run
            if let Some(metrics) = active_metrics(res.request()) {
                let route = extract_route_pattern(res.request());
                metrics.record_request(&method, &route, res.status().as_u16(), started.elapsed());
                metrics.update_uptime();
                if route == UNMATCHED_ROUTE {
                    tracing::debug!(path = %res.request().path(), "Request matched no route");
                }
            }

            Ok(res)
        })
    }
}
