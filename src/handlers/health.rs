//! Health check endpoint handler.

use crate::{models::HealthResponse, state::StartTime};
use actix_web::{Error, HttpRequest, Result, web};
use chrono::{SecondsFormat, Utc};
use paperclip::actix::api_v2_operation;

/// Health check endpoint
///
/// Returns the current health status of the API. This endpoint can be used
/// by load balancers, monitoring systems, and health check probes. It is not
/// rate limited.
#[api_v2_operation(
    summary = "Health Check Endpoint",
    description = "Returns the service status, current time, uptime in seconds, and environment name.",
    tags("Health"),
    responses(
        (status = 200, description = "Successful response", body = HealthResponse)
    )
)]
pub async fn health(req: HttpRequest) -> Result<web::Json<HealthResponse>, Error> {
    let uptime = req
        .app_data::<web::Data<StartTime>>()
        .map(|start| start.elapsed().as_secs_f64())
        .unwrap_or_default();

    let response = HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime,
        environment: crate::config::Environment::current().to_string(),
    };

    Ok(web::Json(response))
}
