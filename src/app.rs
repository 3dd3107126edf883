//! Application factory.

use crate::{
    error::{json_error_handler, path_error_handler, query_error_handler},
    handlers::{
        add_history, clear_history, create_openapi_spec, current_weather, delete_history_entry,
        forecast, get_metrics, health, index, list_history, not_found, search_cities, version,
    },
    middleware::{MetricsMiddleware, RequestIdMiddleware, SecurityHeaders, cors_policy},
    state::AppState,
};
use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
};
use paperclip::actix::{OpenApiExt, web};

/// Largest accepted JSON request body
pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// Creates the application with every route, middleware and shared handle
///
/// Used by `main` for each worker and by the integration tests. Apps built
/// from clones of one [`AppState`] share history, rate limiter and metrics.
pub fn create_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let settings = &state.settings;

    App::new()
        .wrap(MetricsMiddleware)
        .wrap(RequestIdMiddleware)
        .wrap(SecurityHeaders::new(settings.security.clone()))
        .wrap(cors_policy(&settings.server))
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(
            actix_web::web::JsonConfig::default()
                .limit(JSON_BODY_LIMIT)
                .error_handler(json_error_handler),
        )
        .app_data(actix_web::web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(actix_web::web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::Data::new(settings.server.clone()))
        .app_data(web::Data::new(settings.metrics.clone()))
        .app_data(state.history.clone())
        .app_data(state.provider.clone())
        .app_data(state.limiter.clone())
        .app_data(state.metrics.clone())
        .app_data(state.started.clone())
        .service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/metrics").route(web::get().to(get_metrics)))
        .service(web::resource("/api/weather/{city}").route(web::get().to(current_weather)))
        .service(web::resource("/api/forecast/{city}").route(web::get().to(forecast)))
        .service(web::resource("/api/search").route(web::get().to(search_cities)))
        .service(
            web::resource("/api/history")
                .route(web::get().to(list_history))
                .route(web::post().to(add_history))
                .route(web::delete().to(clear_history)),
        )
        .service(
            web::resource("/api/history/{id}").route(web::delete().to(delete_history_entry)),
        )
        .with_json_spec_at("/api/spec/v2")
        .build()
        .default_service(actix_web::web::to(not_found))
}
