//! Cross-origin policy for the frontend.

use crate::config::ServerConfig;
use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Build the CORS middleware allowing only the configured frontend origin
///
/// Credentials are allowed so the frontend can send cookies; that rules out
/// wildcard origins.
pub fn cors_policy(config: &ServerConfig) -> Cors {
    Cors::default()
        .allowed_origin(&config.frontend_url)
        .allowed_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allowed_header("X-Request-ID")
        .expose_headers(["x-request-id"])
        .supports_credentials()
        .max_age(600)
}
