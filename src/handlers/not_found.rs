//! Fallback handler for unmatched paths.

use crate::models::RouteNotFound;
use actix_web::{HttpRequest, HttpResponse};

/// Default service: 404 with the requested path echoed back
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(RouteNotFound {
        success: false,
        message: "Endpoint not found".to_string(),
        path: req.path().to_string(),
    })
}
