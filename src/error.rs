//! Error taxonomy for the HTTP surface.
//!
//! Every failure a handler can produce is an [`ApiError`]. Layer-specific
//! errors (history store, weather provider, request extractors) convert into
//! it via `From`, and the single [`ResponseError`] impl below turns it into
//! the `{success: false, error, message}` envelope.

use crate::{
    config::Environment,
    models::ApiEnvelope,
    services::{history::HistoryError, weather::ProviderError},
};
use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
};

/// Message returned in place of internal details outside development
pub const GENERIC_SERVER_MESSAGE: &str = "An internal server error occurred";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Client input failed validation
    #[error("{0}")]
    Validation(String),

    /// Request body was not valid JSON
    #[error("{0}")]
    InvalidJson(String),

    /// Requested history entry does not exist
    #[error("{0}")]
    NotFound(String),

    /// Upstream weather provider failed
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// Client exceeded the request budget for the current window
    #[error("Too many requests from this IP, please try again later.")]
    RateLimited,

    /// Unexpected internal fault
    #[error("{0}")]
    Server(String),
}

impl ApiError {
    /// Short label placed in the `error` field of the envelope
    pub fn label(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation Error",
            ApiError::InvalidJson(_) => "Invalid JSON",
            ApiError::NotFound(_) => "Not Found",
            ApiError::Provider { .. } => "API Error",
            ApiError::RateLimited => "Too Many Requests",
            ApiError::Server(_) => "Server Error",
        }
    }

    /// Message shown to the client; server faults are redacted outside development
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Server(detail) if Environment::current().exposes_error_details() => {
                detail.clone()
            }
            ApiError::Server(_) => GENERIC_SERVER_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Provider { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "Request rejected");
        }

        HttpResponse::build(status).json(ApiEnvelope::<()>::failure(
            self.label(),
            self.client_message(),
        ))
    }
}

impl From<HistoryError> for ApiError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::Validation(message) => ApiError::Validation(message),
            HistoryError::NotFound(_) => ApiError::NotFound("History entry not found".to_string()),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        ApiError::Provider {
            status: err.status_code,
            message: err.message,
        }
    }
}

/// Maps JSON body extraction failures onto the error envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let api_error = match &err {
        JsonPayloadError::Deserialize(inner) if inner.is_data() => {
            ApiError::Validation(inner.to_string())
        }
        JsonPayloadError::ContentType => ApiError::InvalidJson(
            "Request body must be sent with Content-Type: application/json".to_string(),
        ),
        _ => ApiError::InvalidJson("Request body contains invalid JSON".to_string()),
    };
    api_error.into()
}

/// Maps query string extraction failures onto the error envelope
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}

/// Maps path segment extraction failures onto the error envelope
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Validation(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidJson("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            ApiError::Server("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_provider_status_passthrough() {
        let err = ApiError::Provider {
            status: 400,
            message: "No matching location found.".into(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError::Provider {
            status: 403,
            message: "API key has been disabled.".into(),
        };
        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_provider_status_falls_back_to_500() {
        for status in [0, 200, 302, 1000] {
            let err = ApiError::Provider {
                status,
                message: "Failed to fetch weather data".into(),
            };
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_history_error_conversion() {
        let err: ApiError = HistoryError::NotFound("42".into()).into();
        assert!(matches!(err, ApiError::NotFound(ref msg) if msg == "History entry not found"));

        let err: ApiError = HistoryError::Validation("missing".into()).into();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[actix_web::test]
    async fn test_error_envelope_shape() {
        let resp = ApiError::Validation("City name is required".into()).error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "error": "Validation Error",
                "message": "City name is required"
            })
        );
    }
}
