//! Response envelope and models for the service endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Uniform wrapper for every `/api` response
///
/// Successful responses carry `data` (and sometimes `message`); failures carry
/// `error` and `message`. Absent fields are omitted from the JSON.
#[derive(Debug, Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Successful response carrying `data`
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Successful response carrying `data` and a human-readable message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::ok(data)
        }
    }

    /// Failed response with an error label and message
    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: Some(message.into()),
        }
    }
}

/// Response model for the health check endpoint
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
    /// Time of the check (ISO 8601)
    pub timestamp: String,
    /// Seconds since the server started
    pub uptime: f64,
    pub environment: String,
}

/// Response model for the version information endpoint
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Body returned for paths that match no route
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct RouteNotFound {
    pub success: bool,
    pub message: String,
    pub path: String,
}

/// Service descriptor returned from `/`
#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct ServiceDescriptor {
    pub success: bool,
    pub message: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
    pub endpoints: EndpointDirectory,
    pub documentation: DocumentationLinks,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct EndpointDirectory {
    pub health: String,
    pub weather: String,
    pub forecast: String,
    pub search: String,
    pub history: HistoryEndpoints,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
pub struct HistoryEndpoints {
    pub list: String,
    pub add: String,
    pub delete: String,
    pub clear: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationLinks {
    pub frontend: String,
    pub api_spec: String,
}
