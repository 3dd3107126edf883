//! Service descriptor served from the root path.

use crate::{
    config::ServerConfig,
    models::{DocumentationLinks, EndpointDirectory, HistoryEndpoints, ServiceDescriptor},
};
use actix_web::{Error, HttpRequest, Result, web};
use chrono::{SecondsFormat, Utc};
use paperclip::actix::api_v2_operation;

/// Describe the service and list its endpoints
#[api_v2_operation(
    summary = "Service Descriptor",
    description = "Returns the service name, version, environment, and a directory of the available endpoints.",
    tags("Service"),
    responses(
        (status = 200, description = "Successful response", body = ServiceDescriptor)
    )
)]
pub async fn index(req: HttpRequest) -> Result<web::Json<ServiceDescriptor>, Error> {
    let frontend = req
        .app_data::<web::Data<ServerConfig>>()
        .map(|config| config.frontend_url.clone())
        .unwrap_or_else(|| ServerConfig::default().frontend_url);

    Ok(web::Json(describe_service(frontend)))
}

fn describe_service(frontend: String) -> ServiceDescriptor {
    ServiceDescriptor {
        success: true,
        message: "SkyCast Weather API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: crate::config::Environment::current().to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        endpoints: EndpointDirectory {
            health: "GET /api/health".to_string(),
            weather: "GET /api/weather/:city".to_string(),
            forecast: "GET /api/forecast/:city?days=7".to_string(),
            search: "GET /api/search?q=query".to_string(),
            history: HistoryEndpoints {
                list: "GET /api/history".to_string(),
                add: "POST /api/history".to_string(),
                delete: "DELETE /api/history/:id".to_string(),
                clear: "DELETE /api/history".to_string(),
            },
        },
        documentation: DocumentationLinks {
            frontend,
            api_spec: "/api/spec/v2".to_string(),
        },
    }
}
