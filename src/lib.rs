//! SkyCast API - weather lookups backed by WeatherAPI.com
//!
//! An Actix Web + Paperclip service that:
//! - proxies current conditions, forecasts and city search to WeatherAPI.com
//! - keeps a bounded, in-memory search history (oldest entries evicted first)
//! - rate limits clients per address
//! - exposes Prometheus metrics and an OpenAPI v2 document
//!
//! ## Architecture
//!
//! - `models/` - Response envelope, weather shapes, history entries, validated inputs
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Security headers, CORS, request IDs, metrics
//! - `services/` - History store, weather provider, rate limiter, metrics
//! - `config/` - Configuration structures and environment loading
//! - `utils/` - Request introspection and parameter parsing helpers
//!
//! ## Quick Start
//!
//! ```no_run
//! use skycast_api::{AppState, create_app};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let state = AppState::from_env().map_err(std::io::Error::other)?;
//!     actix_web::HttpServer::new(move || create_app(state.clone()))
//!         .bind(("127.0.0.1", 5000))?
//!         .run()
//!         .await
//! }
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

pub use app::{JSON_BODY_LIMIT, create_app};
pub use config::{
    Environment, HistoryConfig, LoggingConfig, MetricsConfig, RateLimitConfig,
    SecurityHeadersConfig, ServerConfig, WeatherApiConfig,
};
pub use error::ApiError;
pub use handlers::{build_info, create_openapi_spec};
pub use models::{
    ApiEnvelope, CityMatch, CityName, Forecast, ForecastDay, ForecastDays, HistoryEntry,
    HistoryPage, HourSlot, NewHistoryEntry, PageRequest, SearchQuery, WeatherSnapshot,
};
pub use services::{
    AppMetrics, HistoryError, HistoryStore, ProviderClient, ProviderClientConfig, ProviderError,
    SimpleRateLimiter, WeatherApiProvider, WeatherProvider,
};
pub use state::{AppSettings, AppState, StartupError};
