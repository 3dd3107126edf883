//! Shared application state.
//!
//! Everything here is created once, before the HTTP server starts, and handed
//! to every worker as `web::Data` so all workers see the same history, rate
//! limiter buckets and metrics registry.

use crate::{
    config::{
        HistoryConfig, MetricsConfig, RateLimitConfig, SecurityHeadersConfig, ServerConfig,
        WeatherApiConfig,
    },
    services::{
        AppMetrics, HistoryStore, ProviderClient, ProviderClientConfig, ProviderClientMetrics,
        SimpleRateLimiter, WeatherApiProvider, WeatherProvider,
    },
};
use actix_web::web;
use std::{
    sync::Arc,
    time::{Duration, Instant},
};

/// Instant the process started serving, for uptime reporting
#[derive(Clone, Copy, Debug)]
pub struct StartTime(Instant);

impl StartTime {
    pub fn now() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// Failures while assembling the application at startup
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("failed to register metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("failed to build provider HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid weather provider base URL: {0}")]
    ProviderUrl(#[from] url::ParseError),
}

/// Per-concern configuration the application is built from
#[derive(Clone, Debug, Default)]
pub struct AppSettings {
    pub server: ServerConfig,
    pub security: SecurityHeadersConfig,
    pub history: HistoryConfig,
    pub rate_limit: RateLimitConfig,
    pub metrics: MetricsConfig,
}

impl AppSettings {
    /// Load every section from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            security: SecurityHeadersConfig::from_env(),
            history: HistoryConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            metrics: MetricsConfig::from_env(),
        }
    }
}

/// Handles shared by every worker
#[derive(Clone)]
pub struct AppState {
    pub settings: AppSettings,
    pub history: web::Data<HistoryStore>,
    pub provider: web::Data<dyn WeatherProvider>,
    pub limiter: web::Data<SimpleRateLimiter>,
    pub metrics: web::Data<AppMetrics>,
    pub started: web::Data<StartTime>,
}

impl AppState {
    /// Assemble state around an already-built provider
    pub fn new(settings: AppSettings, provider: Arc<dyn WeatherProvider>, metrics: AppMetrics) -> Self {
        let history = HistoryStore::new(settings.history.clone());
        let limiter = SimpleRateLimiter::new(settings.rate_limit.clone());

        Self {
            history: web::Data::new(history),
            provider: web::Data::from(provider),
            limiter: web::Data::new(limiter),
            metrics: web::Data::new(metrics),
            started: web::Data::new(StartTime::now()),
            settings,
        }
    }

    /// Build the production state: WeatherAPI.com provider, configuration
    /// from the environment
    pub fn from_env() -> Result<Self, StartupError> {
        let settings = AppSettings::from_env();
        let metrics = AppMetrics::new()?;

        let client_metrics = ProviderClientMetrics::new(&metrics.registry)?;
        let client = ProviderClient::new(ProviderClientConfig::from_env(), Some(client_metrics))?;
        let provider = WeatherApiProvider::new(WeatherApiConfig::from_env(), client)?;

        Ok(Self::new(settings, Arc::new(provider), metrics))
    }
}
