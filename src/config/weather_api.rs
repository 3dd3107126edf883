//! Weather provider (WeatherAPI.com) configuration.

use std::env;

/// Key used when `WEATHER_API_KEY` is not set; the provider rejects it, but
/// the server still starts and serves history endpoints.
pub const DEMO_API_KEY: &str = "demo";

/// Connection settings for WeatherAPI.com
#[derive(Clone, Debug)]
pub struct WeatherApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_string(),
            base_url: "https://api.weatherapi.com/v1".to_string(),
        }
    }
}

impl WeatherApiConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_key = match env::var("WEATHER_API_KEY") {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                tracing::warn!("WEATHER_API_KEY is not set; provider calls will use the demo key");
                defaults.api_key
            }
        };

        let base_url = env::var("WEATHER_API_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        Self { api_key, base_url }
    }

    /// Whether a real key has been configured
    pub fn has_api_key(&self) -> bool {
        self.api_key != DEMO_API_KEY
    }
}
