//! Weather provider: outbound calls to WeatherAPI.com and response mapping.
//!
//! All three operations share one error rule: a non-success provider status
//! is passed through with the provider's message, anything else (network
//! failure, timeout, undecodable body) becomes a 500 with a per-operation
//! default message.

use crate::{
    config::WeatherApiConfig,
    models::{
        CityMatch, CityName, Forecast, ForecastDay, ForecastDays, HourSlot, SearchQuery,
        WeatherSnapshot,
    },
    services::provider_client::{ProviderClient, ProviderClientError},
};
use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use url::Url;

/// Uniform failure signal for every provider operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("provider error {status_code}: {message}")]
pub struct ProviderError {
    pub status_code: u16,
    pub message: String,
}

impl ProviderError {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Failure with no usable upstream status
    pub fn internal(operation: ProviderOperation) -> Self {
        Self::new(500, operation.default_message())
    }
}

/// The three provider calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderOperation {
    Current,
    Forecast,
    Search,
}

impl ProviderOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderOperation::Current => "current",
            ProviderOperation::Forecast => "forecast",
            ProviderOperation::Search => "search",
        }
    }

    fn endpoint(&self) -> &'static str {
        match self {
            ProviderOperation::Current => "current.json",
            ProviderOperation::Forecast => "forecast.json",
            ProviderOperation::Search => "search.json",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ProviderOperation::Current => "Failed to fetch weather data",
            ProviderOperation::Forecast => "Failed to fetch forecast data",
            ProviderOperation::Search => "Failed to search cities",
        }
    }
}

/// Source of weather data used by the HTTP handlers
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for a city
    async fn current(&self, city: &CityName) -> Result<WeatherSnapshot, ProviderError>;

    /// Daily and hourly forecast for a city
    async fn forecast(&self, city: &CityName, days: ForecastDays)
    -> Result<Forecast, ProviderError>;

    /// Locations matching a free-text query
    async fn search_cities(&self, query: &SearchQuery) -> Result<Vec<CityMatch>, ProviderError>;
}

/// [`WeatherProvider`] backed by the WeatherAPI.com REST API
#[derive(Clone)]
pub struct WeatherApiProvider {
    client: ProviderClient,
    api_key: String,
    base_url: Url,
}

impl WeatherApiProvider {
    pub fn new(config: WeatherApiConfig, client: ProviderClient) -> Result<Self, url::ParseError> {
        // A trailing slash makes `Url::join` append instead of replacing the last segment
        let base_url = Url::parse(&format!("{}/", config.base_url.trim_end_matches('/')))?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url,
        })
    }

    fn endpoint_url(
        &self,
        operation: ProviderOperation,
        params: &[(&str, &str)],
    ) -> Result<Url, ProviderError> {
        let mut url = self.base_url.join(operation.endpoint()).map_err(|e| {
            tracing::error!(operation = operation.as_str(), error = %e, "Invalid provider URL");
            ProviderError::internal(operation)
        })?;

        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .extend_pairs(params);
        Ok(url)
    }

    /// Perform one call and decode a successful body into `T`
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: ProviderOperation,
        params: &[(&str, &str)],
    ) -> Result<T, ProviderError> {
        let url = self.endpoint_url(operation, params)?;

        let response = self
            .client
            .get(url, operation.as_str())
            .await
            .map_err(|e: ProviderClientError| {
                tracing::error!(operation = operation.as_str(), error = %e, "Provider call failed");
                ProviderError::internal(operation)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(operation = operation.as_str(), error = %e, "Failed to read provider response");
            ProviderError::internal(operation)
        })?;

        if !status.is_success() {
            let message = serde_json::from_slice::<WaErrorBody>(&body)
                .ok()
                .and_then(|b| b.error.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| operation.default_message().to_string());
            return Err(ProviderError::new(status.as_u16(), message));
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(operation = operation.as_str(), error = %e, "Failed to parse provider response");
            ProviderError::internal(operation)
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, city: &CityName) -> Result<WeatherSnapshot, ProviderError> {
        let raw: WaCurrentResponse = self
            .fetch(ProviderOperation::Current, &[("q", city.as_str())])
            .await?;
        Ok(raw.into())
    }

    async fn forecast(
        &self,
        city: &CityName,
        days: ForecastDays,
    ) -> Result<Forecast, ProviderError> {
        let days = days.get().to_string();
        let raw: WaForecastResponse = self
            .fetch(
                ProviderOperation::Forecast,
                &[("q", city.as_str()), ("days", days.as_str())],
            )
            .await?;
        Ok(raw.into())
    }

    async fn search_cities(&self, query: &SearchQuery) -> Result<Vec<CityMatch>, ProviderError> {
        let raw: Vec<WaLocation> = self
            .fetch(ProviderOperation::Search, &[("q", query.as_str())])
            .await?;
        Ok(raw.into_iter().map(CityMatch::from).collect())
    }
}

// WeatherAPI.com wire format. Only the fields we map are declared; numeric
// fields the provider occasionally omits default to zero.

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    lat: f64,
    #[serde(default)]
    lon: f64,
}

#[derive(Debug, Default, Deserialize)]
struct WaCondition {
    #[serde(default)]
    text: String,
    #[serde(default)]
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    #[serde(default)]
    condition: WaCondition,
    #[serde(default)]
    humidity: f64,
    #[serde(default)]
    wind_kph: f64,
    #[serde(default)]
    pressure_mb: f64,
    #[serde(default)]
    feelslike_c: f64,
    #[serde(default)]
    uv: f64,
    #[serde(default)]
    vis_km: f64,
    #[serde(default)]
    last_updated: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrentResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaDay {
    maxtemp_c: f64,
    mintemp_c: f64,
    #[serde(default)]
    avgtemp_c: f64,
    #[serde(default)]
    avghumidity: f64,
    #[serde(default)]
    maxwind_kph: f64,
    #[serde(default)]
    daily_chance_of_rain: f64,
    #[serde(default)]
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    time: String,
    temp_c: f64,
    #[serde(default)]
    humidity: f64,
    #[serde(default)]
    wind_kph: f64,
    #[serde(default)]
    chance_of_rain: f64,
    #[serde(default)]
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    date: String,
    day: WaDay,
    #[serde(default)]
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    location: WaLocation,
    forecast: WaForecast,
}

impl From<WaCurrentResponse> for WeatherSnapshot {
    fn from(raw: WaCurrentResponse) -> Self {
        let current = raw.current;
        Self {
            city: raw.location.name,
            country: raw.location.country,
            temperature: current.temp_c,
            condition: current.condition.text,
            icon: current.condition.icon,
            humidity: current.humidity,
            wind_speed: current.wind_kph,
            pressure: current.pressure_mb,
            feels_like: current.feelslike_c,
            uv: current.uv,
            visibility: current.vis_km,
            last_updated: current.last_updated,
        }
    }
}

impl From<WaHour> for HourSlot {
    fn from(hour: WaHour) -> Self {
        Self {
            time: hour.time,
            temperature: hour.temp_c,
            condition: hour.condition.text,
            humidity: hour.humidity,
            wind_speed: hour.wind_kph,
            precipitation_prob: hour.chance_of_rain,
            icon: hour.condition.icon,
        }
    }
}

impl From<WaForecastDay> for ForecastDay {
    fn from(raw: WaForecastDay) -> Self {
        let day = raw.day;
        Self {
            date: raw.date,
            max_temp: day.maxtemp_c,
            min_temp: day.mintemp_c,
            avg_temp: day.avgtemp_c,
            condition: day.condition.text,
            humidity: day.avghumidity,
            wind_speed: day.maxwind_kph,
            precipitation_prob: day.daily_chance_of_rain,
            icon: day.condition.icon,
            hourly: raw.hour.into_iter().map(HourSlot::from).collect(),
        }
    }
}

impl From<WaForecastResponse> for Forecast {
    fn from(raw: WaForecastResponse) -> Self {
        Self {
            city: raw.location.name,
            country: raw.location.country,
            forecast: raw
                .forecast
                .forecastday
                .into_iter()
                .map(ForecastDay::from)
                .collect(),
        }
    }
}

impl From<WaLocation> for CityMatch {
    fn from(location: WaLocation) -> Self {
        Self {
            name: location.name,
            region: location.region,
            country: location.country,
            lat: location.lat,
            lon: location.lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::provider_client::ProviderClientConfig;

    fn provider(base_url: &str) -> WeatherApiProvider {
        let client = ProviderClient::new(ProviderClientConfig::default(), None).unwrap();
        WeatherApiProvider::new(
            WeatherApiConfig {
                api_key: "test-key".to_string(),
                base_url: base_url.to_string(),
            },
            client,
        )
        .unwrap()
    }

    #[test]
    fn test_endpoint_url_keeps_base_path_and_encodes_query() {
        let provider = provider("https://api.weatherapi.com/v1");
        let city = CityName::parse("São Paulo & Co").unwrap();
        let url = provider
            .endpoint_url(ProviderOperation::Current, &[("q", city.as_str())])
            .unwrap();

        assert_eq!(url.path(), "/v1/current.json");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("key".to_string(), "test-key".to_string()),
                ("q".to_string(), "São Paulo & Co".to_string()),
            ]
        );
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let provider = provider("https://api.weatherapi.com/v1/");
        let url = provider
            .endpoint_url(ProviderOperation::Search, &[("q", "lon")])
            .unwrap();
        assert_eq!(url.path(), "/v1/search.json");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let client = ProviderClient::new(ProviderClientConfig::default(), None).unwrap();
        let result = WeatherApiProvider::new(
            WeatherApiConfig {
                api_key: "k".to_string(),
                base_url: "not a url".to_string(),
            },
            client,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_current_mapping() {
        let raw: WaCurrentResponse = serde_json::from_value(serde_json::json!({
            "location": { "name": "London", "region": "City of London", "country": "United Kingdom", "lat": 51.52, "lon": -0.11 },
            "current": {
                "temp_c": 14.0,
                "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png" },
                "humidity": 72,
                "wind_kph": 13.0,
                "pressure_mb": 1012.0,
                "feelslike_c": 12.9,
                "uv": 3.0,
                "vis_km": 10.0,
                "last_updated": "2024-03-01 12:30"
            }
        }))
        .unwrap();

        let snapshot = WeatherSnapshot::from(raw);
        assert_eq!(snapshot.city, "London");
        assert_eq!(snapshot.country, "United Kingdom");
        assert_eq!(snapshot.temperature, 14.0);
        assert_eq!(snapshot.condition, "Partly cloudy");
        assert_eq!(snapshot.humidity, 72.0);
        assert_eq!(snapshot.wind_speed, 13.0);
        assert_eq!(snapshot.pressure, 1012.0);
        assert_eq!(snapshot.feels_like, 12.9);
        assert_eq!(snapshot.visibility, 10.0);
        assert_eq!(snapshot.last_updated, "2024-03-01 12:30");
        assert!(snapshot.icon.ends_with("116.png"));
    }

    #[test]
    fn test_operation_default_messages() {
        assert_eq!(
            ProviderError::internal(ProviderOperation::Current),
            ProviderError::new(500, "Failed to fetch weather data")
        );
        assert_eq!(
            ProviderOperation::Forecast.default_message(),
            "Failed to fetch forecast data"
        );
        assert_eq!(
            ProviderOperation::Search.default_message(),
            "Failed to search cities"
        );
    }
}
