//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use skycast_api::{
    AppMetrics, AppSettings, AppState, CityMatch, CityName, Forecast, ForecastDay, ForecastDays,
    ProviderError, SearchQuery, WeatherProvider, WeatherSnapshot,
};
use std::sync::{Arc, Mutex};

/// In-process provider returning canned data, or a fixed error when set
#[derive(Default)]
pub struct StubProvider {
    pub failure: Option<ProviderError>,
    pub last_city: Mutex<Option<String>>,
    pub last_days: Mutex<Option<u8>>,
    pub last_query: Mutex<Option<String>>,
}

impl StubProvider {
    pub fn failing(status_code: u16, message: &str) -> Self {
        Self {
            failure: Some(ProviderError::new(status_code, message)),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), ProviderError> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn snapshot(city: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        city: city.to_string(),
        country: "France".to_string(),
        temperature: 21.5,
        condition: "Clear".to_string(),
        icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".to_string(),
        humidity: 40.0,
        wind_speed: 11.2,
        pressure: 1015.0,
        feels_like: 21.0,
        uv: 5.0,
        visibility: 10.0,
        last_updated: "2024-06-01 12:00".to_string(),
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current(&self, city: &CityName) -> Result<WeatherSnapshot, ProviderError> {
        *self.last_city.lock().unwrap() = Some(city.as_str().to_string());
        self.check()?;
        Ok(snapshot(city.as_str()))
    }

    async fn forecast(&self, city: &CityName, days: ForecastDays) -> Result<Forecast, ProviderError> {
        *self.last_city.lock().unwrap() = Some(city.as_str().to_string());
        *self.last_days.lock().unwrap() = Some(days.get());
        self.check()?;
        Ok(Forecast {
            city: city.as_str().to_string(),
            country: "France".to_string(),
            forecast: (0..days.get())
                .map(|day| ForecastDay {
                    date: format!("2024-06-{:02}", day + 1),
                    max_temp: 25.0,
                    min_temp: 14.0,
                    avg_temp: 19.5,
                    condition: "Sunny".to_string(),
                    humidity: 50.0,
                    wind_speed: 12.0,
                    precipitation_prob: 10.0,
                    icon: "//cdn.weatherapi.com/weather/64x64/day/113.png".to_string(),
                    hourly: Vec::new(),
                })
                .collect(),
        })
    }

    async fn search_cities(&self, query: &SearchQuery) -> Result<Vec<CityMatch>, ProviderError> {
        *self.last_query.lock().unwrap() = Some(query.as_str().to_string());
        self.check()?;
        Ok(vec![CityMatch {
            name: "London".to_string(),
            region: "City of London, Greater London".to_string(),
            country: "United Kingdom".to_string(),
            lat: 51.52,
            lon: -0.11,
        }])
    }
}

pub fn state_with(settings: AppSettings, provider: Arc<StubProvider>) -> AppState {
    AppState::new(settings, provider, AppMetrics::new().unwrap())
}

pub fn test_state(provider: Arc<StubProvider>) -> AppState {
    state_with(AppSettings::default(), provider)
}

pub async fn read_json(resp: actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>) -> serde_json::Value {
    let body = actix_web::test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be JSON")
}
