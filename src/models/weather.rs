//! Normalized weather shapes returned to clients.
//!
//! These are built per request from provider responses and never stored.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Point-in-time weather reading for a location
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    /// Temperature in °C
    pub temperature: f64,
    pub condition: String,
    /// Provider icon URL
    pub icon: String,
    /// Relative humidity in %
    pub humidity: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Pressure in mb
    pub pressure: f64,
    /// Apparent temperature in °C
    pub feels_like: f64,
    pub uv: f64,
    /// Visibility in km
    pub visibility: f64,
    /// Provider-local time of the observation
    pub last_updated: String,
}

/// Multi-day forecast for a location
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct Forecast {
    pub city: String,
    pub country: String,
    pub forecast: Vec<ForecastDay>,
}

/// Aggregated conditions for one forecast day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    /// Calendar date (YYYY-MM-DD)
    pub date: String,
    pub max_temp: f64,
    pub min_temp: f64,
    pub avg_temp: f64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    /// Chance of rain in %
    pub precipitation_prob: f64,
    pub icon: String,
    pub hourly: Vec<HourSlot>,
}

/// Conditions for one hour within a forecast day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct HourSlot {
    /// Provider-local time (YYYY-MM-DD HH:MM)
    pub time: String,
    pub temperature: f64,
    pub condition: String,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation_prob: f64,
    pub icon: String,
}

/// Location returned by a city search
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct CityMatch {
    pub name: String,
    pub region: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// Query parameters for `GET /api/forecast/{city}`
#[derive(Clone, Debug, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct ForecastQuery {
    /// Number of days, 1-10 (default 7)
    pub days: Option<String>,
}

/// Query parameters for `GET /api/search`
#[derive(Clone, Debug, Default, Serialize, Deserialize, Apiv2Schema)]
pub struct CitySearchQuery {
    /// Partial city name
    pub q: Option<String>,
}
