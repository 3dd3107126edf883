//! Validated request inputs.
//!
//! Handlers turn raw path and query values into these types before calling
//! into the services, so sanitizing and clamping rules live in one place.

use crate::{
    error::ApiError,
    utils::params::{parse_leading_int, truncate_chars},
};
use std::fmt;

/// Longest city name forwarded to the provider or stored in history
pub const MAX_CITY_CHARS: usize = 50;
/// Longest search query forwarded to the provider
pub const MAX_QUERY_CHARS: usize = 100;

pub const DEFAULT_FORECAST_DAYS: u8 = 7;
pub const MIN_FORECAST_DAYS: u8 = 1;
pub const MAX_FORECAST_DAYS: u8 = 10;

pub const DEFAULT_PAGE_LIMIT: usize = 20;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Trimmed, non-empty city name of at most [`MAX_CITY_CHARS`] characters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityName(String);

impl CityName {
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ApiError::Validation("City name is required".to_string()));
        }
        Ok(Self(truncate_chars(trimmed, MAX_CITY_CHARS)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trimmed, non-empty search query of at most [`MAX_QUERY_CHARS`] characters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: Option<&str>) -> Result<Self, ApiError> {
        let trimmed = raw.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(ApiError::Validation("Search query is required".to_string()));
        }
        Ok(Self(truncate_chars(trimmed, MAX_QUERY_CHARS)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of forecast days, always within
/// [`MIN_FORECAST_DAYS`]..=[`MAX_FORECAST_DAYS`]
///
/// Out-of-range values fall back to [`DEFAULT_FORECAST_DAYS`] instead of
/// being pinned to the nearest bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForecastDays(u8);

impl ForecastDays {
    pub fn new(days: i64) -> Self {
        if (i64::from(MIN_FORECAST_DAYS)..=i64::from(MAX_FORECAST_DAYS)).contains(&days) {
            Self(days as u8)
        } else {
            Self::default()
        }
    }

    /// Build from an optional query value; unparsable input gives the default
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(parse_leading_int)
            .map(Self::new)
            .unwrap_or_default()
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl Default for ForecastDays {
    fn default() -> Self {
        Self(DEFAULT_FORECAST_DAYS)
    }
}

/// Pagination window for listing history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: usize,
    pub offset: usize,
}

impl PageRequest {
    /// Clamp raw values: a missing or zero limit becomes [`DEFAULT_PAGE_LIMIT`],
    /// anything else is pinned to `1..=MAX_PAGE_LIMIT`; offsets below zero become 0.
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = match limit {
            None | Some(0) => DEFAULT_PAGE_LIMIT,
            Some(value) => value.clamp(1, MAX_PAGE_LIMIT as i64) as usize,
        };
        let offset = offset.unwrap_or(0).max(0);
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);

        Self { limit, offset }
    }

    pub fn from_query(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self::new(
            limit.and_then(parse_leading_int),
            offset.and_then(parse_leading_int),
        )
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_name_rejects_blank() {
        for raw in ["", " ", "\t\n  "] {
            let err = CityName::parse(raw).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ref msg) if msg == "City name is required"));
        }
    }

    #[test]
    fn test_city_name_trims_and_truncates() {
        assert_eq!(CityName::parse("  London  ").unwrap().as_str(), "London");

        let long = "a".repeat(80);
        assert_eq!(CityName::parse(&long).unwrap().as_str().chars().count(), 50);

        // Truncation counts characters, not bytes
        let accented = "é".repeat(60);
        let city = CityName::parse(&accented).unwrap();
        assert_eq!(city.as_str().chars().count(), 50);
    }

    #[test]
    fn test_search_query_rules() {
        assert!(SearchQuery::parse(None).is_err());
        assert!(SearchQuery::parse(Some("   ")).is_err());
        assert_eq!(SearchQuery::parse(Some(" lon ")).unwrap().as_str(), "lon");

        let long = "q".repeat(150);
        assert_eq!(SearchQuery::parse(Some(&long)).unwrap().as_str().len(), 100);
    }

    #[test]
    fn test_forecast_days_defaults() {
        for raw in [None, Some("0"), Some("11"), Some("-3"), Some("abc"), Some("")] {
            assert_eq!(ForecastDays::from_query(raw).get(), 7, "input {raw:?}");
        }
    }

    #[test]
    fn test_forecast_days_in_range_pass_through() {
        for days in 1..=10 {
            let raw = days.to_string();
            assert_eq!(ForecastDays::from_query(Some(&raw)).get(), days as u8);
            assert_eq!(ForecastDays::new(days).get(), days as u8);
        }
        // Leading integer wins, like a lenient integer parse
        assert_eq!(ForecastDays::from_query(Some("3.9")).get(), 3);
        assert_eq!(ForecastDays::from_query(Some("5days")).get(), 5);
    }

    #[test]
    fn test_forecast_days_clamp_is_idempotent() {
        for raw in [-5, 0, 1, 7, 10, 11, 500] {
            let once = ForecastDays::new(raw);
            let twice = ForecastDays::new(i64::from(once.get()));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_page_request_defaults_and_clamps() {
        assert_eq!(PageRequest::from_query(None, None), PageRequest { limit: 20, offset: 0 });
        assert_eq!(PageRequest::from_query(Some("0"), None).limit, 20);
        assert_eq!(PageRequest::from_query(Some("abc"), Some("xyz")), PageRequest { limit: 20, offset: 0 });
        assert_eq!(PageRequest::from_query(Some("500"), None).limit, 100);
        assert_eq!(PageRequest::from_query(Some("-4"), None).limit, 1);
        assert_eq!(PageRequest::from_query(Some("15"), Some("-10")), PageRequest { limit: 15, offset: 0 });
        assert_eq!(PageRequest::from_query(None, Some("30")).offset, 30);
    }

    #[test]
    fn test_overflowing_query_values_clamp_to_bounds() {
        let huge = "99999999999999999999";
        assert_eq!(
            PageRequest::from_query(Some(huge), Some(huge)),
            PageRequest { limit: MAX_PAGE_LIMIT, offset: usize::MAX }
        );
        assert_eq!(PageRequest::from_query(Some("-99999999999999999999"), None).limit, 1);
        assert_eq!(ForecastDays::from_query(Some(huge)), ForecastDays::default());
    }
}
