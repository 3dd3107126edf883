//! Weather endpoint handlers: current conditions, forecast and city search.

use crate::{
    error::ApiError,
    models::{
        ApiEnvelope, CityMatch, CityName, CitySearchQuery, Forecast, ForecastDays, ForecastQuery,
        SearchQuery, WeatherSnapshot,
    },
    services::{rate_limit::rate_limit_middleware, weather::WeatherProvider},
};
use actix_web::{Error, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

fn provider(req: &HttpRequest) -> Result<&web::Data<dyn WeatherProvider>, ApiError> {
    req.app_data::<web::Data<dyn WeatherProvider>>()
        .ok_or_else(|| ApiError::Server("Weather provider is not configured".to_string()))
}

/// Current weather endpoint
///
/// Looks up the current conditions for a city. The city is trimmed and
/// truncated before it reaches the provider; provider failures keep the
/// upstream status code.
#[api_v2_operation(
    summary = "Current Weather",
    description = "Returns current weather conditions for the given city.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = ApiEnvelope<WeatherSnapshot>),
        (status = 400, description = "Validation Error - City name is required"),
        (status = 429, description = "Too Many Requests"),
        (status = 500, description = "API Error - Weather provider unavailable")
    )
)]
pub async fn current_weather(
    req: HttpRequest,
    city: web::Path<String>,
) -> Result<web::Json<ApiEnvelope<WeatherSnapshot>>, Error> {
    rate_limit_middleware(&req)?;

    let city = CityName::parse(&city)?;
    let snapshot = provider(&req)?
        .current(&city)
        .await
        .map_err(ApiError::from)?;

    Ok(web::Json(ApiEnvelope::ok(snapshot)))
}

/// Forecast endpoint
///
/// `days` is optional; values outside 1-10 or that fail to parse fall back
/// to 7.
#[api_v2_operation(
    summary = "Weather Forecast",
    description = "Returns a daily forecast with hourly detail for the given city. The days parameter accepts 1-10 and defaults to 7.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = ApiEnvelope<Forecast>),
        (status = 400, description = "Validation Error - City name is required"),
        (status = 429, description = "Too Many Requests"),
        (status = 500, description = "API Error - Weather provider unavailable")
    )
)]
pub async fn forecast(
    req: HttpRequest,
    city: web::Path<String>,
    query: web::Query<ForecastQuery>,
) -> Result<web::Json<ApiEnvelope<Forecast>>, Error> {
    rate_limit_middleware(&req)?;

    let city = CityName::parse(&city)?;
    let days = ForecastDays::from_query(query.days.as_deref());
    let forecast = provider(&req)?
        .forecast(&city, days)
        .await
        .map_err(ApiError::from)?;

    Ok(web::Json(ApiEnvelope::ok(forecast)))
}

/// City search endpoint
#[api_v2_operation(
    summary = "City Search",
    description = "Returns cities matching a partial name, for autocomplete.",
    tags("Weather"),
    responses(
        (status = 200, description = "Successful response", body = ApiEnvelope<Vec<CityMatch>>),
        (status = 400, description = "Validation Error - Search query is required"),
        (status = 429, description = "Too Many Requests"),
        (status = 500, description = "API Error - Weather provider unavailable")
    )
)]
pub async fn search_cities(
    req: HttpRequest,
    query: web::Query<CitySearchQuery>,
) -> Result<web::Json<ApiEnvelope<Vec<CityMatch>>>, Error> {
    rate_limit_middleware(&req)?;

    let query = SearchQuery::parse(query.q.as_deref())?;
    let matches = provider(&req)?
        .search_cities(&query)
        .await
        .map_err(ApiError::from)?;

    Ok(web::Json(ApiEnvelope::ok(matches)))
}
