//! WeatherAPI.com provider tests against a local mock server.

use prometheus::Registry;
use serde_json::json;
use skycast_api::{
    CityName, ForecastDays, ProviderClient, ProviderClientConfig, ProviderError, SearchQuery,
    WeatherApiConfig, WeatherApiProvider, WeatherProvider, services::ProviderClientMetrics,
};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn provider_for(server: &MockServer, client: ProviderClient) -> WeatherApiProvider {
    WeatherApiProvider::new(
        WeatherApiConfig {
            api_key: "test-key".to_string(),
            base_url: format!("{}/v1", server.uri()),
        },
        client,
    )
    .unwrap()
}

fn provider(server: &MockServer) -> WeatherApiProvider {
    let client = ProviderClient::new(ProviderClientConfig::default(), None).unwrap();
    provider_for(server, client)
}

fn condition(text: &str) -> serde_json::Value {
    json!({ "text": text, "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png" })
}

#[tokio::test]
async fn test_current_weather_is_normalized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": { "name": "London", "region": "City of London, Greater London", "country": "United Kingdom", "lat": 51.52, "lon": -0.11 },
            "current": {
                "last_updated": "2024-06-01 12:00",
                "temp_c": 18.0,
                "condition": condition("Sunny"),
                "wind_kph": 9.4,
                "pressure_mb": 1020.0,
                "humidity": 55,
                "feelslike_c": 17.5,
                "vis_km": 10.0,
                "uv": 4.0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let snapshot = provider(&server)
        .current(&CityName::parse("  London ").unwrap())
        .await
        .unwrap();

    assert_eq!(snapshot.city, "London");
    assert_eq!(snapshot.country, "United Kingdom");
    assert_eq!(snapshot.temperature, 18.0);
    assert_eq!(snapshot.condition, "Sunny");
    assert_eq!(snapshot.humidity, 55.0);
    assert_eq!(snapshot.wind_speed, 9.4);
    assert_eq!(snapshot.feels_like, 17.5);
    assert_eq!(snapshot.last_updated, "2024-06-01 12:00");
}

#[tokio::test]
async fn test_forecast_sends_days_and_maps_hours() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .and(query_param("q", "Paris"))
        .and(query_param("days", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "location": { "name": "Paris", "region": "Ile-de-France", "country": "France", "lat": 48.87, "lon": 2.33 },
            "forecast": { "forecastday": [
                {
                    "date": "2024-06-01",
                    "day": {
                        "maxtemp_c": 24.0, "mintemp_c": 13.0, "avgtemp_c": 18.4,
                        "maxwind_kph": 15.1, "avghumidity": 61,
                        "daily_chance_of_rain": 20,
                        "condition": condition("Partly cloudy")
                    },
                    "hour": [
                        { "time": "2024-06-01 00:00", "temp_c": 14.2, "condition": condition("Clear"),
                          "wind_kph": 6.1, "humidity": 80, "chance_of_rain": 0 },
                        { "time": "2024-06-01 01:00", "temp_c": 13.8, "condition": condition("Clear"),
                          "wind_kph": 5.8, "humidity": 82, "chance_of_rain": 0 }
                    ]
                }
            ] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let forecast = provider(&server)
        .forecast(&CityName::parse("Paris").unwrap(), ForecastDays::new(3))
        .await
        .unwrap();

    assert_eq!(forecast.city, "Paris");
    assert_eq!(forecast.country, "France");
    assert_eq!(forecast.forecast.len(), 1);

    let day = &forecast.forecast[0];
    assert_eq!(day.date, "2024-06-01");
    assert_eq!(day.max_temp, 24.0);
    assert_eq!(day.min_temp, 13.0);
    assert_eq!(day.avg_temp, 18.4);
    assert_eq!(day.precipitation_prob, 20.0);
    assert_eq!(day.condition, "Partly cloudy");
    assert_eq!(day.hourly.len(), 2);
    assert_eq!(day.hourly[1].time, "2024-06-01 01:00");
    assert_eq!(day.hourly[1].temperature, 13.8);
}

#[tokio::test]
async fn test_search_maps_locations() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search.json"))
        .and(query_param("q", "lon"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2801268, "name": "London", "region": "City of London, Greater London", "country": "United Kingdom", "lat": 51.52, "lon": -0.11, "url": "london-city-of-london-greater-london-united-kingdom" },
            { "id": 315398, "name": "Londrina", "region": "Parana", "country": "Brazil", "lat": -23.3, "lon": -51.15, "url": "londrina-parana-brazil" }
        ])))
        .mount(&server)
        .await;

    let matches = provider(&server)
        .search_cities(&SearchQuery::parse(Some("lon")).unwrap())
        .await
        .unwrap();

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].name, "London");
    assert_eq!(matches[1].country, "Brazil");
    assert_eq!(matches[1].lat, -23.3);
}

#[tokio::test]
async fn test_upstream_error_status_and_message_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .current(&CityName::parse("Atlantis").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::new(400, "No matching location found."));
}

#[tokio::test]
async fn test_upstream_error_without_message_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast.json"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .forecast(&CityName::parse("Paris").unwrap(), ForecastDays::default())
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::new(503, "Failed to fetch forecast data"));
}

#[tokio::test]
async fn test_undecodable_body_is_an_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .search_cities(&SearchQuery::parse(Some("par")).unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::new(500, "Failed to search cities"));
}

#[tokio::test]
async fn test_slow_provider_times_out_as_internal_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let registry = Registry::new();
    let metrics = ProviderClientMetrics::new(&registry).unwrap();
    let client = ProviderClient::new(
        ProviderClientConfig {
            timeout_ms: 200,
            connect_timeout_ms: 100,
            enable_detailed_logging: false,
        },
        Some(metrics.clone()),
    )
    .unwrap();

    let err = provider_for(&server, client)
        .current(&CityName::parse("London").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::new(500, "Failed to fetch weather data"));
    assert_eq!(
        metrics.timeouts_total.with_label_values(&["current"]).get(),
        1.0
    );
}

#[tokio::test]
async fn test_unreachable_provider_is_an_internal_error() {
    let client = ProviderClient::new(ProviderClientConfig::default(), None).unwrap();
    let provider = WeatherApiProvider::new(
        WeatherApiConfig {
            api_key: "test-key".to_string(),
            // Nothing listens on port 1
            base_url: "http://127.0.0.1:1/v1".to_string(),
        },
        client,
    )
    .unwrap();

    let err = provider
        .current(&CityName::parse("London").unwrap())
        .await
        .unwrap_err();

    assert_eq!(err, ProviderError::new(500, "Failed to fetch weather data"));
}
