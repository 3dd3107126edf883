//! OpenAPI specification for the API.

use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the OpenAPI document served at `/api/spec/v2`
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "SkyCast Weather API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Weather lookups backed by WeatherAPI.com, with a bounded in-memory search history.\n\n\
                ## Response envelope\n\
                Every `/api` endpoint except health and metrics answers with:\n\
                ```json\n\
                { \"success\": true, \"data\": { }, \"message\": \"optional\" }\n\
                ```\n\
                Failures carry `error` (a short label such as `Validation Error`, `Not Found`, \
                `API Error`, `Too Many Requests`) and a human-readable `message`.\n\
                \n\
                ## Rate limiting\n\
                Each client address may make `RATE_LIMIT_MAX_REQUESTS` requests (default 100) per \
                `RATE_LIMIT_WINDOW_SECONDS` window (default 900). `/api/health` and `/api/metrics` are exempt.\n\
                \n\
                ## History\n\
                The history keeps the most recent `HISTORY_CAPACITY` lookups (default 100) in memory; \
                the oldest entry is evicted when a new one is added at capacity. It is lost on restart.\n\
                \n\
                ## Request IDs\n\
                Send `X-Request-ID` to correlate logs; otherwise one is generated. It is echoed in the response."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}
