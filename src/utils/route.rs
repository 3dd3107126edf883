//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Label used for requests that matched no resource
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Extract the matched route pattern (e.g. `/api/weather/{city}`)
///
/// Using the pattern rather than the raw path keeps metric label cardinality
/// bounded. Only meaningful once routing has run, i.e. on the response side
/// of a middleware.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}
