//! Custom middleware implementations for the API.
//!
//! Security headers, CORS, request IDs with request logging, and metrics
//! collection.

pub mod cors;
pub mod metrics;
pub mod request_id;
pub mod security;

pub use cors::*;
pub use metrics::*;
pub use request_id::*;
pub use security::*;
