//! Business logic and service layer modules.
//!
//! The history store, the weather provider and its HTTP client, request
//! rate limiting, and Prometheus metrics.

pub mod history;
pub mod metrics;
pub mod provider_client;
pub mod rate_limit;
pub mod weather;

pub use history::*;
pub use metrics::*;
pub use provider_client::*;
pub use rate_limit::*;
pub use weather::*;
