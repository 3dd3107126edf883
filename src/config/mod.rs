//! Configuration structures and loading utilities.
//!
//! Every struct here has a `Default` matching production defaults and a
//! `from_env()` constructor that overrides fields from environment variables.

pub mod history;
pub mod logging;
pub mod metrics;
pub mod provider_client;
pub mod rate_limit;
pub mod security;
pub mod server;
pub mod weather_api;

pub use history::*;
pub use logging::*;
pub use metrics::*;
pub use rate_limit::*;
pub use security::*;
pub use server::*;
pub use weather_api::*;
