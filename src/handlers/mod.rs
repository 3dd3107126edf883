//! HTTP request handlers for API endpoints.
//!
//! Handlers validate raw input into the types in [`crate::models::input`],
//! delegate to the services, and wrap results in the response envelope.
//! Failures are returned as [`crate::error::ApiError`].

pub mod health;
pub mod history;
pub mod index;
pub mod metrics;
pub mod not_found;
pub mod openapi;
pub mod version;
pub mod weather;

pub use health::*;
pub use history::*;
pub use index::*;
pub use metrics::*;
pub use not_found::*;
pub use openapi::*;
pub use version::*;
pub use weather::*;
