//! Utility functions and helper modules.
//!
//! Request introspection (client IP, user agent, route pattern) and lenient
//! parsing helpers for query parameters.

pub mod http;
pub mod params;
pub mod route;

pub use http::*;
pub use params::*;
pub use route::*;
