//! Data models and schemas for the SkyCast API.
//!
//! This module contains the request/response models, the normalized weather
//! shapes, history entries, and the validated input types handlers build from
//! raw path and query values.

pub mod api;
pub mod history;
pub mod input;
pub mod weather;

pub use api::*;
pub use history::*;
pub use input::*;
pub use weather::*;
