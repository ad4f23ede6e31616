//! # API Shared
//!
//! Shared wire types and helpers for the EMR APIs.
//!
//! Contains:
//! - Request/response types used on the wire (`types` module)
//! - Shared services like `HealthService`
//! - API key checking (usable by the REST server and the CLI)
//!
//! Used by `emr-core` and `api-rest` so that both agree on the JSON shapes.

pub mod auth;
pub mod health;
pub mod types;

pub use health::HealthService;
pub use types::*;
