//! The shared library for Rollcall, the Mergington High School activity signup service.
//!
//! This library holds the pieces the backend builds on: the activity data model,
//! the roster error types, logging setup and the static activity seed.

pub mod data;
pub mod errors;
pub mod log;
pub mod seed;

pub use serde;
pub use serde_json;
pub use tracing;
