//! Backend services for the activity directory.
//!
//! This module provides the service layer abstraction over activity rosters
//! and its in-memory implementation.

pub mod activities;

pub use activities::*;
