//! # SportsLink Core
//!
//! Domain models shared between the booking engine and the SportsLink rental
//! backend, together with the error taxonomy used across the workspace.
//!
//! The models mirror the backend's JSON contract (camelCase field names,
//! SCREAMING_SNAKE_CASE enums, naive local timestamps).

/// Error types shared by every crate in the workspace
pub mod errors;
/// Facility, equipment, suggestion and rental models
pub mod models;
