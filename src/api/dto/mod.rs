//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies use Serde for JSON deserialization and validator for rule
//! checks; each DTO maps explicitly into its domain counterpart.

pub mod episode;
pub mod health;
