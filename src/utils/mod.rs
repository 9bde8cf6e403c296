//! Utility functions shared by the infrastructure layer.
//!
//! - [`db_error`] - PostgreSQL error classification for episode writes

pub mod db_error;
