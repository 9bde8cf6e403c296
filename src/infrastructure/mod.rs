//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and the anime catalog.
//!
//! # Modules
//!
//! - [`integration`] - HTTP client for the external anime catalog
//! - [`persistence`] - Episode repository implementations

pub mod integration;
pub mod persistence;
