//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Episode store contract
//! - [`anime_resolver`] - Anime catalog lookup contract
//!
//! The domain layer has no knowledge of HTTP or of a concrete database driver
//! beyond the error type carried by [`repositories::StoreError`]. Business rules
//! are applied in [`crate::application::services`].

pub mod anime_resolver;
pub mod entities;
pub mod repositories;

pub use anime_resolver::AnimeResolver;

#[cfg(test)]
pub use anime_resolver::MockAnimeResolver;
