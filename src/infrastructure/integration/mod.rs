//! Clients for services owned by other teams.
//!
//! - [`HttpAnimeResolver`] - anime catalog lookups with a static fallback table

pub mod fallback_anime;
pub mod http_anime_resolver;

pub use http_anime_resolver::{HttpAnimeResolver, ResolveError};
