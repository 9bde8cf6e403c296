//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Episode`] - A stored episode belonging to an anime
//! - [`Anime`] - Read-only anime metadata from the external catalog
//!
//! Creation input lives in its own struct ([`NewEpisode`]) and the public JSON
//! shape is produced by an explicit projection ([`EpisodeInfo`]).

pub mod anime;
pub mod episode;

pub use anime::Anime;
pub use episode::{Episode, EpisodeInfo, EpisodeListQuery, NewEpisode};
