//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating the anime
//! resolver, business-rule validation and the episode store. Services consume
//! domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::episode_service::EpisodeService`] - Episode create/list/count workflow
//! - [`services::episode_validator::EpisodeValidator`] - Anime existence and release-date rules

pub mod services;
