//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod episodes;
pub mod health;

pub use episodes::{count_episodes_handler, create_episode_handler, list_episodes_handler};
pub use health::health_handler;
