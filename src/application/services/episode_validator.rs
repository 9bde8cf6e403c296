//! Business-rule checks for episodes.

use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::AnimeResolver;
use crate::domain::entities::{Anime, NewEpisode};
use crate::error::AppError;

/// Lowest accepted watch order.
pub const MIN_ORDER_TO_WATCH: i32 = 0;

/// Default number of years past "now" an episode may be scheduled.
pub const DEFAULT_MAX_FUTURE_RELEASE_YEARS: u32 = 10;

pub fn anime_not_found_message(anime_id: Uuid) -> String {
    format!("Anime with id {anime_id} doesn't exist")
}

pub fn release_before_anime_message(release_year: i32) -> String {
    format!("Episode release date cannot be before anime start: {release_year}")
}

pub fn release_too_future_message(max_year: i32) -> String {
    format!("Release date is too far in the future (max: {max_year})")
}

pub fn order_below_minimum_message() -> String {
    format!("orderToWatch must not be less than {MIN_ORDER_TO_WATCH}")
}

/// Validates episodes against the anime they belong to.
///
/// Checks run in a fixed order and stop at the first failure, so a rejected
/// episode always carries exactly one message.
pub struct EpisodeValidator {
    resolver: Arc<dyn AnimeResolver>,
    max_future_release_years: u32,
}

impl EpisodeValidator {
    /// Creates a new validator.
    pub fn new(resolver: Arc<dyn AnimeResolver>, max_future_release_years: u32) -> Self {
        Self {
            resolver,
            max_future_release_years,
        }
    }

    /// Resolves an anime that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the anime is unknown.
    pub async fn resolve_existing(&self, anime_id: Uuid) -> Result<Anime, AppError> {
        self.resolver
            .resolve(anime_id)
            .await
            .ok_or_else(|| AppError::validation([anime_not_found_message(anime_id)]))
    }

    /// Validates an episode before it is written.
    ///
    /// # Order of checks
    ///
    /// 1. Watch order is not negative (no catalog call is made otherwise)
    /// 2. The anime exists
    /// 3. The release date is not before January 1 of the anime's release year
    /// 4. The release date is not more than `max_future_release_years` ahead
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with a single message on the first failed
    /// check. Returns [`AppError::Internal`] if the date bounds cannot be
    /// represented.
    pub async fn validate_for_create(&self, new_episode: &NewEpisode) -> Result<Anime, AppError> {
        if new_episode.order_to_watch < MIN_ORDER_TO_WATCH {
            return Err(AppError::validation([order_below_minimum_message()]));
        }

        let anime = self.resolve_existing(new_episode.anime_id).await?;

        check_release_window(
            new_episode.release_date,
            &anime,
            Utc::now(),
            self.max_future_release_years,
        )?;

        Ok(anime)
    }
}

/// Checks that `release_date` lies within the allowed window for `anime`.
///
/// The window starts (inclusive) at midnight UTC on January 1 of the anime's
/// release year and ends (inclusive) `max_future_years` after `now`.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the date is out of range.
pub fn check_release_window(
    release_date: DateTime<Utc>,
    anime: &Anime,
    now: DateTime<Utc>,
    max_future_years: u32,
) -> Result<(), AppError> {
    let min_release = NaiveDate::from_ymd_opt(anime.release_year, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|start| start.and_utc())
        .ok_or_else(|| {
            AppError::internal(anyhow!(
                "anime {} has unrepresentable release year {}",
                anime.id,
                anime.release_year
            ))
        })?;

    let max_release = now
        .checked_add_months(Months::new(max_future_years.saturating_mul(12)))
        .ok_or_else(|| {
            AppError::internal(anyhow!(
                "release horizon of {max_future_years} years overflows"
            ))
        })?;

    if release_date < min_release {
        return Err(AppError::validation([release_before_anime_message(
            anime.release_year,
        )]));
    }

    if release_date > max_release {
        return Err(AppError::validation([release_too_future_message(
            max_release.year(),
        )]));
    }

    Ok(())
}
