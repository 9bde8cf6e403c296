//! DTOs for episode endpoints.
//!
//! Bodies are decoded into loosely typed fields so that a missing or wrongly
//! typed value becomes a rule message instead of a decoder error. Every field
//! is checked and all failures are reported together.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::{Uuid, Variant};
use validator::{Validate, ValidationError};

use crate::domain::entities::{EpisodeListQuery, NewEpisode};
use crate::error::AppError;

/// Default number of episodes returned per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page the list endpoint serves.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Returns `true` for a hyphenated RFC 4122 version 4 UUID.
pub fn is_uuid_v4(value: &str) -> bool {
    value.len() == 36
        && Uuid::parse_str(value)
            .map(|id| id.get_version_num() == 4 && id.get_variant() == Variant::RFC4122)
            .unwrap_or(false)
}

fn rule(message: &'static str) -> ValidationError {
    ValidationError::new("invalid").with_message(message.into())
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn parse_title(value: &Value) -> Result<Option<String>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::String(title) => Ok(Some(title.clone())),
        _ => Err("title must be a string"),
    }
}

fn parse_order_to_watch(value: &Value) -> Result<i32, &'static str> {
    if is_blank(value) {
        return Err("orderToWatch should not be empty");
    }

    let order = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        _ => None,
    }
    .ok_or("orderToWatch must be an integer number")?;

    if order < 0 {
        return Err("orderToWatch must not be less than 0");
    }
    i32::try_from(order).map_err(|_| "orderToWatch must not be greater than 2147483647")
}

/// Accepts RFC 3339 timestamps, `YYYY-MM-DD` dates (midnight UTC) and epoch
/// milliseconds.
fn parse_release_date(value: &Value) -> Result<DateTime<Utc>, &'static str> {
    const NOT_A_DATE: &str = "releaseDate must be a Date instance";

    match value {
        Value::Null => Err("releaseDate should not be empty"),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|date| date.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|date| date.and_utc())
            })
            .ok_or(NOT_A_DATE),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or(NOT_A_DATE),
        _ => Err(NOT_A_DATE),
    }
}

fn parse_anime_id(value: &Value) -> Result<Uuid, &'static str> {
    if is_blank(value) {
        return Err("animeId should not be empty");
    }

    match value {
        Value::String(s) if is_uuid_v4(s) => Uuid::parse_str(s).map_err(|_| "animeId must be a UUID"),
        _ => Err("animeId must be a UUID"),
    }
}

fn parse_anime_ids(value: &Value) -> Result<Vec<Uuid>, &'static str> {
    let values = match value {
        Value::Null => return Err("animeIds should not be empty"),
        Value::Array(values) => values,
        _ => return Err("animeIds must be an array"),
    };
    if values.is_empty() {
        return Err("animeIds should not be empty");
    }

    values
        .iter()
        .map(|value| match value {
            Value::String(s) if is_uuid_v4(s) => Uuid::parse_str(s).ok(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .ok_or("each value in animeIds must be a UUID")
}

fn validate_title(value: &Value) -> Result<(), ValidationError> {
    parse_title(value).map(drop).map_err(rule)
}

fn validate_order_to_watch(value: &Value) -> Result<(), ValidationError> {
    parse_order_to_watch(value).map(drop).map_err(rule)
}

fn validate_release_date(value: &Value) -> Result<(), ValidationError> {
    parse_release_date(value).map(drop).map_err(rule)
}

fn validate_anime_id(value: &Value) -> Result<(), ValidationError> {
    parse_anime_id(value).map(drop).map_err(rule)
}

fn validate_anime_ids(value: &Value) -> Result<(), ValidationError> {
    parse_anime_ids(value).map(drop).map_err(rule)
}

/// Request body for `POST /api/episode`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEpisodeRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_title"))]
    pub title: Value,

    #[serde(default)]
    #[validate(custom(function = "validate_order_to_watch"))]
    pub order_to_watch: Value,

    #[serde(default)]
    #[validate(custom(function = "validate_release_date"))]
    pub release_date: Value,

    #[serde(default)]
    #[validate(custom(function = "validate_anime_id"))]
    pub anime_id: Value,
}

impl CreateEpisodeRequest {
    /// Converts a validated request into a domain [`NewEpisode`].
    pub fn into_new_episode(self) -> Result<NewEpisode, AppError> {
        let invalid = |message: &'static str| AppError::validation([message]);

        Ok(NewEpisode {
            anime_id: parse_anime_id(&self.anime_id).map_err(invalid)?,
            title: parse_title(&self.title).map_err(invalid)?,
            order_to_watch: parse_order_to_watch(&self.order_to_watch).map_err(invalid)?,
            release_date: parse_release_date(&self.release_date).map_err(invalid)?,
        })
    }
}

/// Query parameters for `GET /api/episode`.
///
/// Everything arrives as text; numbers are parsed in [`into_list_query`] so a
/// bad value is reported next to the other failures.
///
/// [`into_list_query`]: ListEpisodesQuery::into_list_query
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEpisodesQuery {
    pub anime_id: Option<String>,
    pub from: Option<String>,
    pub size: Option<String>,
}

fn parse_page_param(
    value: Option<&str>,
    default: i64,
    not_integer: &'static str,
) -> Result<i64, &'static str> {
    value.map_or(Ok(default), |v| v.trim().parse().map_err(|_| not_integer))
}

impl ListEpisodesQuery {
    /// Validates the parameters and converts them into an [`EpisodeListQuery`].
    ///
    /// # Validation
    ///
    /// - `animeId` must be a version 4 UUID
    /// - `from` must be an integer >= 0 (default: 0)
    /// - `size` must be an integer between 1 and [`MAX_PAGE_SIZE`] (default: 10)
    ///
    /// Every failed rule contributes one message.
    pub fn into_list_query(self) -> Result<EpisodeListQuery, AppError> {
        let mut errors = Vec::new();

        let anime_id = match self.anime_id.as_deref() {
            None | Some("") => {
                errors.push("animeId should not be empty".to_string());
                None
            }
            Some(value) if is_uuid_v4(value) => Uuid::parse_str(value).ok(),
            Some(_) => {
                errors.push("animeId must be a UUID".to_string());
                None
            }
        };

        let from = parse_page_param(self.from.as_deref(), 0, "from must be an integer number");
        match from {
            Ok(from) if from < 0 => errors.push("from must not be less than 0".to_string()),
            Ok(_) => {}
            Err(message) => errors.push(message.to_string()),
        }

        let size = parse_page_param(
            self.size.as_deref(),
            DEFAULT_PAGE_SIZE,
            "size must be an integer number",
        );
        match size {
            Ok(size) if size < 1 => errors.push("size must not be less than 1".to_string()),
            Ok(size) if size > MAX_PAGE_SIZE => {
                errors.push(format!("size must not be greater than {MAX_PAGE_SIZE}"))
            }
            Ok(_) => {}
            Err(message) => errors.push(message.to_string()),
        }

        match (anime_id, from, size) {
            (Some(anime_id), Ok(from), Ok(size)) if errors.is_empty() => Ok(EpisodeListQuery {
                anime_id,
                from,
                size,
            }),
            _ => Err(AppError::Validation { errors }),
        }
    }
}

/// Request body for `POST /api/episode/_counts`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CountEpisodesRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_anime_ids"))]
    pub anime_ids: Value,
}

impl CountEpisodesRequest {
    /// Enforces the list size limit and parses the ids.
    pub fn into_anime_ids(self, max_ids: usize) -> Result<Vec<Uuid>, AppError> {
        let anime_ids =
            parse_anime_ids(&self.anime_ids).map_err(|message| AppError::validation([message]))?;

        if anime_ids.len() > max_ids {
            return Err(AppError::validation([format!(
                "animeIds must contain no more than {max_ids} elements"
            )]));
        }

        Ok(anime_ids)
    }
}
