//! Translation of PostgreSQL write errors into store errors.

use std::sync::LazyLock;

use regex::Regex;
use sqlx::error::ErrorKind;
use sqlx::postgres::PgDatabaseError;

use crate::domain::repositories::{FieldConflict, StoreError};

/// Matches the `DETAIL` line PostgreSQL attaches to unique violations, e.g.
/// `Key (anime_id, order_to_watch)=(6f1c…, 3) already exists.`
static UNIQUE_DETAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Key \((?P<columns>.+?)\)=\((?P<values>.*)\) already exists\.?$").unwrap()
});

/// Classifies a failed write.
///
/// - unique violations become [`StoreError::ConstraintViolation`]; conflicts are
///   read from the error detail, or taken from `fallback` when the detail is
///   missing or unparseable
/// - `NOT NULL` and `CHECK` violations become [`StoreError::SchemaViolation`]
/// - anything else is passed through as [`StoreError::Database`]
pub fn classify_write_error(
    err: sqlx::Error,
    fallback: impl FnOnce() -> Vec<FieldConflict>,
) -> StoreError {
    let classified = err.as_database_error().map(|db_err| {
        let detail = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(PgDatabaseError::detail)
            .map(str::to_owned);
        (db_err.kind(), db_err.message().to_owned(), detail)
    });

    match classified {
        Some((ErrorKind::UniqueViolation, _, detail)) => StoreError::ConstraintViolation {
            conflicts: detail
                .as_deref()
                .and_then(parse_unique_violation_detail)
                .unwrap_or_else(fallback),
        },
        Some((ErrorKind::NotNullViolation | ErrorKind::CheckViolation, message, _)) => {
            StoreError::SchemaViolation(message)
        }
        _ => StoreError::Database(err),
    }
}

/// Extracts the conflicting field/value pairs from a unique violation detail.
///
/// Column names are converted to their public camelCase form. Returns `None`
/// when the detail does not follow PostgreSQL's format.
pub fn parse_unique_violation_detail(detail: &str) -> Option<Vec<FieldConflict>> {
    let captures = UNIQUE_DETAIL_REGEX.captures(detail.trim())?;
    let columns: Vec<&str> = captures["columns"].split(", ").collect();
    let values: Vec<&str> = captures["values"].split(", ").collect();

    if columns.len() != values.len() {
        return None;
    }

    Some(
        columns
            .into_iter()
            .zip(values)
            .map(|(column, value)| FieldConflict::new(public_field_name(column), value))
            .collect(),
    )
}

/// Converts a snake_case column name to the camelCase name used in the API.
pub fn public_field_name(column: &str) -> String {
    let mut parts = column.split('_').filter(|part| !part.is_empty());
    let mut name = parts.next().unwrap_or_default().to_owned();

    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }

    name
}
