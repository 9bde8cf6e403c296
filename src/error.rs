//! Application error taxonomy and its HTTP mapping.
//!
//! | Variant                  | Status | Body                      |
//! |--------------------------|--------|---------------------------|
//! | [`AppError::Validation`] | 400    | `{"errors": [...]}`       |
//! | [`AppError::Duplicate`]  | 409    | `{"errors": [...]}`       |
//! | [`AppError::Internal`]   | 500    | `{"message": "..."}`      |
//!
//! Internal errors are logged with full detail and never leak to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<String>,
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A business rule or input check failed. Recoverable by fixing the request.
    #[error("validation failed: {}", .errors.join("; "))]
    Validation { errors: Vec<String> },

    /// A uniqueness conflict detected at write time.
    #[error("duplicate value: {}", .errors.join("; "))]
    Duplicate { errors: Vec<String> },

    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl AppError {
    pub fn validation<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn duplicate<I, S>(errors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Duplicate {
            errors: errors.into_iter().map(Into::into).collect(),
        }
    }

    pub fn internal(error: impl Into<anyhow::Error>) -> Self {
        Self::Internal(error.into())
    }

    /// Client-facing messages. Empty for internal errors.
    pub fn messages(&self) -> &[String] {
        match self {
            Self::Validation { errors } | Self::Duplicate { errors } => errors,
            Self::Internal(_) => &[],
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { errors } => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            AppError::Duplicate { errors } => {
                (StatusCode::CONFLICT, Json(ErrorsBody { errors })).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "Unhandled internal error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = MessageBody {
                    message: status.canonical_reason().unwrap_or("Internal Server Error"),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let messages = fields.into_iter().flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
        });

        Self::validation(messages)
    }
}
