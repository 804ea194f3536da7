//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers. Form handlers
//! turn the user-facing variants into flash messages through
//! [`AppError::flash_message`]; everything else becomes an HTTP response via
//! `IntoResponse`.

pub mod auth;
pub mod config;
pub mod constraint;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, constraint::ConstraintViolation,
        internal::InternalError, validation::ValidationError,
    },
};

/// Flash text used for database failures that are not constraint violations.
pub const DATABASE_ERROR_MESSAGE: &str = "Database error: the change was not saved";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization failure.
    ///
    /// Delegates to `AuthError::into_response()` which answers with a
    /// redirect.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Rejected user input.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Write rejected by a database constraint.
    #[error(transparent)]
    ConstraintErr(#[from] ConstraintViolation),

    /// Unexpected state inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised by the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Converts a failed write into a constraint violation when the database
    /// reports one, keeping any other failure as a plain database error.
    pub fn from_write(err: DbErr) -> Self {
        match ConstraintViolation::from_db_err(&err) {
            Some(violation) => Self::ConstraintErr(violation),
            None => Self::DbErr(err),
        }
    }

    /// Message to flash when this error ends a form submission.
    ///
    /// # Returns
    /// - `Some(message)` - Validation failures, constraint violations and
    ///   database failures; database details are logged, not shown
    /// - `None` - The error must propagate as a response instead
    pub fn flash_message(&self) -> Option<String> {
        match self {
            Self::ValidationErr(err) => Some(err.to_string()),
            Self::ConstraintErr(err) => Some(err.to_string()),
            Self::DbErr(err) => {
                tracing::error!("Database error during form submission: {}", err);
                Some(DATABASE_ERROR_MESSAGE.to_string())
            }
            _ => None,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - Redirect - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For validation errors naming a missing record
/// - 400 Bad Request - For any other validation error that was not flashed
/// - 500 Internal Server Error - For everything else, with details logged
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => {
                tracing::debug!("{}", err);
                err.into_response()
            }
            Self::ValidationErr(err) => {
                let status = match err {
                    ValidationError::NotFound(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_REQUEST,
                };
                (
                    status,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged, generic 500.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
