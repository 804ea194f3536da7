//! HTTP handlers.
//!
//! GET handlers answer with a JSON page DTO carrying the pending flashes.
//! POST handlers validate the form, call the service and redirect back to the
//! page, reporting the outcome as a flash (post/redirect/get).

pub mod auth;
pub mod driver;
pub mod exception;
pub mod home;
pub mod order;
pub mod report;
pub mod vehicle;

#[cfg(test)]
mod test;

use axum::response::Redirect;
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::session::FlashSession};

/// Finishes a form submission with a flash and a redirect to `to`.
///
/// Failures the user can act on are flashed as errors. Any other error is
/// returned so it becomes a response of its own.
async fn finish_form<T>(
    session: &Session,
    outcome: Result<T, AppError>,
    success: impl FnOnce(T) -> String,
    to: &str,
) -> Result<Redirect, AppError> {
    let flash = FlashSession::new(session);

    match outcome {
        Ok(value) => flash.push_success(success(value)).await?,
        Err(err) => match err.flash_message() {
            Some(message) => flash.push_error(message).await?,
            None => return Err(err),
        },
    }

    Ok(Redirect::to(to))
}

/// Flashes a failed report query and carries on rendering the page without a
/// result.
async fn flash_report_failure<T>(
    session: &Session,
    outcome: Result<Option<T>, AppError>,
) -> Result<Option<T>, AppError> {
    match outcome {
        Ok(result) => Ok(result),
        Err(err) => match err.flash_message() {
            Some(message) => {
                FlashSession::new(session).push_error(message).await?;
                Ok(None)
            }
            None => Err(err),
        },
    }
}
