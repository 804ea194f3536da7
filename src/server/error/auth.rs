use axum::response::{IntoResponse, Redirect, Response};
use thiserror::Error;

use crate::server::router::{HOME_PATH, LOGIN_PATH};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user in the session for a protected route.
    ///
    /// Redirects to the login page carrying the requested URL as `next`.
    #[error("Login required to access {next}")]
    LoginRequired { next: String },

    /// Username and password did not match an account.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account's manager or driver record is missing, so no fleet scope
    /// can be derived.
    #[error("Account is not linked to a fleet")]
    UnlinkedAccount(i32),

    /// User is logged in but is not a manager.
    ///
    /// The guard has already flashed a message; redirects to the home page.
    #[error("User {0} attempted to access a manager-only route")]
    ManagerRequired(i32),

    /// User tried to reach data outside of their scope.
    ///
    /// The caller has already flashed a message; redirects to the home page.
    #[error("User {0} was denied access: {1}")]
    AccessDenied(i32, String),
}

/// Builds the login URL for a protected path.
pub fn login_url(next: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(next.as_bytes()).collect();
    format!("{}?next={}", LOGIN_PATH, encoded)
}

/// Converts authentication errors into redirects.
///
/// - `LoginRequired` → login page with `next`
/// - `InvalidCredentials` / `UnlinkedAccount` → login page
/// - `ManagerRequired` / `AccessDenied` → home page
///
/// Messages for the user travel through the session flashes, never through
/// the response body.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRequired { next } => Redirect::to(&login_url(&next)).into_response(),
            Self::InvalidCredentials | Self::UnlinkedAccount(_) => {
                Redirect::to(LOGIN_PATH).into_response()
            }
            Self::ManagerRequired(_) | Self::AccessDenied(_, _) => {
                Redirect::to(HOME_PATH).into_response()
            }
        }
    }
}
