use axum::{
    http::{header::LOCATION, StatusCode},
    response::Response,
};
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;
use tower_sessions::Session;

use crate::server::{
    config::AccessMode,
    error::AppError,
    middleware::session::AuthSession,
    model::user::{Role, SessionUser},
    state::AppState,
};
use test_utils::factory;

mod auth;
mod driver;
mod order;
mod report;
mod vehicle;

fn secured_state(db: &DatabaseConnection) -> AppState {
    AppState::new(db.clone(), AccessMode::Secured)
}

/// Creates an account for `related_id` and logs it into `session`.
async fn log_in(
    db: &DatabaseConnection,
    session: &Session,
    role: Role,
    related_id: i32,
    fleet_id: i32,
) -> Result<SessionUser, AppError> {
    let account = factory::user::UserFactory::new(db, role.as_str(), related_id)
        .build()
        .await?;
    let user = SessionUser {
        user_id: account.id,
        username: account.username,
        role,
        related_id,
        fleet_id,
    };
    AuthSession::new(session).set_user(&user).await?;

    Ok(user)
}

/// Asserts a post/redirect/get answer and returns its target.
fn redirect_target(response: &Response) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
