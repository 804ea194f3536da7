use axum::{extract::State, http::Uri, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::HomePageDto,
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, FlashSession},
        },
        state::AppState,
    },
};

/// GET /
///
/// Landing page. Requires a login in secured mode; `user` is `None` in open
/// mode.
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[])
        .await?;

    let user = AuthSession::new(&session).get_user().await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(HomePageDto {
        flashes,
        user: user.map(|u| u.into_dto()),
    }))
}
