use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use tower_sessions::Session;

use crate::{
    model::user::{LoginFormDto, LoginPageDto, NextQuery},
    server::{
        error::{
            auth::{login_url, AuthError},
            AppError,
        },
        middleware::session::{AuthSession, FlashSession},
        router::{HOME_PATH, LOGIN_PATH},
        service::auth::AuthService,
        state::AppState,
        util::parse::present,
    },
};

/// GET /login
pub async fn login_page(
    session: Session,
    Query(query): Query<NextQuery>,
) -> Result<impl IntoResponse, AppError> {
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(LoginPageDto {
        flashes,
        next: local_path(query.next),
    }))
}

/// POST /login
///
/// On success stores the user in a fresh session and redirects to `next`
/// when it is a local path, otherwise home. A failed attempt is flashed and
/// sent back to the login page.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let next = local_path(form.next);
    let username = present(form.username).unwrap_or_default();
    let password = form.password.unwrap_or_default();

    let user = match AuthService::new(&state.db).login(&username, &password).await {
        Ok(user) => user,
        Err(AppError::AuthErr(
            err @ (AuthError::InvalidCredentials | AuthError::UnlinkedAccount(_)),
        )) => {
            FlashSession::new(&session)
                .push_error(err.to_string())
                .await?;
            let back = match next {
                Some(ref next) => login_url(next),
                None => LOGIN_PATH.to_string(),
            };
            return Ok(Redirect::to(&back));
        }
        Err(err) => return Err(err),
    };

    AuthSession::new(&session).set_user(&user).await?;
    FlashSession::new(&session)
        .push_success(format!("Welcome back, {} ({})", user.username, user.role))
        .await?;

    Ok(Redirect::to(next.as_deref().unwrap_or(HOME_PATH)))
}

/// GET /logout
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;
    FlashSession::new(&session).push_success("Logged out").await?;

    Ok(Redirect::to(LOGIN_PATH))
}

/// Keeps `next` only when it stays on this site.
fn local_path(next: Option<String>) -> Option<String> {
    present(next).filter(|path| {
        path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
    })
}
