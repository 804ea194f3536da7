mod model;
mod server;

use tower_http::trace::TraceLayer;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState,
    util::password::hash_password,
};

/// Prints the Argon2id hash of a password read from stdin, for provisioning
/// `app_user` rows.
const HASH_PASSWORD_COMMAND: &str = "hash-password";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    if std::env::args().nth(1).as_deref() == Some(HASH_PASSWORD_COMMAND) {
        let mut password = String::new();
        std::io::stdin().read_line(&mut password)?;
        println!("{}", hash_password(password.trim_end_matches(['\r', '\n']))?);
        return Ok(());
    }

    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;

    let app = router::router(config.access_mode)
        .with_state(AppState::new(db, config.access_mode))
        .layer(session)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;

    tracing::info!(
        "Listening on {} in {:?} mode",
        config.bind_address(),
        config.access_mode
    );

    axum::serve(listener, app).await?;

    Ok(())
}
