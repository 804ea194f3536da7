use axum::{extract::State, http::Uri, response::IntoResponse, Form, Json};
use tower_sessions::Session;

use crate::{
    model::driver::{CreateDriverFormDto, DriversPageDto},
    server::{
        controller::finish_form,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::FlashSession,
        },
        model::{
            driver::{CreateDriverParams, Driver},
            fleet::Fleet,
        },
        router::DRIVERS_PATH,
        service::{driver::DriverService, fleet::FleetService},
        state::AppState,
    },
};

/// GET /drivers
///
/// Drivers in the viewer's scope ordered by name, and the fleets a new driver
/// can join.
pub async fn get_drivers(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;
    let scope = viewer.scope();

    let drivers = DriverService::new(&state.db).get_all(scope).await?;
    let fleets = FleetService::new(&state.db).get_all(scope).await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(DriversPageDto {
        flashes,
        drivers: drivers.into_iter().map(Driver::into_dto).collect(),
        fleets: fleets.into_iter().map(Fleet::into_dto).collect(),
    }))
}

/// POST /drivers
pub async fn create_driver(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Form(form): Form<CreateDriverFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let outcome: Result<Driver, AppError> = async {
        let params = CreateDriverParams::from_form(form, viewer.forced_fleet())?;
        DriverService::new(&state.db)
            .create(viewer.scope(), params)
            .await
    }
    .await;

    finish_form(
        &session,
        outcome,
        |driver| format!("Driver {} ({}) added", driver.name, driver.employee_no),
        DRIVERS_PATH,
    )
    .await
}
