use axum::{extract::State, http::Uri, response::IntoResponse, Form, Json};
use tower_sessions::Session;

use crate::{
    model::vehicle::{CreateVehicleFormDto, VehicleLoadPageDto, VehiclesPageDto},
    server::{
        controller::finish_form,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::FlashSession,
        },
        model::{
            fleet::Fleet,
            vehicle::{CreateVehicleParams, Vehicle, VehicleLoad},
        },
        router::VEHICLES_PATH,
        service::{fleet::FleetService, vehicle::VehicleService},
        state::AppState,
    },
};

/// GET /vehicles
pub async fn get_vehicles(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;
    let scope = viewer.scope();

    let vehicles = VehicleService::new(&state.db).get_all(scope).await?;
    let fleets = FleetService::new(&state.db).get_all(scope).await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(VehiclesPageDto {
        flashes,
        vehicles: vehicles.into_iter().map(Vehicle::into_dto).collect(),
        fleets: fleets.into_iter().map(Fleet::into_dto).collect(),
    }))
}

/// POST /vehicles
pub async fn create_vehicle(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Form(form): Form<CreateVehicleFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let outcome: Result<Vehicle, AppError> = async {
        let params = CreateVehicleParams::from_form(form, viewer.forced_fleet())?;
        VehicleService::new(&state.db)
            .create(viewer.scope(), params)
            .await
    }
    .await;

    finish_form(
        &session,
        outcome,
        |vehicle| format!("Vehicle {} added", vehicle.plate_no),
        VEHICLES_PATH,
    )
    .await
}

/// GET /views/vehicle_load
///
/// Current load of every vehicle in scope, ordered by plate.
pub async fn get_vehicle_load(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let loads = VehicleService::new(&state.db)
        .get_loads(viewer.scope())
        .await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(VehicleLoadPageDto {
        flashes,
        vehicles: loads.into_iter().map(VehicleLoad::into_dto).collect(),
    }))
}
