use axum::{extract::State, http::Uri, response::IntoResponse, Form, Json};
use tower_sessions::Session;

use crate::{
    model::order::{AssignOrderFormDto, AssignOrderPageDto},
    server::{
        controller::finish_form,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::FlashSession,
        },
        model::{
            driver::Driver,
            order::{AssignOrderParams, Order},
            vehicle::VehicleLoad,
        },
        router::ASSIGN_ORDER_PATH,
        service::{driver::DriverService, order::OrderService, vehicle::VehicleService},
        state::AppState,
    },
};

/// GET /orders/assign
///
/// Idle vehicles with remaining capacity and the drivers that can be put on
/// an order.
pub async fn get_assign_order(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;
    let scope = viewer.scope();

    let vehicles = VehicleService::new(&state.db).get_assignable(scope).await?;
    let drivers = DriverService::new(&state.db).get_all(scope).await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(AssignOrderPageDto {
        flashes,
        vehicles: vehicles.into_iter().map(VehicleLoad::into_dto).collect(),
        drivers: drivers.into_iter().map(Driver::into_option_dto).collect(),
    }))
}

/// POST /orders/assign
///
/// A vehicle without enough remaining capacity is reported as a flash and
/// nothing is stored.
pub async fn assign_order(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Form(form): Form<AssignOrderFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let outcome: Result<Order, AppError> = async {
        let params = AssignOrderParams::from_form(form)?;
        OrderService::new(&state.db)
            .assign(viewer.scope(), params)
            .await
    }
    .await;

    finish_form(
        &session,
        outcome,
        |order| format!("Order {} assigned to vehicle {}", order.id, order.vehicle_id),
        ASSIGN_ORDER_PATH,
    )
    .await
}
