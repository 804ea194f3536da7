use axum::{extract::State, http::Uri, response::IntoResponse, Form, Json};
use tower_sessions::Session;

use crate::{
    model::exception::{
        ProcessExceptionFormDto, ProcessExceptionsPageDto, RecordExceptionFormDto,
        RecordExceptionPageDto, WeekExceptionsPageDto,
    },
    server::{
        controller::finish_form,
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::FlashSession,
        },
        model::{
            driver::Driver,
            exception::{
                ExceptionDetail, ProcessExceptionParams, RecordExceptionParams, VehicleException,
            },
            vehicle::Vehicle,
        },
        router::{EXCEPTIONS_PATH, PROCESS_EXCEPTIONS_PATH},
        service::{
            driver::DriverService, exception::ExceptionService, vehicle::VehicleService,
        },
        state::AppState,
    },
};

/// GET /exceptions
pub async fn get_record_exception(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;
    let scope = viewer.scope();

    let vehicles = VehicleService::new(&state.db).get_all(scope).await?;
    let drivers = DriverService::new(&state.db).get_all(scope).await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(RecordExceptionPageDto {
        flashes,
        vehicles: vehicles.into_iter().map(Vehicle::into_option_dto).collect(),
        drivers: drivers.into_iter().map(Driver::into_option_dto).collect(),
    }))
}

/// POST /exceptions
pub async fn record_exception(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Form(form): Form<RecordExceptionFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let outcome: Result<VehicleException, AppError> = async {
        let params = RecordExceptionParams::from_form(form)?;
        ExceptionService::new(&state.db)
            .record(viewer.scope(), params)
            .await
    }
    .await;

    finish_form(
        &session,
        outcome,
        |exception| {
            format!(
                "Exception recorded; vehicle {} is now marked as exception",
                exception.vehicle_id
            )
        },
        EXCEPTIONS_PATH,
    )
    .await
}

/// GET /exceptions/process
///
/// Unprocessed exceptions in scope, newest first.
pub async fn get_process_exceptions(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let exceptions = ExceptionService::new(&state.db)
        .get_unprocessed(viewer.scope())
        .await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(ProcessExceptionsPageDto {
        flashes,
        exceptions: exceptions
            .into_iter()
            .map(ExceptionDetail::into_dto)
            .collect(),
    }))
}

/// POST /exceptions/process
pub async fn process_exception(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Form(form): Form<ProcessExceptionFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let outcome: Result<VehicleException, AppError> = async {
        let params = ProcessExceptionParams::from_form(form)?;
        ExceptionService::new(&state.db)
            .process(viewer.scope(), params)
            .await
    }
    .await;

    finish_form(
        &session,
        outcome,
        |exception| {
            format!(
                "Exception {} processed; the vehicle returns to idle once no open exceptions remain",
                exception.id
            )
        },
        PROCESS_EXCEPTIONS_PATH,
    )
    .await
}

/// GET /views/week_exceptions
pub async fn get_week_exceptions(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let rows = ExceptionService::new(&state.db)
        .get_week_alerts(viewer.scope())
        .await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(WeekExceptionsPageDto {
        flashes,
        rows: rows.into_iter().map(ExceptionDetail::into_dto).collect(),
    }))
}
