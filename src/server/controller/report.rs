use axum::{
    extract::{Query, State},
    http::Uri,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::report::{
        DriverPerformancePageDto, DriverPerformanceQuery, FleetMonthlyPageDto, FleetMonthlyQuery,
    },
    server::{
        controller::flash_report_failure,
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission, Viewer},
            session::FlashSession,
        },
        model::{
            driver::Driver,
            exception::ExceptionDetail,
            fleet::Fleet,
            report::{DateRange, FleetMonthlyReport, ReportMonth},
        },
        service::{fleet::FleetService, report::ReportService},
        state::AppState,
        util::parse::{parse_i32, parse_optional_i32, required},
    },
};

pub const DRIVER_OUT_OF_FLEET_MESSAGE: &str = "You may only view drivers in your own fleet";

/// GET /reports/fleet_monthly
///
/// Runs the report once both `year` and `month` are given. Managers always
/// report on their own fleet; without login the fleet comes from `fleet_id`.
pub async fn fleet_monthly(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Query(query): Query<FleetMonthlyQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[Permission::Manager])
        .await?;

    let fleets = FleetService::new(&state.db).get_all(viewer.scope()).await?;
    let outcome = run_fleet_monthly(&state.db, &viewer, query).await;
    let result = flash_report_failure(&session, outcome).await?;
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(FleetMonthlyPageDto {
        flashes,
        fleets: fleets.into_iter().map(Fleet::into_dto).collect(),
        result: result.map(FleetMonthlyReport::into_dto),
    }))
}

async fn run_fleet_monthly(
    db: &DatabaseConnection,
    viewer: &Viewer,
    query: FleetMonthlyQuery,
) -> Result<Option<FleetMonthlyReport>, AppError> {
    let Some(month) = ReportMonth::from_query(query.year, query.month)? else {
        return Ok(None);
    };
    let fleet_id = match viewer.forced_fleet() {
        Some(fleet_id) => fleet_id,
        None => parse_i32("fleet_id", &required(query.fleet_id)?)?,
    };

    let report = ReportService::new(db)
        .fleet_monthly(viewer.scope(), fleet_id, month)
        .await?;

    Ok(Some(report))
}

/// GET /reports/driver_performance
///
/// Drivers see their own record. Managers choose among the drivers of their
/// fleet, defaulting to the first by name; asking for a driver of another
/// fleet sends them home with an error flash. Dates default to the last 30
/// days.
pub async fn driver_performance(
    State(state): State<AppState>,
    session: Session,
    uri: Uri,
    Query(query): Query<DriverPerformanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session, state.access_mode)
        .require(&uri, &[])
        .await?;
    let service = ReportService::new(&state.db);
    let today = Utc::now().date_naive();

    let parsed = flash_report_failure(&session, parse_performance_query(query, today)).await?;
    let (requested, range) = match parsed {
        Some((requested, range)) => (requested, Some(range)),
        None => (None, None),
    };

    let selection = match service.select_driver(&viewer, requested).await {
        Ok(selection) => selection,
        Err(AppError::AuthErr(err @ AuthError::AccessDenied(_, _))) => {
            tracing::warn!("{}", err);
            FlashSession::new(&session)
                .push_error(DRIVER_OUT_OF_FLEET_MESSAGE)
                .await?;
            return Err(err.into());
        }
        Err(err) => return Err(err),
    };

    let report = match (selection.selected.clone(), range) {
        (Some(driver), Some(range)) => Some(service.driver_performance(driver, range).await?),
        _ => None,
    };
    let shown = range.unwrap_or_else(|| DateRange::default_ending(today));
    let flashes = FlashSession::new(&session).take_all().await?;

    Ok(Json(DriverPerformancePageDto {
        flashes,
        drivers: selection
            .choices
            .into_iter()
            .map(Driver::into_option_dto)
            .collect(),
        selected_driver_id: selection.selected.map(|d| d.id),
        start_date: shown.start,
        end_date: shown.end,
        stats: report.as_ref().map(|r| r.stats_dto()),
        exceptions: report
            .map(|r| r.exceptions.into_iter().map(ExceptionDetail::into_dto).collect())
            .unwrap_or_default(),
    }))
}

fn parse_performance_query(
    query: DriverPerformanceQuery,
    today: NaiveDate,
) -> Result<Option<(Option<i32>, DateRange)>, AppError> {
    let requested = parse_optional_i32("driver_id", query.driver_id)?;
    let range = DateRange::from_query(query.start_date, query.end_date, today)?;
    Ok(Some((requested, range)))
}
