use axum::{routing::get, Router};

use crate::server::{
    config::AccessMode,
    controller::{
        auth::{login, login_page, logout},
        driver::{create_driver, get_drivers},
        exception::{
            get_process_exceptions, get_record_exception, get_week_exceptions, process_exception,
            record_exception,
        },
        home::index,
        order::{assign_order, get_assign_order},
        report::{driver_performance, fleet_monthly},
        vehicle::{create_vehicle, get_vehicle_load, get_vehicles},
    },
    state::AppState,
};

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";
pub const DRIVERS_PATH: &str = "/drivers";
pub const VEHICLES_PATH: &str = "/vehicles";
pub const ASSIGN_ORDER_PATH: &str = "/orders/assign";
pub const EXCEPTIONS_PATH: &str = "/exceptions";
pub const PROCESS_EXCEPTIONS_PATH: &str = "/exceptions/process";
pub const FLEET_MONTHLY_PATH: &str = "/reports/fleet_monthly";
pub const DRIVER_PERFORMANCE_PATH: &str = "/reports/driver_performance";
pub const WEEK_EXCEPTIONS_PATH: &str = "/views/week_exceptions";
pub const VEHICLE_LOAD_PATH: &str = "/views/vehicle_load";

/// Builds the application routes.
///
/// Login, logout and the driver performance report only exist in secured
/// mode.
pub fn router(access_mode: AccessMode) -> Router<AppState> {
    let router = Router::new()
        .route(HOME_PATH, get(index))
        .route(DRIVERS_PATH, get(get_drivers).post(create_driver))
        .route(VEHICLES_PATH, get(get_vehicles).post(create_vehicle))
        .route(ASSIGN_ORDER_PATH, get(get_assign_order).post(assign_order))
        .route(
            EXCEPTIONS_PATH,
            get(get_record_exception).post(record_exception),
        )
        .route(
            PROCESS_EXCEPTIONS_PATH,
            get(get_process_exceptions).post(process_exception),
        )
        .route(FLEET_MONTHLY_PATH, get(fleet_monthly))
        .route(WEEK_EXCEPTIONS_PATH, get(get_week_exceptions))
        .route(VEHICLE_LOAD_PATH, get(get_vehicle_load));

    match access_mode {
        AccessMode::Open => router,
        AccessMode::Secured => router
            .route(LOGIN_PATH, get(login_page).post(login))
            .route(LOGOUT_PATH, get(logout))
            .route(DRIVER_PERFORMANCE_PATH, get(driver_performance)),
    }
}
