use axum::{extract::State, http::Uri, response::IntoResponse, Form};
use sea_orm::EntityTrait;

use crate::{
    model::{
        api::FlashLevel,
        driver::{CreateDriverFormDto, DriversPageDto},
    },
    server::{
        config::AccessMode,
        controller::{
            driver::{create_driver, get_drivers},
            test::{json_body, log_in, redirect_target, secured_state},
        },
        error::AppError,
        middleware::{auth::MANAGER_REQUIRED_MESSAGE, session::FlashSession},
        model::user::Role,
        state::AppState,
    },
};
use test_utils::{builder::TestBuilder, factory};


fn form(employee_no: &str, license_level: &str, fleet_id: Option<i32>) -> CreateDriverFormDto {
    CreateDriverFormDto {
        employee_no: Some(employee_no.to_string()),
        name: Some("Wang Fang".to_string()),
        license_level: Some(license_level.to_string()),
        phone: None,
        fleet_id: fleet_id.map(|id| id.to_string()),
    }
}
