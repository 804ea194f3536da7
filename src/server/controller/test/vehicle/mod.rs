use axum::{extract::State, http::Uri, response::IntoResponse, Form};
use sea_orm::EntityTrait;

use crate::{
    model::{
        api::FlashLevel,
        vehicle::{CreateVehicleFormDto, VehicleLoadPageDto, VehiclesPageDto},
    },
    server::{
        controller::{
            test::{json_body, log_in, redirect_target, secured_state},
            vehicle::{create_vehicle, get_vehicle_load, get_vehicles},
        },
        error::AppError,
        middleware::session::FlashSession,
        model::user::Role,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod get_vehicles;

fn form(plate_no: &str, fleet_id: Option<i32>) -> CreateVehicleFormDto {
    CreateVehicleFormDto {
        plate_no: Some(plate_no.to_string()),
        max_weight: Some("1500".to_string()),
        max_volume: Some("30".to_string()),
        status: Some("idle".to_string()),
        fleet_id: fleet_id.map(|id| id.to_string()),
    }
}
