use crate::server::{
    error::{validation::ValidationError, AppError},
    model::{order::AssignOrderParams, scope::FleetScope},
    service::order::OrderService,
};
use test_utils::{builder::TestBuilder, factory};

mod assign;

fn params(vehicle_id: i32, driver_id: Option<i32>) -> AssignOrderParams {
    AssignOrderParams {
        vehicle_id,
        driver_id,
        weight: 10.0,
        volume: 1.0,
        destination: "Dock 4".to_string(),
    }
}
