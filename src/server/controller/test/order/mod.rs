use axum::{extract::State, http::Uri, response::IntoResponse, Form};
use sea_orm::EntityTrait;

use crate::{
    model::{
        api::FlashLevel,
        order::{AssignOrderFormDto, AssignOrderPageDto},
    },
    server::{
        controller::{
            order::{assign_order, get_assign_order},
            test::{json_body, log_in, redirect_target, secured_state},
        },
        error::{constraint::ConstraintViolation, AppError, DATABASE_ERROR_MESSAGE},
        middleware::session::FlashSession,
        model::user::Role,
    },
};
use test_utils::{builder::TestBuilder, factory};


fn form(vehicle_id: i32, weight: &str) -> AssignOrderFormDto {
    AssignOrderFormDto {
        vehicle_id: Some(vehicle_id.to_string()),
        driver_id: None,
        weight: Some(weight.to_string()),
        volume: Some("2".to_string()),
        destination: Some("North depot".to_string()),
    }
}
