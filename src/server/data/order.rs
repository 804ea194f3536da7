//! Delivery orders and capacity-checked assignment.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, TransactionTrait,
};

use crate::server::{
    data::vehicle::assigned_weight,
    error::{constraint::ConstraintViolation, validation::ValidationError, AppError},
    model::order::{AssignOrderParams, Order, OrderStatus},
};

/// Slack for floating point sums when comparing against remaining weight.
const WEIGHT_TOLERANCE: f64 = 1e-9;

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns a new order to a vehicle if the vehicle can carry its weight.
    ///
    /// Reading the vehicle's current load and inserting the order happen in
    /// one transaction. The order starts with status `new`.
    ///
    /// # Returns
    /// - `Ok(Order)` - The inserted order
    /// - `Err(AppError::ValidationErr(NotFound))` - The vehicle does not exist
    /// - `Err(AppError::ConstraintErr(CapacityExceeded))` - The weight is more
    ///   than the vehicle's remaining weight; nothing is written
    /// - `Err(AppError::ConstraintErr)` / `Err(AppError::DbErr)` - Insert failed
    pub async fn assign(&self, params: AssignOrderParams) -> Result<Order, AppError> {
        let txn = self.db.begin().await?;

        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(params.vehicle_id)
            .one(&txn)
            .await?
        else {
            return Err(ValidationError::NotFound("Vehicle").into());
        };

        let remaining_weight = vehicle.max_weight - assigned_weight(&txn, vehicle.id).await?;
        if params.weight > remaining_weight + WEIGHT_TOLERANCE {
            return Err(ConstraintViolation::CapacityExceeded {
                vehicle_id: vehicle.id,
                remaining_weight,
                requested_weight: params.weight,
            }
            .into());
        }

        let entity = entity::delivery_order::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle.id),
            driver_id: ActiveValue::Set(params.driver_id),
            weight: ActiveValue::Set(params.weight),
            volume: ActiveValue::Set(params.volume),
            destination: ActiveValue::Set(params.destination),
            status: ActiveValue::Set(OrderStatus::New.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(AppError::from_write)?;

        txn.commit().await?;

        Order::from_entity(entity)
    }
}
