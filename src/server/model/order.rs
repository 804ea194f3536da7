use chrono::{DateTime, Utc};

use crate::{
    model::order::AssignOrderFormDto,
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        util::parse::{parse_i32, parse_optional_i32, parse_positive_f64, required},
    },
};

/// Lifecycle of a delivery order. New orders start as `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    New,
    InTransit,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Statuses whose weight occupies the vehicle.
    pub const LOADED: [OrderStatus; 2] = [Self::New, Self::InTransit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InTransit => "in_transit",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        match value {
            "new" => Ok(Self::New),
            "in_transit" => Ok(Self::InTransit),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(InternalError::UnknownStoredValue {
                kind: "order status",
                value: other.to_string(),
            }
            .into()),
        }
    }

    pub fn counts_toward_load(&self) -> bool {
        Self::LOADED.contains(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub vehicle_id: i32,
    pub driver_id: Option<i32>,
    pub weight: f64,
    pub volume: f64,
    pub destination: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn from_entity(entity: entity::delivery_order::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            driver_id: entity.driver_id,
            weight: entity.weight,
            volume: entity.volume,
            status: OrderStatus::from_stored(&entity.status)?,
            destination: entity.destination,
            created_at: entity.created_at,
        })
    }
}

/// Validated order assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignOrderParams {
    pub vehicle_id: i32,
    pub driver_id: Option<i32>,
    pub weight: f64,
    pub volume: f64,
    pub destination: String,
}

impl AssignOrderParams {
    pub fn from_form(form: AssignOrderFormDto) -> Result<Self, ValidationError> {
        let vehicle_id = required(form.vehicle_id)?;
        let weight = required(form.weight)?;
        let volume = required(form.volume)?;
        let destination = required(form.destination)?;

        Ok(Self {
            vehicle_id: parse_i32("vehicle_id", &vehicle_id)?,
            driver_id: parse_optional_i32("driver_id", form.driver_id)?,
            weight: parse_positive_f64("weight", &weight)?,
            volume: parse_positive_f64("volume", &volume)?,
            destination,
        })
    }
}
