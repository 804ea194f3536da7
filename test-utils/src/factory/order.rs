use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for delivery order rows.
///
/// Inserts directly, bypassing the capacity check the application performs,
/// which lets tests prepare loaded vehicles.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    driver_id: Option<i32>,
    weight: f64,
    volume: f64,
    destination: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Defaults: no driver, 100 weight, 2 volume, status `new`, created now.
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            driver_id: None,
            weight: 100.0,
            volume: 2.0,
            destination: "Central Depot".to_string(),
            status: "new".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn driver_id(mut self, driver_id: Option<i32>) -> Self {
        self.driver_id = driver_id;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::delivery_order::Model, DbErr> {
        entity::delivery_order::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            driver_id: ActiveValue::Set(self.driver_id),
            weight: ActiveValue::Set(self.weight),
            volume: ActiveValue::Set(self.volume),
            destination: ActiveValue::Set(self.destination),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_order(
    db: &DatabaseConnection,
    vehicle_id: i32,
) -> Result<entity::delivery_order::Model, DbErr> {
    OrderFactory::new(db, vehicle_id).build().await
}
