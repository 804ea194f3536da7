use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for vehicle rows.
pub struct VehicleFactory<'a> {
    db: &'a DatabaseConnection,
    fleet_id: i32,
    plate_no: String,
    max_weight: f64,
    max_volume: f64,
    status: String,
}

impl<'a> VehicleFactory<'a> {
    /// Defaults: plate `"T{n:05}"`, 1000 weight, 40 volume, status `idle`.
    pub fn new(db: &'a DatabaseConnection, fleet_id: i32) -> Self {
        Self {
            db,
            fleet_id,
            plate_no: format!("T{:05}", next_id() % 100_000),
            max_weight: 1000.0,
            max_volume: 40.0,
            status: "idle".to_string(),
        }
    }

    pub fn plate_no(mut self, plate_no: impl Into<String>) -> Self {
        self.plate_no = plate_no.into();
        self
    }

    pub fn max_weight(mut self, max_weight: f64) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn max_volume(mut self, max_volume: f64) -> Self {
        self.max_volume = max_volume;
        self
    }

    /// Stored status text, e.g. `"idle"` or `"exception"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::vehicle::Model, DbErr> {
        entity::vehicle::ActiveModel {
            fleet_id: ActiveValue::Set(self.fleet_id),
            plate_no: ActiveValue::Set(self.plate_no),
            max_weight: ActiveValue::Set(self.max_weight),
            max_volume: ActiveValue::Set(self.max_volume),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_vehicle(
    db: &DatabaseConnection,
    fleet_id: i32,
) -> Result<entity::vehicle::Model, DbErr> {
    VehicleFactory::new(db, fleet_id).build().await
}
