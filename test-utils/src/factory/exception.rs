use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for vehicle exception rows.
pub struct ExceptionFactory<'a> {
    db: &'a DatabaseConnection,
    vehicle_id: i32,
    driver_id: Option<i32>,
    exception_type: String,
    phase: String,
    fine_amount: f64,
    occur_time: DateTime<Utc>,
    processed: bool,
}

impl<'a> ExceptionFactory<'a> {
    /// Defaults: no driver, type `"Traffic violation"`, phase `"transport"`,
    /// no fine, occurred now, unprocessed.
    pub fn new(db: &'a DatabaseConnection, vehicle_id: i32) -> Self {
        Self {
            db,
            vehicle_id,
            driver_id: None,
            exception_type: "Traffic violation".to_string(),
            phase: "transport".to_string(),
            fine_amount: 0.0,
            occur_time: Utc::now(),
            processed: false,
        }
    }

    pub fn driver_id(mut self, driver_id: Option<i32>) -> Self {
        self.driver_id = driver_id;
        self
    }

    pub fn exception_type(mut self, exception_type: impl Into<String>) -> Self {
        self.exception_type = exception_type.into();
        self
    }

    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn fine_amount(mut self, fine_amount: f64) -> Self {
        self.fine_amount = fine_amount;
        self
    }

    pub fn occur_time(mut self, occur_time: DateTime<Utc>) -> Self {
        self.occur_time = occur_time;
        self
    }

    pub fn processed(mut self, processed: bool) -> Self {
        self.processed = processed;
        self
    }

    pub async fn build(self) -> Result<entity::vehicle_exception::Model, DbErr> {
        entity::vehicle_exception::ActiveModel {
            vehicle_id: ActiveValue::Set(self.vehicle_id),
            driver_id: ActiveValue::Set(self.driver_id),
            exception_type: ActiveValue::Set(self.exception_type),
            phase: ActiveValue::Set(self.phase),
            fine_amount: ActiveValue::Set(self.fine_amount),
            occur_time: ActiveValue::Set(self.occur_time),
            processed: ActiveValue::Set(self.processed),
            processed_time: ActiveValue::Set(self.processed.then(Utc::now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_exception(
    db: &DatabaseConnection,
    vehicle_id: i32,
) -> Result<entity::vehicle_exception::Model, DbErr> {
    ExceptionFactory::new(db, vehicle_id).build().await
}
