use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for driver rows.
pub struct DriverFactory<'a> {
    db: &'a DatabaseConnection,
    fleet_id: i32,
    employee_no: String,
    name: String,
    license_level: String,
    phone: Option<String>,
}

impl<'a> DriverFactory<'a> {
    /// Defaults: employee number `"E{n}"`, name `"Driver {n}"`, licence `B2`,
    /// no phone.
    pub fn new(db: &'a DatabaseConnection, fleet_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            fleet_id,
            employee_no: format!("E{:05}", id),
            name: format!("Driver {}", id),
            license_level: "B2".to_string(),
            phone: None,
        }
    }

    pub fn employee_no(mut self, employee_no: impl Into<String>) -> Self {
        self.employee_no = employee_no.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn license_level(mut self, license_level: impl Into<String>) -> Self {
        self.license_level = license_level.into();
        self
    }

    pub fn phone(mut self, phone: Option<String>) -> Self {
        self.phone = phone;
        self
    }

    pub async fn build(self) -> Result<entity::driver::Model, DbErr> {
        entity::driver::ActiveModel {
            employee_no: ActiveValue::Set(self.employee_no),
            name: ActiveValue::Set(self.name),
            license_level: ActiveValue::Set(self.license_level),
            phone: ActiveValue::Set(self.phone),
            fleet_id: ActiveValue::Set(self.fleet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_driver(
    db: &DatabaseConnection,
    fleet_id: i32,
) -> Result<entity::driver::Model, DbErr> {
    DriverFactory::new(db, fleet_id).build().await
}
