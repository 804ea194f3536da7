//! Driver records.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        driver::{CreateDriverParams, Driver},
        scope::FleetScope,
    },
};

pub struct DriverRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a driver.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The created driver
    /// - `Err(AppError::ConstraintErr)` - Duplicate employee number or unknown
    ///   fleet
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn create(&self, params: CreateDriverParams) -> Result<Driver, AppError> {
        let entity = entity::driver::ActiveModel {
            employee_no: ActiveValue::Set(params.employee_no),
            name: ActiveValue::Set(params.name),
            license_level: ActiveValue::Set(params.license_level.as_str().to_string()),
            phone: ActiveValue::Set(params.phone),
            fleet_id: ActiveValue::Set(params.fleet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(AppError::from_write)?;

        Driver::from_entity(entity)
    }

    pub async fn find_by_id(&self, driver_id: i32) -> Result<Option<Driver>, AppError> {
        let entity = entity::prelude::Driver::find_by_id(driver_id)
            .one(self.db)
            .await?;

        entity.map(Driver::from_entity).transpose()
    }

    /// Drivers visible in `scope`, ordered by name.
    pub async fn get_all(&self, scope: FleetScope) -> Result<Vec<Driver>, AppError> {
        let mut query = entity::prelude::Driver::find();
        if let Some(fleet_id) = scope.fleet_id() {
            query = query.filter(entity::driver::Column::FleetId.eq(fleet_id));
        }

        let entities = query
            .order_by_asc(entity::driver::Column::Name)
            .order_by_asc(entity::driver::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Driver::from_entity).collect()
    }
}
