use sea_orm::DatabaseConnection;

use crate::server::{
    data::{driver::DriverRepository, fleet::FleetRepository},
    error::{validation::ValidationError, AppError},
    model::{
        driver::{CreateDriverParams, Driver},
        scope::FleetScope,
    },
};

pub struct DriverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DriverService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a driver in a fleet visible in `scope`.
    ///
    /// # Returns
    /// - `Ok(Driver)` - The created driver
    /// - `Err(ValidationError::NotFound("Fleet"))` - Fleet missing or out of
    ///   scope
    /// - `Err(AppError::ConstraintErr)` - Duplicate employee number
    pub async fn create(
        &self,
        scope: FleetScope,
        params: CreateDriverParams,
    ) -> Result<Driver, AppError> {
        ensure_fleet(self.db, scope, params.fleet_id).await?;

        let driver = DriverRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created driver {} ({}) in fleet {}",
            driver.id,
            driver.employee_no,
            driver.fleet_id
        );

        Ok(driver)
    }

    pub async fn get_all(&self, scope: FleetScope) -> Result<Vec<Driver>, AppError> {
        DriverRepository::new(self.db).get_all(scope).await
    }

    /// Finds a driver, treating drivers outside `scope` as missing.
    pub async fn find_in_scope(
        &self,
        scope: FleetScope,
        driver_id: i32,
    ) -> Result<Option<Driver>, AppError> {
        let driver = DriverRepository::new(self.db).find_by_id(driver_id).await?;
        Ok(driver.filter(|d| scope.permits(d.fleet_id)))
    }
}

/// Fails with `NotFound("Fleet")` unless the fleet exists and is in scope.
pub(super) async fn ensure_fleet(
    db: &DatabaseConnection,
    scope: FleetScope,
    fleet_id: i32,
) -> Result<(), AppError> {
    if !scope.permits(fleet_id) {
        return Err(ValidationError::NotFound("Fleet").into());
    }
    if FleetRepository::new(db).find_by_id(fleet_id).await?.is_none() {
        return Err(ValidationError::NotFound("Fleet").into());
    }
    Ok(())
}
