use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{exception::ExceptionRepository, vehicle::VehicleRepository},
    error::{validation::ValidationError, AppError},
    model::{
        exception::{
            ExceptionDetail, ProcessExceptionParams, RecordExceptionParams, VehicleException,
        },
        scope::FleetScope,
    },
    service::order::check_vehicle_and_driver,
};

/// Window of the weekly alert list.
const ALERT_WINDOW_DAYS: i64 = 7;
const ALERT_LIMIT: u64 = 100;

pub struct ExceptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExceptionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an exception on a vehicle in `scope`.
    ///
    /// # Returns
    /// - `Ok(VehicleException)` - Recorded; the vehicle is now in `exception`
    /// - `Err(ValidationError::NotFound)` - Vehicle or driver not in scope
    pub async fn record(
        &self,
        scope: FleetScope,
        params: RecordExceptionParams,
    ) -> Result<VehicleException, AppError> {
        check_vehicle_and_driver(self.db, scope, params.vehicle_id, params.driver_id).await?;

        let exception = ExceptionRepository::new(self.db).record(params).await?;

        tracing::info!(
            "Recorded exception {} ({}) on vehicle {}",
            exception.id,
            exception.exception_type,
            exception.vehicle_id
        );

        Ok(exception)
    }

    /// Marks an exception in `scope` processed.
    ///
    /// # Returns
    /// - `Ok(VehicleException)` - Processed
    /// - `Err(ValidationError::NotFound("Exception"))` - Missing or out of
    ///   scope
    /// - `Err(ValidationError::AlreadyProcessed)` - Processed before
    pub async fn process(
        &self,
        scope: FleetScope,
        params: ProcessExceptionParams,
    ) -> Result<VehicleException, AppError> {
        let repo = ExceptionRepository::new(self.db);

        let Some(exception) = repo.find_by_id(params.exception_id).await? else {
            return Err(ValidationError::NotFound("Exception").into());
        };
        let vehicle = VehicleRepository::new(self.db)
            .find_by_id(exception.vehicle_id)
            .await?;
        if !vehicle.is_some_and(|v| scope.permits(v.fleet_id)) {
            return Err(ValidationError::NotFound("Exception").into());
        }

        let processed = repo.process(exception.id).await?;

        tracing::info!("Processed exception {}", processed.id);

        Ok(processed)
    }

    pub async fn get_unprocessed(
        &self,
        scope: FleetScope,
    ) -> Result<Vec<ExceptionDetail>, AppError> {
        ExceptionRepository::new(self.db).get_unprocessed(scope).await
    }

    /// Exceptions of the last 7 days in `scope`, newest first, at most 100.
    pub async fn get_week_alerts(
        &self,
        scope: FleetScope,
    ) -> Result<Vec<ExceptionDetail>, AppError> {
        let since = Utc::now() - Duration::days(ALERT_WINDOW_DAYS);

        ExceptionRepository::new(self.db)
            .get_since(scope, since, ALERT_LIMIT)
            .await
    }
}
