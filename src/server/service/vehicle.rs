use sea_orm::DatabaseConnection;

use crate::server::{
    data::vehicle::VehicleRepository,
    error::AppError,
    model::{
        scope::FleetScope,
        vehicle::{CreateVehicleParams, Vehicle, VehicleLoad},
    },
    service::driver::ensure_fleet,
};

pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a vehicle in a fleet visible in `scope`.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(ValidationError::NotFound("Fleet"))` - Fleet missing or out of
    ///   scope
    /// - `Err(AppError::ConstraintErr)` - Duplicate plate number
    pub async fn create(
        &self,
        scope: FleetScope,
        params: CreateVehicleParams,
    ) -> Result<Vehicle, AppError> {
        ensure_fleet(self.db, scope, params.fleet_id).await?;

        let vehicle = VehicleRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created vehicle {} ({}) in fleet {}",
            vehicle.id,
            vehicle.plate_no,
            vehicle.fleet_id
        );

        Ok(vehicle)
    }

    pub async fn get_all(&self, scope: FleetScope) -> Result<Vec<Vehicle>, AppError> {
        VehicleRepository::new(self.db).get_all(scope).await
    }

    pub async fn get_loads(&self, scope: FleetScope) -> Result<Vec<VehicleLoad>, AppError> {
        VehicleRepository::new(self.db).get_loads(scope).await
    }

    /// Idle vehicles in `scope` that can still take weight, ordered by plate.
    pub async fn get_assignable(&self, scope: FleetScope) -> Result<Vec<VehicleLoad>, AppError> {
        let loads = self.get_loads(scope).await?;
        Ok(loads.into_iter().filter(VehicleLoad::is_assignable).collect())
    }

    /// Finds a vehicle, treating vehicles outside `scope` as missing.
    pub async fn find_in_scope(
        &self,
        scope: FleetScope,
        vehicle_id: i32,
    ) -> Result<Option<Vehicle>, AppError> {
        let vehicle = VehicleRepository::new(self.db).find_by_id(vehicle_id).await?;
        Ok(vehicle.filter(|v| scope.permits(v.fleet_id)))
    }
}
