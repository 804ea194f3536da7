use sea_orm::DatabaseConnection;

use crate::server::{
    data::order::OrderRepository,
    error::{constraint::ConstraintViolation, validation::ValidationError, AppError},
    model::{
        order::{AssignOrderParams, Order},
        scope::FleetScope,
        vehicle::Vehicle,
    },
    service::{driver::DriverService, vehicle::VehicleService},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assigns an order to a vehicle in `scope`.
    ///
    /// # Returns
    /// - `Ok(Order)` - Order stored with status `new`
    /// - `Err(ValidationError::NotFound)` - Vehicle or driver missing, out of
    ///   scope, or the driver belongs to another fleet than the vehicle
    /// - `Err(ConstraintViolation::CapacityExceeded)` - Vehicle cannot carry
    ///   the weight
    pub async fn assign(
        &self,
        scope: FleetScope,
        params: AssignOrderParams,
    ) -> Result<Order, AppError> {
        check_vehicle_and_driver(self.db, scope, params.vehicle_id, params.driver_id).await?;

        let order = match OrderRepository::new(self.db).assign(params).await {
            Ok(order) => order,
            Err(AppError::ConstraintErr(
                violation @ ConstraintViolation::CapacityExceeded { .. },
            )) => {
                tracing::warn!("Rejected order assignment: {:?}", violation);
                return Err(violation.into());
            }
            Err(err) => return Err(err),
        };

        tracing::info!(
            "Assigned order {} ({} kg) to vehicle {}",
            order.id,
            order.weight,
            order.vehicle_id
        );

        Ok(order)
    }
}

/// Resolves the vehicle in `scope` and checks an optional driver belongs to
/// the same fleet.
pub(super) async fn check_vehicle_and_driver(
    db: &DatabaseConnection,
    scope: FleetScope,
    vehicle_id: i32,
    driver_id: Option<i32>,
) -> Result<Vehicle, AppError> {
    let Some(vehicle) = VehicleService::new(db)
        .find_in_scope(scope, vehicle_id)
        .await?
    else {
        return Err(ValidationError::NotFound("Vehicle").into());
    };

    if let Some(driver_id) = driver_id {
        let driver = DriverService::new(db)
            .find_in_scope(FleetScope::Fleet(vehicle.fleet_id), driver_id)
            .await?;
        if driver.is_none() {
            return Err(ValidationError::NotFound("Driver").into());
        }
    }

    Ok(vehicle)
}
