//! Vehicle records and their current load.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        order::OrderStatus,
        scope::FleetScope,
        vehicle::{CreateVehicleParams, Vehicle, VehicleLoad, VehicleStatus},
    },
};

pub struct VehicleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a vehicle with its plate stored upper-cased.
    ///
    /// # Returns
    /// - `Ok(Vehicle)` - The created vehicle
    /// - `Err(AppError::ConstraintErr)` - Duplicate plate or unknown fleet
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn create(&self, params: CreateVehicleParams) -> Result<Vehicle, AppError> {
        let entity = entity::vehicle::ActiveModel {
            fleet_id: ActiveValue::Set(params.fleet_id),
            plate_no: ActiveValue::Set(params.plate_no.into_inner()),
            max_weight: ActiveValue::Set(params.max_weight),
            max_volume: ActiveValue::Set(params.max_volume),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(AppError::from_write)?;

        Vehicle::from_entity(entity)
    }

    pub async fn find_by_id(&self, vehicle_id: i32) -> Result<Option<Vehicle>, AppError> {
        let entity = entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await?;

        entity.map(Vehicle::from_entity).transpose()
    }

    /// Vehicles visible in `scope`, ordered by plate.
    pub async fn get_all(&self, scope: FleetScope) -> Result<Vec<Vehicle>, AppError> {
        let entities = scoped_vehicles(scope).all(self.db).await?;

        entities.into_iter().map(Vehicle::from_entity).collect()
    }

    /// Vehicles visible in `scope` with their assigned weight, ordered by
    /// plate.
    ///
    /// Orders count toward the load while `new` or `in_transit`.
    pub async fn get_loads(&self, scope: FleetScope) -> Result<Vec<VehicleLoad>, AppError> {
        let vehicles = scoped_vehicles(scope).all(self.db).await?;

        let vehicle_ids: Vec<i32> = vehicles.iter().map(|v| v.id).collect();
        let orders = entity::prelude::DeliveryOrder::find()
            .filter(entity::delivery_order::Column::VehicleId.is_in(vehicle_ids))
            .filter(entity::delivery_order::Column::Status.is_in(loaded_statuses()))
            .all(self.db)
            .await?;

        let mut assigned: HashMap<i32, f64> = HashMap::new();
        for order in orders {
            *assigned.entry(order.vehicle_id).or_default() += order.weight;
        }

        vehicles
            .into_iter()
            .map(|entity| {
                let assigned_weight = assigned.get(&entity.id).copied().unwrap_or(0.0);
                Ok(VehicleLoad {
                    vehicle: Vehicle::from_entity(entity)?,
                    assigned_weight,
                })
            })
            .collect()
    }
}

fn scoped_vehicles(scope: FleetScope) -> sea_orm::Select<entity::prelude::Vehicle> {
    let mut query = entity::prelude::Vehicle::find();
    if let Some(fleet_id) = scope.fleet_id() {
        query = query.filter(entity::vehicle::Column::FleetId.eq(fleet_id));
    }
    query.order_by_asc(entity::vehicle::Column::PlateNo)
}

fn loaded_statuses() -> Vec<&'static str> {
    OrderStatus::LOADED.iter().map(|s| s.as_str()).collect()
}

/// Sum of weights of orders occupying `vehicle_id`.
///
/// Takes any connection so it can run inside the assignment transaction.
pub(super) async fn assigned_weight<C: ConnectionTrait>(
    conn: &C,
    vehicle_id: i32,
) -> Result<f64, DbErr> {
    let orders = entity::prelude::DeliveryOrder::find()
        .filter(entity::delivery_order::Column::VehicleId.eq(vehicle_id))
        .filter(entity::delivery_order::Column::Status.is_in(loaded_statuses()))
        .all(conn)
        .await?;

    Ok(orders.iter().map(|o| o.weight).sum())
}

/// Overwrites the status of `vehicle_id`.
pub(super) async fn set_status<C: ConnectionTrait>(
    conn: &C,
    vehicle_id: i32,
    status: VehicleStatus,
) -> Result<(), DbErr> {
    entity::vehicle::ActiveModel {
        id: ActiveValue::Unchanged(vehicle_id),
        status: ActiveValue::Set(status.as_str().to_string()),
        ..Default::default()
    }
    .update(conn)
    .await?;

    Ok(())
}
