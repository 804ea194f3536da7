//! Vehicle exceptions and the vehicle status changes they cause.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::vehicle::set_status,
    error::{internal::InternalError, validation::ValidationError, AppError},
    model::{
        exception::{ExceptionDetail, RecordExceptionParams, VehicleException},
        scope::FleetScope,
        vehicle::VehicleStatus,
    },
};

pub struct ExceptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExceptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an exception and puts its vehicle into `exception` status.
    ///
    /// Both writes happen in one transaction.
    ///
    /// # Returns
    /// - `Ok(VehicleException)` - The recorded exception
    /// - `Err(AppError::ValidationErr(NotFound))` - The vehicle does not exist
    /// - `Err(AppError::ConstraintErr)` / `Err(AppError::DbErr)` - Write failed
    pub async fn record(
        &self,
        params: RecordExceptionParams,
    ) -> Result<VehicleException, AppError> {
        let txn = self.db.begin().await?;

        let Some(vehicle) = entity::prelude::Vehicle::find_by_id(params.vehicle_id)
            .one(&txn)
            .await?
        else {
            return Err(ValidationError::NotFound("Vehicle").into());
        };

        let entity = entity::vehicle_exception::ActiveModel {
            vehicle_id: ActiveValue::Set(vehicle.id),
            driver_id: ActiveValue::Set(params.driver_id),
            exception_type: ActiveValue::Set(params.exception_type),
            phase: ActiveValue::Set(params.phase),
            fine_amount: ActiveValue::Set(params.fine_amount),
            occur_time: ActiveValue::Set(Utc::now()),
            processed: ActiveValue::Set(false),
            processed_time: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(AppError::from_write)?;

        set_status(&txn, vehicle.id, VehicleStatus::Exception)
            .await
            .map_err(AppError::from_write)?;

        txn.commit().await?;

        Ok(VehicleException::from_entity(entity))
    }

    /// Marks an exception processed at the current time.
    ///
    /// When the vehicle is in `exception` status and has no other
    /// unprocessed exceptions left, it goes back to `idle`.
    ///
    /// # Returns
    /// - `Ok(VehicleException)` - The processed exception
    /// - `Err(AppError::ValidationErr(NotFound))` - No such exception
    /// - `Err(AppError::ValidationErr(AlreadyProcessed))` - Processed before
    pub async fn process(&self, exception_id: i32) -> Result<VehicleException, AppError> {
        let txn = self.db.begin().await?;

        let Some((exception, vehicle)) =
            entity::prelude::VehicleException::find_by_id(exception_id)
                .find_also_related(entity::prelude::Vehicle)
                .one(&txn)
                .await?
        else {
            return Err(ValidationError::NotFound("Exception").into());
        };
        if exception.processed {
            return Err(ValidationError::AlreadyProcessed(exception.id).into());
        }
        let Some(vehicle) = vehicle else {
            return Err(InternalError::DanglingReference {
                kind: "Vehicle",
                id: exception.vehicle_id,
            }
            .into());
        };

        let updated = entity::vehicle_exception::ActiveModel {
            id: ActiveValue::Unchanged(exception.id),
            processed: ActiveValue::Set(true),
            processed_time: ActiveValue::Set(Some(Utc::now())),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        let open_exceptions = entity::prelude::VehicleException::find()
            .filter(entity::vehicle_exception::Column::VehicleId.eq(vehicle.id))
            .filter(entity::vehicle_exception::Column::Processed.eq(false))
            .count(&txn)
            .await?;

        if open_exceptions == 0
            && VehicleStatus::from_stored(&vehicle.status)? == VehicleStatus::Exception
        {
            set_status(&txn, vehicle.id, VehicleStatus::Idle).await?;
        }

        txn.commit().await?;

        Ok(VehicleException::from_entity(updated))
    }

    pub async fn find_by_id(&self, exception_id: i32) -> Result<Option<VehicleException>, DbErr> {
        let entity = entity::prelude::VehicleException::find_by_id(exception_id)
            .one(self.db)
            .await?;

        Ok(entity.map(VehicleException::from_entity))
    }

    /// Unprocessed exceptions in `scope`, newest first.
    pub async fn get_unprocessed(
        &self,
        scope: FleetScope,
    ) -> Result<Vec<ExceptionDetail>, AppError> {
        let query = scoped_details(scope)
            .filter(entity::vehicle_exception::Column::Processed.eq(false))
            .order_by_desc(entity::vehicle_exception::Column::OccurTime)
            .order_by_desc(entity::vehicle_exception::Column::Id);

        self.load_details(query).await
    }

    /// Exceptions in `scope` that occurred at or after `since`, newest first,
    /// at most `limit` rows.
    pub async fn get_since(
        &self,
        scope: FleetScope,
        since: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<ExceptionDetail>, AppError> {
        let query = scoped_details(scope)
            .filter(entity::vehicle_exception::Column::OccurTime.gte(since))
            .order_by_desc(entity::vehicle_exception::Column::OccurTime)
            .order_by_desc(entity::vehicle_exception::Column::Id)
            .limit(limit);

        self.load_details(query).await
    }

    /// Exceptions of one driver with `start <= occur_time < end`, newest
    /// first.
    pub async fn get_for_driver_between(
        &self,
        driver_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ExceptionDetail>, AppError> {
        let query = entity::prelude::VehicleException::find()
            .find_also_related(entity::prelude::Vehicle)
            .filter(entity::vehicle_exception::Column::DriverId.eq(driver_id))
            .filter(entity::vehicle_exception::Column::OccurTime.gte(start))
            .filter(entity::vehicle_exception::Column::OccurTime.lt(end))
            .order_by_desc(entity::vehicle_exception::Column::OccurTime)
            .order_by_desc(entity::vehicle_exception::Column::Id);

        self.load_details(query).await
    }

    /// Runs an exception/vehicle query and attaches driver names.
    async fn load_details(
        &self,
        query: sea_orm::SelectTwo<entity::prelude::VehicleException, entity::prelude::Vehicle>,
    ) -> Result<Vec<ExceptionDetail>, AppError> {
        let rows = query.all(self.db).await?;

        let driver_ids: Vec<i32> = rows.iter().filter_map(|(e, _)| e.driver_id).collect();
        let drivers: HashMap<i32, entity::driver::Model> = if driver_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Driver::find()
                .filter(entity::driver::Column::Id.is_in(driver_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|d| (d.id, d))
                .collect()
        };

        rows.into_iter()
            .map(|(exception, vehicle)| {
                let vehicle = vehicle.ok_or(InternalError::DanglingReference {
                    kind: "Vehicle",
                    id: exception.vehicle_id,
                })?;
                let driver = exception.driver_id.and_then(|id| drivers.get(&id).cloned());
                ExceptionDetail::from_entities(exception, vehicle, driver)
            })
            .collect()
    }
}

fn scoped_details(
    scope: FleetScope,
) -> sea_orm::SelectTwo<entity::prelude::VehicleException, entity::prelude::Vehicle> {
    let mut query =
        entity::prelude::VehicleException::find().find_also_related(entity::prelude::Vehicle);
    if let Some(fleet_id) = scope.fleet_id() {
        query = query.filter(entity::vehicle::Column::FleetId.eq(fleet_id));
    }
    query
}
