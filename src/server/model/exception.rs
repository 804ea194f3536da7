use chrono::{DateTime, Utc};

use crate::{
    model::exception::{ExceptionDetailDto, ProcessExceptionFormDto, RecordExceptionFormDto},
    server::{
        error::{validation::ValidationError, AppError},
        model::vehicle::VehicleStatus,
        util::parse::{parse_f64, parse_i32, parse_optional_i32, present, required},
    },
};

/// Recorded incident on a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleException {
    pub id: i32,
    pub vehicle_id: i32,
    pub driver_id: Option<i32>,
    pub exception_type: String,
    pub phase: String,
    pub fine_amount: f64,
    pub occur_time: DateTime<Utc>,
    pub processed: bool,
    pub processed_time: Option<DateTime<Utc>>,
}

impl VehicleException {
    pub fn from_entity(entity: entity::vehicle_exception::Model) -> Self {
        Self {
            id: entity.id,
            vehicle_id: entity.vehicle_id,
            driver_id: entity.driver_id,
            exception_type: entity.exception_type,
            phase: entity.phase,
            fine_amount: entity.fine_amount,
            occur_time: entity.occur_time,
            processed: entity.processed,
            processed_time: entity.processed_time,
        }
    }
}

/// Exception joined with its vehicle and, when set, its driver.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionDetail {
    pub exception: VehicleException,
    pub plate_no: String,
    pub vehicle_status: VehicleStatus,
    pub driver_name: Option<String>,
}

impl ExceptionDetail {
    pub fn from_entities(
        exception: entity::vehicle_exception::Model,
        vehicle: entity::vehicle::Model,
        driver: Option<entity::driver::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            exception: VehicleException::from_entity(exception),
            vehicle_status: VehicleStatus::from_stored(&vehicle.status)?,
            plate_no: vehicle.plate_no,
            driver_name: driver.map(|d| d.name),
        })
    }

    pub fn into_dto(self) -> ExceptionDetailDto {
        let e = self.exception;
        ExceptionDetailDto {
            id: e.id,
            vehicle_id: e.vehicle_id,
            plate_no: self.plate_no,
            vehicle_status: self.vehicle_status.to_string(),
            driver_id: e.driver_id,
            driver_name: self.driver_name,
            exception_type: e.exception_type,
            phase: e.phase,
            fine_amount: e.fine_amount,
            occur_time: e.occur_time,
            processed: e.processed,
            processed_time: e.processed_time,
        }
    }
}

/// Validated exception record submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordExceptionParams {
    pub vehicle_id: i32,
    pub driver_id: Option<i32>,
    pub exception_type: String,
    pub phase: String,
    pub fine_amount: f64,
}

impl RecordExceptionParams {
    /// A blank fine is recorded as 0.
    pub fn from_form(form: RecordExceptionFormDto) -> Result<Self, ValidationError> {
        let vehicle_id = required(form.vehicle_id)?;
        let exception_type = required(form.exception_type)?;
        let phase = required(form.phase)?;

        let fine_amount = match present(form.fine) {
            Some(fine) => parse_f64("fine", &fine)?,
            None => 0.0,
        };
        if fine_amount < 0.0 {
            return Err(ValidationError::Negative { field: "fine" });
        }

        Ok(Self {
            vehicle_id: parse_i32("vehicle_id", &vehicle_id)?,
            driver_id: parse_optional_i32("driver_id", form.driver_id)?,
            exception_type,
            phase,
            fine_amount,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessExceptionParams {
    pub exception_id: i32,
}

impl ProcessExceptionParams {
    pub fn from_form(form: ProcessExceptionFormDto) -> Result<Self, ValidationError> {
        let exception_id = required(form.exception_id)?;
        Ok(Self {
            exception_id: parse_i32("exception_id", &exception_id)?,
        })
    }
}
