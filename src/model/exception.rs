use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{api::FlashDto, driver::DriverOptionDto};

/// Vehicle option for selection lists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleOptionDto {
    pub id: i32,
    pub plate_no: String,
}

/// Exception row joined with its vehicle and driver.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExceptionDetailDto {
    pub id: i32,
    pub vehicle_id: i32,
    pub plate_no: String,
    pub vehicle_status: String,
    pub driver_id: Option<i32>,
    pub driver_name: Option<String>,
    pub exception_type: String,
    pub phase: String,
    pub fine_amount: f64,
    pub occur_time: DateTime<Utc>,
    pub processed: bool,
    pub processed_time: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RecordExceptionPageDto {
    pub flashes: Vec<FlashDto>,
    pub vehicles: Vec<VehicleOptionDto>,
    pub drivers: Vec<DriverOptionDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProcessExceptionsPageDto {
    pub flashes: Vec<FlashDto>,
    pub exceptions: Vec<ExceptionDetailDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct WeekExceptionsPageDto {
    pub flashes: Vec<FlashDto>,
    pub rows: Vec<ExceptionDetailDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RecordExceptionFormDto {
    pub vehicle_id: Option<String>,
    pub driver_id: Option<String>,
    pub exception_type: Option<String>,
    pub phase: Option<String>,
    pub fine: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct ProcessExceptionFormDto {
    pub exception_id: Option<String>,
}
