use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{
    api::{FlashDto, FleetDto},
    driver::DriverOptionDto,
    exception::ExceptionDetailDto,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FleetMonthlyReportDto {
    pub fleet_id: i32,
    pub fleet_name: String,
    pub year: i32,
    pub month: u32,
    pub order_count: u64,
    pub total_weight: f64,
    pub total_volume: f64,
    pub exception_count: u64,
    pub processed_exception_count: u64,
    pub total_fines: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct FleetMonthlyPageDto {
    pub flashes: Vec<FlashDto>,
    pub fleets: Vec<FleetDto>,
    pub result: Option<FleetMonthlyReportDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct FleetMonthlyQuery {
    pub fleet_id: Option<String>,
    pub year: Option<String>,
    pub month: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DriverPerformanceStatsDto {
    pub driver_id: i32,
    pub driver_name: String,
    pub employee_no: String,
    pub order_count: u64,
    pub total_weight: f64,
    pub total_volume: f64,
    pub exception_count: u64,
    pub total_fines: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DriverPerformancePageDto {
    pub flashes: Vec<FlashDto>,
    /// Drivers the viewer may pick from; empty for driver accounts.
    pub drivers: Vec<DriverOptionDto>,
    pub selected_driver_id: Option<i32>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub stats: Option<DriverPerformanceStatsDto>,
    pub exceptions: Vec<ExceptionDetailDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct DriverPerformanceQuery {
    pub driver_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
