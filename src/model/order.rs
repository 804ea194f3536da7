use serde::{Deserialize, Serialize};

use crate::model::{api::FlashDto, driver::DriverOptionDto, vehicle::VehicleLoadDto};

#[derive(Serialize, Deserialize, Debug)]
pub struct AssignOrderPageDto {
    pub flashes: Vec<FlashDto>,
    /// Idle vehicles that can still take weight.
    pub vehicles: Vec<VehicleLoadDto>,
    pub drivers: Vec<DriverOptionDto>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct AssignOrderFormDto {
    pub vehicle_id: Option<String>,
    pub driver_id: Option<String>,
    pub weight: Option<String>,
    pub volume: Option<String>,
    pub destination: Option<String>,
}
