use serde::{Deserialize, Serialize};

use crate::model::api::{FlashDto, FleetDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DriverDto {
    pub id: i32,
    pub employee_no: String,
    pub name: String,
    pub license_level: String,
    pub phone: Option<String>,
    pub fleet_id: i32,
}

/// Driver option for selection lists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DriverOptionDto {
    pub id: i32,
    pub name: String,
    pub employee_no: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DriversPageDto {
    pub flashes: Vec<FlashDto>,
    pub drivers: Vec<DriverDto>,
    pub fleets: Vec<FleetDto>,
}

/// `fleet_id` is only read when the application runs without login.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CreateDriverFormDto {
    pub employee_no: Option<String>,
    pub name: Option<String>,
    pub license_level: Option<String>,
    pub phone: Option<String>,
    pub fleet_id: Option<String>,
}
