use serde::{Deserialize, Serialize};

use crate::model::api::{FlashDto, FleetDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleDto {
    pub id: i32,
    pub fleet_id: i32,
    pub plate_no: String,
    pub max_weight: f64,
    pub max_volume: f64,
    pub status: String,
}

/// A vehicle with its current load.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleLoadDto {
    pub vehicle_id: i32,
    pub fleet_id: i32,
    pub plate_no: String,
    pub status: String,
    pub max_weight: f64,
    pub assigned_weight: f64,
    pub remaining_weight: f64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VehiclesPageDto {
    pub flashes: Vec<FlashDto>,
    pub vehicles: Vec<VehicleDto>,
    pub fleets: Vec<FleetDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct VehicleLoadPageDto {
    pub flashes: Vec<FlashDto>,
    pub vehicles: Vec<VehicleLoadDto>,
}

/// `fleet_id` is only read when the application runs without login.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct CreateVehicleFormDto {
    pub plate_no: Option<String>,
    pub max_weight: Option<String>,
    pub max_volume: Option<String>,
    pub status: Option<String>,
    pub fleet_id: Option<String>,
}
