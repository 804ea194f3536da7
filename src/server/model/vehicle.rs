use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::{
    model::{
        exception::VehicleOptionDto,
        vehicle::{CreateVehicleFormDto, VehicleDto, VehicleLoadDto},
    },
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        util::parse::{parse_i32, parse_positive_f64, required},
    },
};

/// One letter followed by five letters or digits, e.g. `A12345`.
static PLATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]{5}$").expect("plate pattern is valid"));

/// Operational state of a vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Idle,
    InTransit,
    InRepair,
    Exception,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InTransit => "in_transit",
            Self::InRepair => "in_repair",
            Self::Exception => "exception",
        }
    }

    /// Parses submitted text, accepting `in-transit` as well as `in_transit`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.replace('-', "_").as_str() {
            "idle" => Ok(Self::Idle),
            "in_transit" => Ok(Self::InTransit),
            "in_repair" => Ok(Self::InRepair),
            "exception" => Ok(Self::Exception),
            _ => Err(ValidationError::InvalidVehicleStatus(value.to_string())),
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        Self::parse(value).map_err(|_| {
            InternalError::UnknownStoredValue {
                kind: "vehicle status",
                value: value.to_string(),
            }
            .into()
        })
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upper-cased plate number that matches the registration format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateNumber(String);

impl PlateNumber {
    /// Upper-cases `value` and checks it against the plate format.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let upper = value.trim().to_uppercase();
        if !PLATE_PATTERN.is_match(&upper) {
            return Err(ValidationError::InvalidPlateNumber(value.to_string()));
        }
        Ok(Self(upper))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub fleet_id: i32,
    pub plate_no: String,
    pub max_weight: f64,
    pub max_volume: f64,
    pub status: VehicleStatus,
}

impl Vehicle {
    pub fn from_entity(entity: entity::vehicle::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            fleet_id: entity.fleet_id,
            status: VehicleStatus::from_stored(&entity.status)?,
            plate_no: entity.plate_no,
            max_weight: entity.max_weight,
            max_volume: entity.max_volume,
        })
    }

    pub fn into_dto(self) -> VehicleDto {
        VehicleDto {
            id: self.id,
            fleet_id: self.fleet_id,
            plate_no: self.plate_no,
            max_weight: self.max_weight,
            max_volume: self.max_volume,
            status: self.status.to_string(),
        }
    }

    pub fn into_option_dto(self) -> VehicleOptionDto {
        VehicleOptionDto {
            id: self.id,
            plate_no: self.plate_no,
        }
    }
}

/// A vehicle together with the weight already assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleLoad {
    pub vehicle: Vehicle,
    pub assigned_weight: f64,
}

impl VehicleLoad {
    pub fn remaining_weight(&self) -> f64 {
        self.vehicle.max_weight - self.assigned_weight
    }

    /// Idle with weight left, i.e. offered for new assignments.
    pub fn is_assignable(&self) -> bool {
        self.vehicle.status == VehicleStatus::Idle && self.remaining_weight() > 0.0
    }

    pub fn into_dto(self) -> VehicleLoadDto {
        let remaining_weight = self.remaining_weight();
        VehicleLoadDto {
            vehicle_id: self.vehicle.id,
            fleet_id: self.vehicle.fleet_id,
            plate_no: self.vehicle.plate_no,
            status: self.vehicle.status.to_string(),
            max_weight: self.vehicle.max_weight,
            assigned_weight: self.assigned_weight,
            remaining_weight,
        }
    }
}

/// Validated vehicle registration.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVehicleParams {
    pub fleet_id: i32,
    pub plate_no: PlateNumber,
    pub max_weight: f64,
    pub max_volume: f64,
    pub status: VehicleStatus,
}

impl CreateVehicleParams {
    /// Validates a submitted vehicle form.
    ///
    /// Checks run in order: required fields, plate format, status, then the
    /// capacities. `forced_fleet` replaces the form's `fleet_id` as in
    /// [`CreateDriverParams::from_form`](crate::server::model::driver::CreateDriverParams::from_form).
    pub fn from_form(
        form: CreateVehicleFormDto,
        forced_fleet: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let plate_no = required(form.plate_no)?;
        let max_weight = required(form.max_weight)?;
        let max_volume = required(form.max_volume)?;
        let status = required(form.status)?;
        let fleet_id = match forced_fleet {
            Some(fleet_id) => fleet_id,
            None => parse_i32("fleet_id", &required(form.fleet_id)?)?,
        };

        let plate_no = PlateNumber::parse(&plate_no)?;
        let status = VehicleStatus::parse(&status)?;

        Ok(Self {
            fleet_id,
            plate_no,
            max_weight: parse_positive_f64("max_weight", &max_weight)?,
            max_volume: parse_positive_f64("max_volume", &max_volume)?,
            status,
        })
    }
}
