use std::fmt;

use crate::{
    model::driver::{CreateDriverFormDto, DriverDto, DriverOptionDto},
    server::{
        error::{internal::InternalError, validation::ValidationError, AppError},
        util::parse::{parse_i32, present, required},
    },
};

/// Licence classes a driver can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseLevel {
    C1,
    C2,
    B1,
    B2,
    A1,
    A2,
}

impl LicenseLevel {
    pub const ALL: [LicenseLevel; 6] = [
        Self::C1,
        Self::C2,
        Self::B1,
        Self::B2,
        Self::A1,
        Self::A2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::C2 => "C2",
            Self::B1 => "B1",
            Self::B2 => "B2",
            Self::A1 => "A1",
            Self::A2 => "A2",
        }
    }

    /// Parses submitted text; matching is exact and case-sensitive.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| ValidationError::InvalidLicenseLevel(value.to_string()))
    }

    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        Self::parse(value).map_err(|_| {
            InternalError::UnknownStoredValue {
                kind: "license level",
                value: value.to_string(),
            }
            .into()
        })
    }
}

impl fmt::Display for LicenseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i32,
    pub employee_no: String,
    pub name: String,
    pub license_level: LicenseLevel,
    pub phone: Option<String>,
    pub fleet_id: i32,
}

impl Driver {
    pub fn from_entity(entity: entity::driver::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            license_level: LicenseLevel::from_stored(&entity.license_level)?,
            employee_no: entity.employee_no,
            name: entity.name,
            phone: entity.phone,
            fleet_id: entity.fleet_id,
        })
    }

    pub fn into_dto(self) -> DriverDto {
        DriverDto {
            id: self.id,
            employee_no: self.employee_no,
            name: self.name,
            license_level: self.license_level.to_string(),
            phone: self.phone,
            fleet_id: self.fleet_id,
        }
    }

    pub fn into_option_dto(self) -> DriverOptionDto {
        DriverOptionDto {
            id: self.id,
            name: self.name,
            employee_no: self.employee_no,
        }
    }
}

/// Validated driver registration.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDriverParams {
    pub employee_no: String,
    pub name: String,
    pub license_level: LicenseLevel,
    pub phone: Option<String>,
    pub fleet_id: i32,
}

impl CreateDriverParams {
    /// Validates a submitted driver form.
    ///
    /// Required fields are checked before the licence level. When
    /// `forced_fleet` is set the fleet comes from the session and the form's
    /// `fleet_id` is ignored; otherwise it is a required field.
    ///
    /// # Arguments
    /// - `form` - Raw form fields
    /// - `forced_fleet` - Fleet of the logged-in manager, if any
    pub fn from_form(
        form: CreateDriverFormDto,
        forced_fleet: Option<i32>,
    ) -> Result<Self, ValidationError> {
        let employee_no = required(form.employee_no)?;
        let name = required(form.name)?;
        let license_level = required(form.license_level)?;
        let fleet_id = match forced_fleet {
            Some(fleet_id) => fleet_id,
            None => parse_i32("fleet_id", &required(form.fleet_id)?)?,
        };

        Ok(Self {
            employee_no,
            name,
            license_level: LicenseLevel::parse(&license_level)?,
            phone: present(form.phone),
            fleet_id,
        })
    }
}
