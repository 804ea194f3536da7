//! Login accounts and the identity kept in the session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    model::user::SessionUserDto,
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Driver,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Driver => "Driver",
        }
    }

    pub fn from_stored(value: &str) -> Result<Self, AppError> {
        match value {
            "Manager" => Ok(Self::Manager),
            "Driver" => Ok(Self::Driver),
            other => Err(InternalError::UnknownStoredValue {
                kind: "role",
                value: other.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login account as stored, including the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
    /// Manager id for managers, driver id for drivers.
    pub related_id: i32,
}

impl User {
    pub fn from_entity(entity: entity::app_user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            role: Role::from_stored(&entity.role)?,
            username: entity.username,
            password_hash: entity.password_hash,
            related_id: entity.related_id,
        })
    }
}

/// Identity established at login and kept in the session until logout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
    pub related_id: i32,
    pub fleet_id: i32,
}

impl SessionUser {
    pub fn into_dto(self) -> SessionUserDto {
        SessionUserDto {
            user_id: self.user_id,
            username: self.username,
            role: self.role.to_string(),
            related_id: self.related_id,
            fleet_id: Some(self.fleet_id),
        }
    }
}
