use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Typed rejection of a write by the persistence layer.
///
/// Repositories return these instead of raw driver errors so callers can tell
/// a full vehicle apart from any other failed write without inspecting error
/// text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintViolation {
    /// The order would push the vehicle's assigned weight past its maximum.
    #[error("Exceeds the vehicle's maximum load weight: assignment failed")]
    CapacityExceeded {
        vehicle_id: i32,
        remaining_weight: f64,
        requested_weight: f64,
    },

    /// A unique column (employee number, plate, username) already holds the
    /// value.
    #[error("A record with the same identifier already exists")]
    Duplicate { detail: String },

    /// A foreign key points at a row that does not exist.
    #[error("A referenced record does not exist")]
    MissingReference { detail: String },
}

impl ConstraintViolation {
    /// Classifies a driver error reported for a write.
    ///
    /// # Returns
    /// - `Some(ConstraintViolation)` - The error is a unique or foreign key
    ///   violation
    /// - `None` - Any other database failure
    pub fn from_db_err(err: &DbErr) -> Option<Self> {
        match err.sql_err()? {
            SqlErr::UniqueConstraintViolation(detail) => Some(Self::Duplicate { detail }),
            SqlErr::ForeignKeyConstraintViolation(detail) => {
                Some(Self::MissingReference { detail })
            }
            _ => None,
        }
    }
}
