use thiserror::Error;

/// Rejected form or query input.
///
/// The `Display` text is shown to the user as an error flash, nothing is
/// written to the database.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Required fields must not be empty")]
    MissingRequired,

    #[error("Invalid license level (allowed: C1/C2/B1/B2/A1/A2)")]
    InvalidLicenseLevel(String),

    #[error("Invalid plate number (example: A12345)")]
    InvalidPlateNumber(String),

    #[error("Invalid vehicle status")]
    InvalidVehicleStatus(String),

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Start date must not be after end date")]
    DateRangeReversed,

    #[error("Year must be between 2000 and 2100")]
    YearOutOfRange(i32),

    #[error("Month must be between 1 and 12")]
    MonthOutOfRange(u32),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Exception has already been processed")]
    AlreadyProcessed(i32),
}
