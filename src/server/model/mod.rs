//! Server-side domain models and parameter types.
//!
//! Entity rows are converted into these models at the repository boundary,
//! stored text enumerations become Rust enums there, and controllers turn
//! them into DTOs. Parameter types are the validated form of a submission.

pub mod driver;
pub mod exception;
pub mod fleet;
pub mod order;
pub mod report;
pub mod scope;
pub mod user;
pub mod vehicle;
