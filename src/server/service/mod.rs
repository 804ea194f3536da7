//! Business logic between controllers and repositories.
//!
//! Services enforce the fleet scope of every operation and log the outcome
//! of each write.

pub mod auth;
pub mod driver;
pub mod exception;
pub mod fleet;
pub mod order;
pub mod report;
pub mod vehicle;

#[cfg(test)]
mod test;
