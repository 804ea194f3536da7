//! Data transfer objects exchanged with the rendering client.
//!
//! Page DTOs are the view models returned by GET routes; form DTOs mirror the
//! HTML forms posted back. Form fields are kept as raw optional strings so
//! that malformed input reaches validation instead of failing extraction.

pub mod api;
pub mod driver;
pub mod exception;
pub mod order;
pub mod report;
pub mod user;
pub mod vehicle;
