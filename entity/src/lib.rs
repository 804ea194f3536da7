//! SeaORM entity models for the fleet logistics schema.

pub mod prelude;

pub mod app_user;
pub mod delivery_order;
pub mod driver;
pub mod fleet;
pub mod manager;
pub mod vehicle;
pub mod vehicle_exception;
