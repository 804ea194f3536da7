//! Database repository layer.
//!
//! Each repository borrows the connection pool and converts SeaORM entity
//! models into domain models at the boundary. Writes that must observe a
//! consistent view of other rows (order assignment, exception recording and
//! processing) open their own transaction.

pub mod driver;
pub mod exception;
pub mod fleet;
pub mod manager;
pub mod order;
pub mod report;
pub mod user;
pub mod vehicle;
