//! Factories for inserting test rows.
//!
//! Every entity has a builder-style `*Factory` for customised rows and a
//! `create_*` shorthand for the default case. Unique columns (employee
//! numbers, plates, usernames) are derived from a shared counter so factories
//! can be called repeatedly within one database.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let fleet = factory::create_fleet(db).await?;
//! let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
//!     .max_weight(500.0)
//!     .build()
//!     .await?;
//! let order = factory::order::OrderFactory::new(db, vehicle.id)
//!     .weight(200.0)
//!     .build()
//!     .await?;
//! ```

pub mod driver;
pub mod exception;
pub mod fleet;
pub mod helpers;
pub mod manager;
pub mod order;
pub mod user;
pub mod vehicle;

pub use driver::create_driver;
pub use exception::create_exception;
pub use fleet::create_fleet;
pub use manager::create_manager;
pub use order::create_order;
pub use user::create_user;
pub use vehicle::create_vehicle;
