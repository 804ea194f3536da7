//! Fleetdesk Test Utils
//!
//! Shared helpers for the fleetdesk test suites: in-memory SQLite databases
//! built from the entity models, real tower-sessions sessions stored in the
//! same database, and factories that insert rows with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_drivers() -> Result<(), TestError> {
//!     let mut test = TestBuilder::new().with_fleet_tables().build().await?;
//!     let (db, session) = test.db_and_session().await?;
//!
//!     let fleet = factory::create_fleet(db).await?;
//!     let driver = factory::create_driver(db, fleet.id).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
