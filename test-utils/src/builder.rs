use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for a test database.
///
/// Each `with_table` call queues a CREATE TABLE statement generated from the
/// entity definition; `build` runs them against a fresh in-memory SQLite
/// database in insertion order, so referenced tables must be added first.
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(Fleet)
///     .with_table(Driver)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Queues the table for `entity`.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Queues every table of the logistics schema except user accounts:
    /// fleets, managers, drivers, vehicles, delivery orders and vehicle
    /// exceptions.
    pub fn with_fleet_tables(self) -> Self {
        self.with_table(Fleet)
            .with_table(Manager)
            .with_table(Driver)
            .with_table(Vehicle)
            .with_table(DeliveryOrder)
            .with_table(VehicleException)
    }

    /// Queues the full schema including login accounts.
    pub fn with_all_tables(self) -> Self {
        self.with_fleet_tables().with_table(AppUser)
    }

    /// Creates the database and runs the queued statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context holding the prepared database
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();
        context.create_tables(self.tables).await?;
        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
