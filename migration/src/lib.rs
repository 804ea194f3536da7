pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_fleet_table;
mod m20260301_000002_create_manager_table;
mod m20260301_000003_create_driver_table;
mod m20260301_000004_create_vehicle_table;
mod m20260301_000005_create_delivery_order_table;
mod m20260301_000006_create_vehicle_exception_table;
mod m20260301_000007_create_app_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_fleet_table::Migration),
            Box::new(m20260301_000002_create_manager_table::Migration),
            Box::new(m20260301_000003_create_driver_table::Migration),
            Box::new(m20260301_000004_create_vehicle_table::Migration),
            Box::new(m20260301_000005_create_delivery_order_table::Migration),
            Box::new(m20260301_000006_create_vehicle_exception_table::Migration),
            Box::new(m20260301_000007_create_app_user_table::Migration),
        ]
    }
}
