//! Shared helpers for factories.

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique, monotonically increasing value.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a fleet together with one manager, one driver and one idle
/// vehicle belonging to it.
///
/// # Returns
/// - `Ok((fleet, manager, driver, vehicle))` - The created rows
/// - `Err(DbErr)` - Insert failed
pub async fn create_fleet_with_staff(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::fleet::Model,
        entity::manager::Model,
        entity::driver::Model,
        entity::vehicle::Model,
    ),
    DbErr,
> {
    let fleet = crate::factory::fleet::create_fleet(db).await?;
    let manager = crate::factory::manager::create_manager(db, fleet.id).await?;
    let driver = crate::factory::driver::create_driver(db, fleet.id).await?;
    let vehicle = crate::factory::vehicle::create_vehicle(db, fleet.id).await?;

    Ok((fleet, manager, driver, vehicle))
}
