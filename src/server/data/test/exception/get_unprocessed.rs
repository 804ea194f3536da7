use super::*;

/// Tests only open exceptions of the scoped fleet are listed, newest first,
/// with plate and driver name attached.
///
/// Expected: two rows, newest first
#[tokio::test]
async fn lists_open_exceptions_in_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (fleet, _, driver, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;
    let other = factory::create_fleet(db).await?;
    let other_vehicle = factory::create_vehicle(db, other.id).await?;
    let now = Utc::now();

    let older = factory::exception::ExceptionFactory::new(db, vehicle.id)
        .occur_time(now - Duration::hours(5))
        .build()
        .await?;
    let newer = factory::exception::ExceptionFactory::new(db, vehicle.id)
        .driver_id(Some(driver.id))
        .occur_time(now - Duration::hours(1))
        .build()
        .await?;
    factory::exception::ExceptionFactory::new(db, vehicle.id)
        .processed(true)
        .build()
        .await?;
    factory::create_exception(db, other_vehicle.id).await?;

    let rows = ExceptionRepository::new(db)
        .get_unprocessed(FleetScope::Fleet(fleet.id))
        .await?;

    let ids: Vec<i32> = rows.iter().map(|r| r.exception.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(rows[0].plate_no, vehicle.plate_no);
    assert_eq!(rows[0].driver_name.as_deref(), Some(driver.name.as_str()));
    assert_eq!(rows[1].driver_name, None);

    Ok(())
}
