use super::*;

/// Tests a manager cannot assign to another fleet's vehicle.
///
/// Expected: Err(ValidationError::NotFound("Vehicle"))
#[tokio::test]
async fn rejects_vehicle_outside_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (fleet, _, _, _) = factory::helpers::create_fleet_with_staff(db).await?;
    let (_, _, _, foreign_vehicle) = factory::helpers::create_fleet_with_staff(db).await?;

    let result = OrderService::new(db)
        .assign(FleetScope::Fleet(fleet.id), params(foreign_vehicle.id, None))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Vehicle")))
    ));

    Ok(())
}

/// Tests the driver must belong to the vehicle's fleet, even in open mode.
///
/// Expected: Err(ValidationError::NotFound("Driver"))
#[tokio::test]
async fn rejects_driver_from_other_fleet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, _, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;
    let (_, _, foreign_driver, _) = factory::helpers::create_fleet_with_staff(db).await?;

    let result = OrderService::new(db)
        .assign(FleetScope::All, params(vehicle.id, Some(foreign_driver.id)))
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Driver")))
    ));

    Ok(())
}

/// Tests a manager assigns within their own fleet.
///
/// Expected: Ok(Order)
#[tokio::test]
async fn assigns_within_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (fleet, _, driver, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;

    let order = OrderService::new(db)
        .assign(FleetScope::Fleet(fleet.id), params(vehicle.id, Some(driver.id)))
        .await?;

    assert_eq!(order.vehicle_id, vehicle.id);

    Ok(())
}
