use super::*;

fn params(fleet_id: i32, plate: &str) -> CreateVehicleParams {
    CreateVehicleParams {
        fleet_id,
        plate_no: PlateNumber::parse(plate).unwrap(),
        max_weight: 2000.0,
        max_volume: 35.0,
        status: VehicleStatus::InRepair,
    }
}

/// Tests the plate is stored upper-cased.
///
/// Expected: Ok(Vehicle) with plate "K9X2Y7"
#[tokio::test]
async fn stores_uppercased_plate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;

    let repo = VehicleRepository::new(db);
    let vehicle = repo.create(params(fleet.id, "k9x2y7")).await?;

    let stored = repo.find_by_id(vehicle.id).await?.unwrap();
    assert_eq!(stored.plate_no, "K9X2Y7");
    assert_eq!(stored.status, VehicleStatus::InRepair);

    Ok(())
}

/// Tests plates differing only in case collide.
///
/// Expected: Err(ConstraintViolation::Duplicate)
#[tokio::test]
async fn rejects_duplicate_plate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;

    let repo = VehicleRepository::new(db);
    repo.create(params(fleet.id, "B77777")).await?;
    let result = repo.create(params(fleet.id, "b77777")).await;

    assert!(matches!(
        result,
        Err(AppError::ConstraintErr(ConstraintViolation::Duplicate { .. }))
    ));

    Ok(())
}
