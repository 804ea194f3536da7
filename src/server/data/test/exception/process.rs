use super::*;

/// Tests processing the last open exception returns the vehicle to idle.
///
/// Expected: processed with a timestamp, vehicle status `idle`
#[tokio::test]
async fn processes_and_releases_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
        .status("exception")
        .build()
        .await?;
    let exception = factory::create_exception(db, vehicle.id).await?;

    let processed = ExceptionRepository::new(db).process(exception.id).await?;

    assert!(processed.processed);
    assert!(processed.processed_time.is_some());
    assert_eq!(vehicle_status(db, vehicle.id).await?, "idle");

    Ok(())
}

/// Tests the vehicle stays flagged while other exceptions are open.
///
/// Expected: vehicle status remains `exception`
#[tokio::test]
async fn keeps_vehicle_flagged_with_open_exceptions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
        .status("exception")
        .build()
        .await?;
    let first = factory::create_exception(db, vehicle.id).await?;
    factory::create_exception(db, vehicle.id).await?;

    ExceptionRepository::new(db).process(first.id).await?;

    assert_eq!(vehicle_status(db, vehicle.id).await?, "exception");

    Ok(())
}

/// Tests a vehicle in another state is left alone.
///
/// Expected: vehicle status remains `in_repair`
#[tokio::test]
async fn leaves_other_statuses_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
        .status("in_repair")
        .build()
        .await?;
    let exception = factory::create_exception(db, vehicle.id).await?;

    ExceptionRepository::new(db).process(exception.id).await?;

    assert_eq!(vehicle_status(db, vehicle.id).await?, "in_repair");

    Ok(())
}

/// Tests processing twice is rejected.
///
/// Expected: Err(ValidationError::AlreadyProcessed)
#[tokio::test]
async fn rejects_already_processed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::create_vehicle(db, fleet.id).await?;
    let exception = factory::exception::ExceptionFactory::new(db, vehicle.id)
        .processed(true)
        .build()
        .await?;

    let result = ExceptionRepository::new(db).process(exception.id).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::AlreadyProcessed(id))) if id == exception.id
    ));

    Ok(())
}

/// Tests processing an unknown exception.
///
/// Expected: Err(ValidationError::NotFound("Exception"))
#[tokio::test]
async fn rejects_unknown_exception() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ExceptionRepository::new(db).process(99).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Exception")))
    ));

    Ok(())
}
