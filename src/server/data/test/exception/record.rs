use super::*;

/// Tests recording an exception stores it unprocessed and flags the vehicle.
///
/// Expected: Ok(VehicleException), vehicle status `exception`
#[tokio::test]
async fn records_exception_and_flags_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, driver, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;

    let exception = ExceptionRepository::new(db)
        .record(RecordExceptionParams {
            vehicle_id: vehicle.id,
            driver_id: Some(driver.id),
            exception_type: "Breakdown".to_string(),
            phase: "transport".to_string(),
            fine_amount: 0.0,
        })
        .await?;

    assert!(!exception.processed);
    assert_eq!(exception.processed_time, None);
    assert_eq!(exception.driver_id, Some(driver.id));
    assert_eq!(vehicle_status(db, vehicle.id).await?, "exception");

    Ok(())
}

/// Tests recording against a missing vehicle writes nothing.
///
/// Expected: Err(ValidationError::NotFound("Vehicle"))
#[tokio::test]
async fn rejects_unknown_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ExceptionRepository::new(db)
        .record(RecordExceptionParams {
            vehicle_id: 404,
            driver_id: None,
            exception_type: "Breakdown".to_string(),
            phase: "transport".to_string(),
            fine_amount: 0.0,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Vehicle")))
    ));

    Ok(())
}
