use super::*;

/// Tests a manager cannot process another fleet's exception.
///
/// Expected: Err(ValidationError::NotFound("Exception")), still unprocessed
#[tokio::test]
async fn rejects_exception_outside_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (fleet, _, _, _) = factory::helpers::create_fleet_with_staff(db).await?;
    let (_, _, _, foreign_vehicle) = factory::helpers::create_fleet_with_staff(db).await?;
    let exception = factory::create_exception(db, foreign_vehicle.id).await?;

    let service = ExceptionService::new(db);
    let result = service
        .process(
            FleetScope::Fleet(fleet.id),
            ProcessExceptionParams {
                exception_id: exception.id,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Exception")))
    ));
    assert_eq!(service.get_unprocessed(FleetScope::All).await?.len(), 1);

    Ok(())
}
