use super::*;

/// Tests a manager cannot report on another fleet.
///
/// Expected: Err(ValidationError::NotFound("Fleet"))
#[tokio::test]
async fn rejects_fleet_outside_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let other = factory::create_fleet(db).await?;

    let result = ReportService::new(db)
        .fleet_monthly(
            FleetScope::Fleet(fleet.id),
            other.id,
            ReportMonth::new(2026, 1).unwrap(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Fleet")))
    ));

    Ok(())
}

/// Tests an unknown fleet in open mode.
///
/// Expected: Err(ValidationError::NotFound("Fleet"))
#[tokio::test]
async fn rejects_unknown_fleet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReportService::new(db)
        .fleet_monthly(FleetScope::All, 12, ReportMonth::new(2026, 1).unwrap())
        .await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Fleet")))
    ));

    Ok(())
}
