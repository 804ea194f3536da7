use super::*;

/// Tests exceptions older than the cut-off are left out.
///
/// Expected: only the recent exception
#[tokio::test]
async fn excludes_older_exceptions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::create_vehicle(db, fleet.id).await?;
    let now = Utc::now();

    let recent = factory::exception::ExceptionFactory::new(db, vehicle.id)
        .occur_time(now - Duration::days(2))
        .processed(true)
        .build()
        .await?;
    factory::exception::ExceptionFactory::new(db, vehicle.id)
        .occur_time(now - Duration::days(9))
        .build()
        .await?;

    let rows = ExceptionRepository::new(db)
        .get_since(FleetScope::All, now - Duration::days(7), 100)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].exception.id, recent.id);

    Ok(())
}

/// Tests the row limit keeps the newest exceptions.
///
/// Expected: 2 rows, the two newest
#[tokio::test]
async fn applies_limit_to_newest() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::create_vehicle(db, fleet.id).await?;
    let now = Utc::now();

    let mut created = Vec::new();
    for hours in [1, 2, 3] {
        let exception = factory::exception::ExceptionFactory::new(db, vehicle.id)
            .occur_time(now - Duration::hours(hours))
            .build()
            .await?;
        created.push(exception.id);
    }

    let rows = ExceptionRepository::new(db)
        .get_since(FleetScope::Fleet(fleet.id), now - Duration::days(7), 2)
        .await?;

    let ids: Vec<i32> = rows.iter().map(|r| r.exception.id).collect();
    assert_eq!(ids, vec![created[0], created[1]]);

    Ok(())
}
