use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Tests only the driver's activity inside the inclusive range is counted.
///
/// Expected: orders on both boundary days counted, one exception listed
#[tokio::test]
async fn totals_driver_range_inclusive() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, driver, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;
    let colleague = factory::create_driver(db, driver.fleet_id).await?;

    let first_day = Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap();
    let last_day = Utc.with_ymd_and_hms(2026, 5, 3, 23, 30, 0).unwrap();
    let after = Utc.with_ymd_and_hms(2026, 5, 4, 0, 0, 0).unwrap();

    for created_at in [first_day, last_day, after] {
        factory::order::OrderFactory::new(db, vehicle.id)
            .driver_id(Some(driver.id))
            .weight(10.0)
            .created_at(created_at)
            .build()
            .await?;
    }
    factory::order::OrderFactory::new(db, vehicle.id)
        .driver_id(Some(colleague.id))
        .created_at(first_day)
        .build()
        .await?;
    let exception = factory::exception::ExceptionFactory::new(db, vehicle.id)
        .driver_id(Some(driver.id))
        .fine_amount(200.0)
        .occur_time(last_day)
        .build()
        .await?;

    let driver = DriverRepository::new(db)
        .find_by_id(driver.id)
        .await?
        .unwrap();
    let report = ReportRepository::new(db)
        .driver_performance(
            driver,
            DateRange {
                start: date(2026, 5, 1),
                end: date(2026, 5, 3),
            },
        )
        .await?;

    assert_eq!(report.totals.order_count, 2);
    assert_eq!(report.totals.total_weight, 20.0);
    assert_eq!(report.totals.exception_count, 1);
    assert_eq!(report.totals.total_fines, 200.0);
    assert_eq!(report.exceptions.len(), 1);
    assert_eq!(report.exceptions[0].exception.id, exception.id);

    Ok(())
}
