use super::*;

/// Tests only new and in-transit orders count toward the load.
///
/// Expected: assigned 300 of 1000, remaining 700
#[tokio::test]
async fn sums_active_orders_only() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
        .max_weight(1000.0)
        .build()
        .await?;

    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(200.0)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(100.0)
        .status("in_transit")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(500.0)
        .status("delivered")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(500.0)
        .status("cancelled")
        .build()
        .await?;

    let loads = VehicleRepository::new(db).get_loads(FleetScope::All).await?;

    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].assigned_weight, 300.0);
    assert_eq!(loads[0].remaining_weight(), 700.0);

    Ok(())
}

/// Tests loads are limited to the scope's fleet and ordered by plate.
///
/// Expected: two vehicles of the scoped fleet, plates ascending
#[tokio::test]
async fn scoped_to_fleet_and_ordered_by_plate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let other = factory::create_fleet(db).await?;

    factory::vehicle::VehicleFactory::new(db, fleet.id)
        .plate_no("Z00001")
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, fleet.id)
        .plate_no("A00001")
        .build()
        .await?;
    factory::vehicle::VehicleFactory::new(db, other.id)
        .plate_no("M00001")
        .build()
        .await?;

    let loads = VehicleRepository::new(db)
        .get_loads(FleetScope::Fleet(fleet.id))
        .await?;

    let plates: Vec<&str> = loads.iter().map(|l| l.vehicle.plate_no.as_str()).collect();
    assert_eq!(plates, vec!["A00001", "Z00001"]);
    assert!(loads.iter().all(|l| l.assigned_weight == 0.0));

    Ok(())
}
