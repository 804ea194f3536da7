use super::*;

/// Tests an order within capacity is stored with status new.
///
/// Expected: Ok(Order) with status `New`
#[tokio::test]
async fn assigns_order_within_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, _, driver, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;

    let mut params = params(vehicle.id, 250.0);
    params.driver_id = Some(driver.id);
    let order = OrderRepository::new(db).assign(params).await?;

    assert_eq!(order.vehicle_id, vehicle.id);
    assert_eq!(order.driver_id, Some(driver.id));
    assert_eq!(order.status, OrderStatus::New);
    assert_eq!(order.weight, 250.0);

    Ok(())
}

/// Tests an order that would overload the vehicle is rejected with the
/// capacity violation and nothing is written.
///
/// Expected: Err(CapacityExceeded) with remaining 100
#[tokio::test]
async fn rejects_order_over_remaining_weight() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
        .max_weight(1000.0)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(900.0)
        .build()
        .await?;

    let result = OrderRepository::new(db)
        .assign(params(vehicle.id, 100.5))
        .await;

    match result {
        Err(AppError::ConstraintErr(ConstraintViolation::CapacityExceeded {
            vehicle_id,
            remaining_weight,
            requested_weight,
        })) => {
            assert_eq!(vehicle_id, vehicle.id);
            assert_eq!(remaining_weight, 100.0);
            assert_eq!(requested_weight, 100.5);
        }
        other => panic!("Expected CapacityExceeded, got: {:?}", other),
    }

    let stored = entity::prelude::DeliveryOrder::find().count(db).await?;
    assert_eq!(stored, 1);

    Ok(())
}

/// Tests an order that exactly fills the vehicle is accepted.
///
/// Expected: Ok(Order)
#[tokio::test]
async fn accepts_order_filling_vehicle_exactly() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
        .max_weight(1.0)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(0.7)
        .build()
        .await?;

    let result = OrderRepository::new(db).assign(params(vehicle.id, 0.3)).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests delivered orders free their weight again.
///
/// Expected: Ok(Order)
#[tokio::test]
async fn delivered_orders_do_not_block() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let fleet = factory::create_fleet(db).await?;
    let vehicle = factory::vehicle::VehicleFactory::new(db, fleet.id)
        .max_weight(500.0)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(500.0)
        .status("delivered")
        .build()
        .await?;

    let result = OrderRepository::new(db).assign(params(vehicle.id, 500.0)).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests assigning to a vehicle that does not exist.
///
/// Expected: Err(ValidationError::NotFound("Vehicle"))
#[tokio::test]
async fn rejects_unknown_vehicle() -> Result<(), AppError> {
    let test = TestBuilder::new().with_fleet_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = OrderRepository::new(db).assign(params(77, 1.0)).await;

    assert!(matches!(
        result,
        Err(AppError::ValidationErr(ValidationError::NotFound("Vehicle")))
    ));

    Ok(())
}
