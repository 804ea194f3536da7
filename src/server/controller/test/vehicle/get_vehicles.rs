use super::*;

/// Tests a manager only sees their own fleet's vehicles and fleet.
///
/// Expected: page listing one vehicle and one fleet
#[tokio::test]
async fn lists_vehicles_in_scope() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (fleet, manager, _, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;
    factory::helpers::create_fleet_with_staff(db).await?;
    log_in(db, session, Role::Manager, manager.id, fleet.id).await?;

    let response = get_vehicles(
        State(secured_state(db)),
        session.clone(),
        Uri::from_static("/vehicles"),
    )
    .await
    .into_response();

    let page: VehiclesPageDto = json_body(response).await;
    assert_eq!(page.vehicles.len(), 1);
    assert_eq!(page.vehicles[0].id, vehicle.id);
    assert_eq!(page.fleets.len(), 1);
    assert_eq!(page.fleets[0].id, fleet.id);

    Ok(())
}

/// Tests the load view leaves out other fleets' vehicles and reports the
/// weight already assigned.
///
/// Expected: one row for the manager's vehicle with its remaining weight
#[tokio::test]
async fn load_view_excludes_other_fleets() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (fleet, manager, _, vehicle) = factory::helpers::create_fleet_with_staff(db).await?;
    let (_, _, _, foreign_vehicle) = factory::helpers::create_fleet_with_staff(db).await?;
    factory::order::OrderFactory::new(db, vehicle.id)
        .weight(100.0)
        .build()
        .await?;
    factory::order::OrderFactory::new(db, foreign_vehicle.id)
        .weight(50.0)
        .build()
        .await?;
    log_in(db, session, Role::Manager, manager.id, fleet.id).await?;

    let response = get_vehicle_load(
        State(secured_state(db)),
        session.clone(),
        Uri::from_static("/views/vehicle_load"),
    )
    .await
    .into_response();

    let page: VehicleLoadPageDto = json_body(response).await;
    assert_eq!(page.vehicles.len(), 1);
    assert_eq!(page.vehicles[0].vehicle_id, vehicle.id);
    assert_eq!(page.vehicles[0].fleet_id, fleet.id);
    assert_eq!(page.vehicles[0].assigned_weight, 100.0);
    assert_eq!(
        page.vehicles[0].remaining_weight,
        vehicle.max_weight - 100.0
    );

    Ok(())
}

/// Tests an anonymous request for the load view is sent to login.
///
/// Expected: redirect to "/login?next=%2Fviews%2Fvehicle_load"
#[tokio::test]
async fn load_view_requires_login() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let response = get_vehicle_load(
        State(secured_state(db)),
        session.clone(),
        Uri::from_static("/views/vehicle_load"),
    )
    .await
    .into_response();

    assert_eq!(
        redirect_target(&response),
        "/login?next=%2Fviews%2Fvehicle_load"
    );

    Ok(())
}
