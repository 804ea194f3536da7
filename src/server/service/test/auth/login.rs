use super::*;

/// Tests a manager logs in and receives their fleet.
///
/// Expected: Ok(SessionUser) with role Manager and the manager's fleet
#[tokio::test]
async fn manager_login_derives_fleet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (fleet, manager, _, _) = factory::helpers::create_fleet_with_staff(db).await?;
    factory::user::UserFactory::new(db, "Manager", manager.id)
        .username("boss")
        .build()
        .await?;

    let user = AuthService::new(db).login("boss", DEFAULT_PASSWORD).await?;

    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.related_id, manager.id);
    assert_eq!(user.fleet_id, fleet.id);

    Ok(())
}

/// Tests a driver's fleet comes from their driver record.
///
/// Expected: Ok(SessionUser) with the driver's fleet
#[tokio::test]
async fn driver_login_derives_fleet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (fleet, _, driver, _) = factory::helpers::create_fleet_with_staff(db).await?;
    factory::user::UserFactory::new(db, "Driver", driver.id)
        .username("wheels")
        .build()
        .await?;

    let user = AuthService::new(db).login("wheels", DEFAULT_PASSWORD).await?;

    assert_eq!(user.role, Role::Driver);
    assert_eq!(user.fleet_id, fleet.id);

    Ok(())
}

/// Tests wrong passwords and unknown users fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, manager, _, _) = factory::helpers::create_fleet_with_staff(db).await?;
    factory::user::UserFactory::new(db, "Manager", manager.id)
        .username("boss")
        .build()
        .await?;

    let service = AuthService::new(db);

    assert!(matches!(
        service.login("boss", "wrong").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody", DEFAULT_PASSWORD).await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests an account whose manager record is missing cannot log in.
///
/// Expected: Err(AuthError::UnlinkedAccount)
#[tokio::test]
async fn rejects_unlinked_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let account = factory::user::UserFactory::new(db, "Manager", 999)
        .username("orphan")
        .build()
        .await?;

    let result = AuthService::new(db).login("orphan", DEFAULT_PASSWORD).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnlinkedAccount(id))) if id == account.id
    ));

    Ok(())
}
