use super::*;

/// Tests a manager logs in and is sent to the requested local page.
///
/// Expected: redirect to `next`, session user stored, welcome flash queued
#[tokio::test]
async fn logs_in_and_follows_next() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (fleet, manager, _, _) = factory::helpers::create_fleet_with_staff(db).await?;
    let account = factory::user::UserFactory::new(db, "Manager", manager.id)
        .username("dispatch")
        .build()
        .await?;

    let response = login(
        State(secured_state(db)),
        session.clone(),
        Form(form(
            "dispatch",
            factory::user::DEFAULT_PASSWORD,
            Some("/orders/assign"),
        )),
    )
    .await
    .into_response();

    assert_eq!(redirect_target(&response), "/orders/assign");

    let user = AuthSession::new(session).get_user().await?.unwrap();
    assert_eq!(user.user_id, account.id);
    assert_eq!(user.role, Role::Manager);
    assert_eq!(user.fleet_id, fleet.id);

    let flashes = FlashSession::new(session).take_all().await?;
    assert_eq!(flashes.len(), 1);
    assert_eq!(flashes[0].level, FlashLevel::Success);
    assert_eq!(flashes[0].message, "Welcome back, dispatch (Manager)");

    Ok(())
}

/// Tests an off-site `next` is ignored after login.
///
/// Expected: redirect to "/"
#[tokio::test]
async fn ignores_external_next() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, _, driver, _) = factory::helpers::create_fleet_with_staff(db).await?;
    factory::user::UserFactory::new(db, "Driver", driver.id)
        .username("trucker")
        .build()
        .await?;

    let response = login(
        State(secured_state(db)),
        session.clone(),
        Form(form(
            "trucker",
            factory::user::DEFAULT_PASSWORD,
            Some("https://elsewhere.test/"),
        )),
    )
    .await
    .into_response();

    assert_eq!(redirect_target(&response), "/");

    Ok(())
}

/// Tests a wrong password keeps the user logged out and returns to login.
///
/// Expected: redirect to the login page with `next`, error flash queued
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let (_, manager, _, _) = factory::helpers::create_fleet_with_staff(db).await?;
    factory::user::UserFactory::new(db, "Manager", manager.id)
        .username("dispatch")
        .build()
        .await?;

    let response = login(
        State(secured_state(db)),
        session.clone(),
        Form(form("dispatch", "wrong", Some("/drivers"))),
    )
    .await
    .into_response();

    assert_eq!(redirect_target(&response), "/login?next=%2Fdrivers");
    assert!(AuthSession::new(session).get_user().await?.is_none());

    let flashes = FlashSession::new(session).take_all().await?;
    assert_eq!(flashes.len(), 1);
    assert_eq!(flashes[0].level, FlashLevel::Error);
    assert_eq!(flashes[0].message, "Invalid username or password");

    Ok(())
}

/// Tests the login page hands back pending flashes and a local `next`.
///
/// Expected: page with the flash and `next`, flashes consumed
#[tokio::test]
async fn login_page_consumes_flashes() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let session = test.session().await.unwrap();

    FlashSession::new(session).push_error("Please log in").await?;

    let response = login_page(
        session.clone(),
        Query(NextQuery {
            next: Some("/vehicles".to_string()),
        }),
    )
    .await
    .into_response();

    let page: LoginPageDto = json_body(response).await;
    assert_eq!(page.next.as_deref(), Some("/vehicles"));
    assert_eq!(page.flashes.len(), 1);
    assert!(FlashSession::new(session).take_all().await?.is_empty());

    Ok(())
}
