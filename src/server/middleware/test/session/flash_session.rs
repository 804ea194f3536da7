use super::*;

/// Tests flashes come back oldest first and are consumed by reading.
///
/// Expected: both flashes once, then none
#[tokio::test]
async fn take_all_returns_in_order_and_consumes() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let flash = FlashSession::new(session);
    flash.push_success("Driver added").await?;
    flash.push_error("Invalid plate number").await?;

    assert_eq!(
        flash.take_all().await?,
        vec![
            FlashDto::success("Driver added"),
            FlashDto::error("Invalid plate number"),
        ]
    );
    assert!(flash.take_all().await?.is_empty());

    Ok(())
}
