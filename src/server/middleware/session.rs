//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to its concern:
//! - `AuthSession` - The logged-in user
//! - `FlashSession` - One-shot messages shown on the next rendered page

use tower_sessions::Session;

use crate::{
    model::api::FlashDto,
    server::{error::AppError, model::user::SessionUser},
};

const SESSION_AUTH_USER: &str = "auth:user";
const SESSION_FLASH_MESSAGES: &str = "flash:messages";

/// Authentication session management.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user after a successful login.
    ///
    /// The session id is cycled first so an id issued before login cannot be
    /// reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - User stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user(&self, user: &SessionUser) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER, user).await?;
        Ok(())
    }

    /// Retrieves the logged-in user.
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user(&self) -> Result<Option<SessionUser>, AppError> {
        Ok(self.session.get::<SessionUser>(SESSION_AUTH_USER).await?)
    }

    /// Removes every key from the session, flashes included.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// Flash message queue.
///
/// Messages accumulate across redirects until a page reads them with
/// [`FlashSession::take_all`].
pub struct FlashSession<'a> {
    session: &'a Session,
}

impl<'a> FlashSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn push(&self, flash: FlashDto) -> Result<(), AppError> {
        let mut flashes: Vec<FlashDto> = self
            .session
            .get(SESSION_FLASH_MESSAGES)
            .await?
            .unwrap_or_default();
        flashes.push(flash);
        self.session.insert(SESSION_FLASH_MESSAGES, flashes).await?;
        Ok(())
    }

    pub async fn push_success(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push(FlashDto::success(message)).await
    }

    pub async fn push_error(&self, message: impl Into<String>) -> Result<(), AppError> {
        self.push(FlashDto::error(message)).await
    }

    /// Returns and removes all pending messages, oldest first.
    pub async fn take_all(&self) -> Result<Vec<FlashDto>, AppError> {
        let flashes: Option<Vec<FlashDto>> = self.session.remove(SESSION_FLASH_MESSAGES).await?;
        Ok(flashes.unwrap_or_default())
    }
}
