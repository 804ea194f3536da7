//! Password login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{driver::DriverRepository, manager::ManagerRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{Role, SessionUser, User},
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks credentials and builds the session identity.
    ///
    /// The fleet is looked up through the account's manager or driver
    /// record.
    ///
    /// # Returns
    /// - `Ok(SessionUser)` - Credentials valid and the account has a fleet
    /// - `Err(AuthError::InvalidCredentials)` - Unknown user or wrong password
    /// - `Err(AuthError::UnlinkedAccount)` - The linked record is missing
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            tracing::info!("Login failed for unknown user '{}'", username);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::info!("Login failed for user {}: wrong password", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let Some(fleet_id) = self.fleet_of(&user).await? else {
            tracing::warn!(
                "User {} has role {} but {} {} does not exist",
                user.id,
                user.role,
                user.role,
                user.related_id
            );
            return Err(AuthError::UnlinkedAccount(user.id).into());
        };

        tracing::info!("User {} logged in as {}", user.id, user.role);

        Ok(SessionUser {
            user_id: user.id,
            username: user.username,
            role: user.role,
            related_id: user.related_id,
            fleet_id,
        })
    }

    /// Fleet of the account's manager or driver record, `None` when the
    /// record is missing.
    pub async fn fleet_of(&self, user: &User) -> Result<Option<i32>, AppError> {
        let fleet_id = match user.role {
            Role::Manager => {
                ManagerRepository::new(self.db)
                    .find_fleet_id(user.related_id)
                    .await?
            }
            Role::Driver => DriverRepository::new(self.db)
                .find_by_id(user.related_id)
                .await?
                .map(|driver| driver.fleet_id),
        };

        Ok(fleet_id)
    }
}
