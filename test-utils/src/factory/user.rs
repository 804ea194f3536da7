use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Password given to factory users unless overridden.
pub const DEFAULT_PASSWORD: &str = "correct-horse";

/// Builder for login accounts.
///
/// The password is hashed with Argon2id so accounts can log in through the
/// real authentication path.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password: String,
    role: String,
    related_id: i32,
}

impl<'a> UserFactory<'a> {
    /// Defaults: username `"user{n}"`, password [`DEFAULT_PASSWORD`].
    ///
    /// # Arguments
    /// - `role` - Stored role text, `"Manager"` or `"Driver"`
    /// - `related_id` - Manager or driver id the account belongs to
    pub fn new(db: &'a DatabaseConnection, role: impl Into<String>, related_id: i32) -> Self {
        Self {
            db,
            username: format!("user{}", next_id()),
            password: DEFAULT_PASSWORD.to_string(),
            role: role.into(),
            related_id,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub async fn build(self) -> Result<entity::app_user::Model, DbErr> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(self.password.as_bytes(), &salt)
            .map_err(|e| DbErr::Custom(e.to_string()))?
            .to_string();

        entity::app_user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(self.role),
            related_id: ActiveValue::Set(self.related_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_user(
    db: &DatabaseConnection,
    role: impl Into<String>,
    related_id: i32,
) -> Result<entity::app_user::Model, DbErr> {
    UserFactory::new(db, role, related_id).build().await
}
