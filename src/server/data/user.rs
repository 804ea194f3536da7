//! Login account lookups.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{error::AppError, model::user::User};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an account by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(AppError::InternalErr)` - The stored role is not recognised
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::AppUser::find_by_id(user_id)
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds an account by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::AppUser::find()
            .filter(entity::app_user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }
}
