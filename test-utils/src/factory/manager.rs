use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for manager rows.
pub struct ManagerFactory<'a> {
    db: &'a DatabaseConnection,
    fleet_id: i32,
    name: String,
}

impl<'a> ManagerFactory<'a> {
    /// Defaults: name `"Manager {n}"`.
    pub fn new(db: &'a DatabaseConnection, fleet_id: i32) -> Self {
        Self {
            db,
            fleet_id,
            name: format!("Manager {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::manager::Model, DbErr> {
        entity::manager::ActiveModel {
            name: ActiveValue::Set(self.name),
            fleet_id: ActiveValue::Set(self.fleet_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_manager(
    db: &DatabaseConnection,
    fleet_id: i32,
) -> Result<entity::manager::Model, DbErr> {
    ManagerFactory::new(db, fleet_id).build().await
}
