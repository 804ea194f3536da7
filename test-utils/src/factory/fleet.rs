use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for fleet rows.
pub struct FleetFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> FleetFactory<'a> {
    /// Defaults: name `"Fleet {n}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Fleet {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::fleet::Model, DbErr> {
        entity::fleet::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_fleet(db: &DatabaseConnection) -> Result<entity::fleet::Model, DbErr> {
    FleetFactory::new(db).build().await
}
