use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

pub struct ManagerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ManagerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fleet the manager belongs to, `None` when the manager does not exist.
    pub async fn find_fleet_id(&self, manager_id: i32) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Manager::find_by_id(manager_id)
            .one(self.db)
            .await?;

        Ok(entity.map(|m| m.fleet_id))
    }
}
