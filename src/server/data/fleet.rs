use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::{fleet::Fleet, scope::FleetScope};

pub struct FleetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FleetRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, fleet_id: i32) -> Result<Option<Fleet>, DbErr> {
        let entity = entity::prelude::Fleet::find_by_id(fleet_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Fleet::from_entity))
    }

    /// Fleets visible in `scope`, ordered by id.
    pub async fn get_all(&self, scope: FleetScope) -> Result<Vec<Fleet>, DbErr> {
        let mut query = entity::prelude::Fleet::find();
        if let Some(fleet_id) = scope.fleet_id() {
            query = query.filter(entity::fleet::Column::Id.eq(fleet_id));
        }

        let entities = query
            .order_by_asc(entity::fleet::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Fleet::from_entity).collect())
    }
}
