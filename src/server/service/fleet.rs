use sea_orm::DatabaseConnection;

use crate::server::{
    data::fleet::FleetRepository,
    error::AppError,
    model::{fleet::Fleet, scope::FleetScope},
};

pub struct FleetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FleetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fleets offered in selection lists, limited to `scope`.
    pub async fn get_all(&self, scope: FleetScope) -> Result<Vec<Fleet>, AppError> {
        Ok(FleetRepository::new(self.db).get_all(scope).await?)
    }
}
