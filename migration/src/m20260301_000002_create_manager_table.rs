use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_fleet_table::Fleet;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Manager::Table)
                    .if_not_exists()
                    .col(pk_auto(Manager::Id))
                    .col(string(Manager::Name))
                    .col(integer(Manager::FleetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_manager_fleet_id")
                            .from(Manager::Table, Manager::FleetId)
                            .to(Fleet::Table, Fleet::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Manager::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Manager {
    Table,
    Id,
    Name,
    FleetId,
}
