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
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string_uniq(Driver::EmployeeNo))
                    .col(string(Driver::Name))
                    .col(string_len(Driver::LicenseLevel, 2))
                    .col(string_null(Driver::Phone))
                    .col(integer(Driver::FleetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_fleet_id")
                            .from(Driver::Table, Driver::FleetId)
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
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    EmployeeNo,
    Name,
    LicenseLevel,
    Phone,
    FleetId,
}
