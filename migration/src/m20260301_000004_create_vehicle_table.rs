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
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(integer(Vehicle::FleetId))
                    .col(string_uniq(Vehicle::PlateNo))
                    .col(double(Vehicle::MaxWeight))
                    .col(double(Vehicle::MaxVolume))
                    .col(string(Vehicle::Status).default("idle"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_fleet_id")
                            .from(Vehicle::Table, Vehicle::FleetId)
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
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    FleetId,
    PlateNo,
    MaxWeight,
    MaxVolume,
    Status,
}
