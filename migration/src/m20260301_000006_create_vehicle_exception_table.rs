use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000003_create_driver_table::Driver, m20260301_000004_create_vehicle_table::Vehicle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VehicleException::Table)
                    .if_not_exists()
                    .col(pk_auto(VehicleException::Id))
                    .col(integer(VehicleException::VehicleId))
                    .col(integer_null(VehicleException::DriverId))
                    .col(string(VehicleException::ExceptionType))
                    .col(string(VehicleException::Phase))
                    .col(double(VehicleException::FineAmount).default(0.0))
                    .col(
                        timestamp(VehicleException::OccurTime)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(VehicleException::Processed).default(false))
                    .col(timestamp_null(VehicleException::ProcessedTime))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_exception_vehicle_id")
                            .from(VehicleException::Table, VehicleException::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vehicle_exception_driver_id")
                            .from(VehicleException::Table, VehicleException::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vehicle_exception_occur_time")
                    .table(VehicleException::Table)
                    .col(VehicleException::OccurTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(VehicleException::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum VehicleException {
    Table,
    Id,
    VehicleId,
    DriverId,
    ExceptionType,
    Phase,
    FineAmount,
    OccurTime,
    Processed,
    ProcessedTime,
}
