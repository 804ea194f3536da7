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
                    .table(DeliveryOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(DeliveryOrder::Id))
                    .col(integer(DeliveryOrder::VehicleId))
                    .col(integer_null(DeliveryOrder::DriverId))
                    .col(double(DeliveryOrder::Weight))
                    .col(double(DeliveryOrder::Volume))
                    .col(string(DeliveryOrder::Destination))
                    .col(string(DeliveryOrder::Status).default("new"))
                    .col(
                        timestamp(DeliveryOrder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_order_vehicle_id")
                            .from(DeliveryOrder::Table, DeliveryOrder::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_delivery_order_driver_id")
                            .from(DeliveryOrder::Table, DeliveryOrder::DriverId)
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
                    .name("idx_delivery_order_vehicle_id")
                    .table(DeliveryOrder::Table)
                    .col(DeliveryOrder::VehicleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeliveryOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeliveryOrder {
    Table,
    Id,
    VehicleId,
    DriverId,
    Weight,
    Volume,
    Destination,
    Status,
    CreatedAt,
}
