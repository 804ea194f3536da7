use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicle")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fleet_id: i32,
    #[sea_orm(unique)]
    pub plate_no: String,
    pub max_weight: f64,
    pub max_volume: f64,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fleet::Entity",
        from = "Column::FleetId",
        to = "super::fleet::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Fleet,
    #[sea_orm(has_many = "super::delivery_order::Entity")]
    DeliveryOrder,
    #[sea_orm(has_many = "super::vehicle_exception::Entity")]
    VehicleException,
}

impl Related<super::fleet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Fleet.def()
    }
}

impl Related<super::delivery_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DeliveryOrder.def()
    }
}

impl Related<super::vehicle_exception::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VehicleException.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
