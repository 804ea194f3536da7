use crate::model::api::FleetDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    pub id: i32,
    pub name: String,
}

impl Fleet {
    pub fn from_entity(entity: entity::fleet::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> FleetDto {
        FleetDto {
            id: self.id,
            name: self.name,
        }
    }
}
