//! Inspected component domain models and parameters.

use entity::sea_orm_active_enums::{Cor, Estado, Material};

use crate::model::componente::{ComponenteDto, ComponenteInputDto};

/// One checklist line of a room within a given inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct Componente {
    pub id: String,
    pub comodo_id: String,
    pub vistoria_id: String,
    pub tipo: String,
    pub obs: String,
    pub cor: Cor,
    pub estado: Estado,
    pub material: Material,
}

impl Componente {
    pub fn from_entity(entity: entity::componente::Model) -> Self {
        Self {
            id: entity.id,
            comodo_id: entity.comodo_id,
            vistoria_id: entity.vistoria_id,
            tipo: entity.tipo,
            obs: entity.obs,
            cor: entity.cor,
            estado: entity.estado,
            material: entity.material,
        }
    }

    pub fn into_dto(self) -> ComponenteDto {
        ComponenteDto {
            id: self.id,
            comodo_id: self.comodo_id,
            vistoria_id: self.vistoria_id,
            tipo: self.tipo,
            obs: self.obs,
            cor: self.cor,
            estado: self.estado,
            material: self.material,
        }
    }
}

/// Component fields without owner ids.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponenteParams {
    pub tipo: String,
    pub obs: String,
    pub cor: Cor,
    pub estado: Estado,
    pub material: Material,
}

impl From<ComponenteInputDto> for ComponenteParams {
    fn from(dto: ComponenteInputDto) -> Self {
        Self {
            tipo: dto.tipo,
            obs: dto.obs,
            cor: dto.cor,
            estado: dto.estado,
            material: dto.material,
        }
    }
}
