//! Owner and rental link domain models.

use chrono::{DateTime, Utc};

use crate::model::vinculo::{AluguelDto, VinculoDto};

/// Ownership link between a property and a person.
#[derive(Debug, Clone, PartialEq)]
pub struct Vinculo {
    pub id: String,
    pub imovel_id: String,
    pub proprietario_id: String,
}

impl Vinculo {
    pub fn from_entity(entity: entity::vinculo::Model) -> Self {
        Self {
            id: entity.id,
            imovel_id: entity.imovel_id,
            proprietario_id: entity.proprietario_id,
        }
    }

    pub fn into_dto(self) -> VinculoDto {
        VinculoDto {
            id: self.id,
            imovel_id: self.imovel_id,
            proprietario_id: self.proprietario_id,
        }
    }
}

/// Rental of a property by a tenant.
#[derive(Debug, Clone, PartialEq)]
pub struct Aluguel {
    pub id: String,
    pub imovel_id: String,
    pub inquilino_id: String,
    pub data_entrada: DateTime<Utc>,
    pub data_saida: Option<DateTime<Utc>>,
}

impl Aluguel {
    pub fn from_entity(entity: entity::aluga::Model) -> Self {
        Self {
            id: entity.id,
            imovel_id: entity.imovel_id,
            inquilino_id: entity.inquilino_id,
            data_entrada: entity.data_entrada,
            data_saida: entity.data_saida,
        }
    }

    pub fn into_dto(self) -> AluguelDto {
        AluguelDto {
            id: self.id,
            imovel_id: self.imovel_id,
            inquilino_id: self.inquilino_id,
            data_entrada: self.data_entrada,
            data_saida: self.data_saida,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAluguelParams {
    pub imovel_id: String,
    pub inquilino_id: String,
    pub data_entrada: DateTime<Utc>,
    pub data_saida: Option<DateTime<Utc>>,
}
