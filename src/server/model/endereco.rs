//! Person address domain models and parameters.

use crate::model::endereco::{CreateEnderecoDto, EnderecoDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Endereco {
    pub id: String,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

impl Endereco {
    pub fn from_entity(entity: entity::endereco_pessoa::Model) -> Self {
        Self {
            id: entity.id,
            rua: entity.rua,
            complemento: entity.complemento,
            numero: entity.numero,
            bairro: entity.bairro,
            cidade: entity.cidade,
            estado: entity.estado,
            cep: entity.cep,
        }
    }

    pub fn into_dto(self) -> EnderecoDto {
        EnderecoDto {
            id: self.id,
            rua: self.rua,
            complemento: self.complemento,
            numero: self.numero,
            bairro: self.bairro,
            cidade: self.cidade,
            estado: self.estado,
            cep: self.cep,
        }
    }
}

/// Complete set of address fields for an insert or full update.
#[derive(Debug, Clone, PartialEq)]
pub struct EnderecoParams {
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

impl EnderecoParams {
    /// Builds params from a request body.
    ///
    /// # Returns
    /// - `Some(EnderecoParams)` - Every field present and non-blank
    /// - `None` - At least one field missing; callers choose the status code
    pub fn from_dto(dto: CreateEnderecoDto) -> Option<Self> {
        Some(Self {
            rua: non_blank(dto.rua)?,
            complemento: non_blank(dto.complemento)?,
            numero: dto.numero?,
            bairro: non_blank(dto.bairro)?,
            cidade: non_blank(dto.cidade)?,
            estado: non_blank(dto.estado)?,
            cep: non_blank(dto.cep)?,
        })
    }
}

/// Drops values that are missing or only whitespace.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
