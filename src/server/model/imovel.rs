//! Property domain models and parameters.

use entity::sea_orm_active_enums::TipoImovel;

use crate::{
    model::imovel::{CreateImovelDto, ImovelDto, UpdateImovelDto},
    server::model::{pessoa::Pessoa, vistoria::Vistoria},
};

/// Property row without relations.
#[derive(Debug, Clone, PartialEq)]
pub struct Imovel {
    pub id: String,
    pub icm: String,
    pub tipo: TipoImovel,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

impl Imovel {
    pub fn from_entity(entity: entity::imovel::Model) -> Self {
        Self {
            id: entity.id,
            icm: entity.icm,
            tipo: entity.tipo,
            rua: entity.rua,
            complemento: entity.complemento,
            numero: entity.numero,
            bairro: entity.bairro,
            cidade: entity.cidade,
            estado: entity.estado,
            cep: entity.cep,
        }
    }

    /// Single address line used in reports, e.g.
    /// `Rua das Flores, 10 - Casa, Centro, Campinas - SP, 13000-000`.
    pub fn endereco_completo(&self) -> String {
        let mut line = format!("{}, {}", self.rua, self.numero);
        if !self.complemento.trim().is_empty() {
            line.push_str(&format!(" - {}", self.complemento));
        }
        line.push_str(&format!(
            ", {}, {} - {}, {}",
            self.bairro, self.cidade, self.estado, self.cep
        ));
        line
    }
}

/// Property with its owners and, for single lookups, its inspections.
#[derive(Debug, Clone, PartialEq)]
pub struct ImovelDetalhado {
    pub imovel: Imovel,
    pub proprietarios: Vec<Pessoa>,
    pub vistorias: Option<Vec<Vistoria>>,
}

impl ImovelDetalhado {
    pub fn into_dto(self) -> ImovelDto {
        let imovel = self.imovel;

        ImovelDto {
            id: imovel.id,
            icm: imovel.icm,
            tipo: imovel.tipo,
            rua: imovel.rua,
            complemento: imovel.complemento,
            numero: imovel.numero,
            bairro: imovel.bairro,
            cidade: imovel.cidade,
            estado: imovel.estado,
            cep: imovel.cep,
            proprietarios: self.proprietarios.into_iter().map(Pessoa::into_dto).collect(),
            vistorias: self
                .vistorias
                .map(|vistorias| vistorias.into_iter().map(Vistoria::into_resumo_dto).collect()),
        }
    }
}

/// Property fields for an insert or full update.
#[derive(Debug, Clone, PartialEq)]
pub struct ImovelParams {
    pub icm: String,
    pub tipo: TipoImovel,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

impl ImovelParams {
    /// Splits a create request into property fields and the owner id.
    pub fn from_create_dto(dto: CreateImovelDto) -> (Self, String) {
        (
            Self {
                icm: dto.icm,
                tipo: dto.tipo,
                rua: dto.rua,
                complemento: dto.complemento,
                numero: dto.numero,
                bairro: dto.bairro,
                cidade: dto.cidade,
                estado: dto.estado,
                cep: dto.cep,
            },
            dto.proprietario_id,
        )
    }
}

impl From<UpdateImovelDto> for ImovelParams {
    fn from(dto: UpdateImovelDto) -> Self {
        Self {
            icm: dto.icm,
            tipo: dto.tipo,
            rua: dto.rua,
            complemento: dto.complemento,
            numero: dto.numero,
            bairro: dto.bairro,
            cidade: dto.cidade,
            estado: dto.estado,
            cep: dto.cep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imovel(complemento: &str) -> Imovel {
        Imovel {
            id: "Imovel1".to_string(),
            icm: "ICM1".to_string(),
            tipo: TipoImovel::Casa,
            rua: "Rua das Flores".to_string(),
            complemento: complemento.to_string(),
            numero: 10,
            bairro: "Centro".to_string(),
            cidade: "Campinas".to_string(),
            estado: "SP".to_string(),
            cep: "13000-000".to_string(),
        }
    }

    #[test]
    fn address_line_includes_complement() {
        assert_eq!(
            imovel("Fundos").endereco_completo(),
            "Rua das Flores, 10 - Fundos, Centro, Campinas - SP, 13000-000"
        );
    }

    #[test]
    fn address_line_skips_blank_complement() {
        assert_eq!(
            imovel(" ").endereco_completo(),
            "Rua das Flores, 10, Centro, Campinas - SP, 13000-000"
        );
    }
}
