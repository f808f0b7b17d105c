use entity::sea_orm_active_enums::TipoImovel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{pessoa::PessoaDto, vistoria::VistoriaResumoDto};

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateImovelDto {
    pub icm: String,
    #[schema(value_type = String)]
    pub tipo: TipoImovel,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub proprietario_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateImovelDto {
    pub icm: String,
    #[schema(value_type = String)]
    pub tipo: TipoImovel,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImovelCriadoDto {
    pub id_imovel: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImovelDto {
    pub id: String,
    pub icm: String,
    #[schema(value_type = String)]
    pub tipo: TipoImovel,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
    pub proprietarios: Vec<PessoaDto>,
    /// Only filled by the single-property lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vistorias: Option<Vec<VistoriaResumoDto>>,
}

#[derive(Deserialize, Debug)]
pub struct IcmQuery {
    pub icm: String,
}

#[derive(Deserialize, Debug)]
pub struct TipoImovelQuery {
    pub tipo: TipoImovel,
}

#[derive(Deserialize, Debug)]
pub struct NomeQuery {
    pub nome: String,
}
