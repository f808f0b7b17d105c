use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TipoVistoria;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{comodo::ComodoDto, foto::FotoDto, imovel::ImovelDto, pessoa::PessoaDto};

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVistoriaDto {
    pub vistoriador_id: Option<String>,
    #[schema(value_type = Option<String>)]
    pub tipo: Option<TipoVistoria>,
}

/// Answer to a create request; also used when an inspection is already open.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VistoriaCriadaDto {
    pub mensagem: String,
    pub vistoria_id: String,
    pub imovel_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVistoriaDto {
    pub vistoriador_id: Option<String>,
    pub imovel_id: Option<String>,
    pub data: Option<DateTime<Utc>>,
    #[schema(value_type = Option<String>)]
    pub tipo: Option<TipoVistoria>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VistoriaResumoDto {
    pub id: String,
    pub imovel_id: String,
    pub vistoriador_id: Option<String>,
    #[schema(value_type = String)]
    pub tipo: TipoVistoria,
    pub data: DateTime<Utc>,
}

/// Inspection with its property, inspector, rooms, components and photo metadata.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VistoriaDto {
    pub id: String,
    #[schema(value_type = String)]
    pub tipo: TipoVistoria,
    pub data: DateTime<Utc>,
    pub imovel: ImovelDto,
    pub vistoriador: Option<PessoaDto>,
    pub comodos: Vec<ComodoDto>,
    pub fotos: Vec<FotoDto>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PegarVistoriasQuery {
    pub search_text: Option<String>,
    /// `asc` or `desc` by date; anything else sorts descending.
    pub sort_type: Option<String>,
}
