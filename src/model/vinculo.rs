use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVinculoDto {
    pub imovel_id: Option<String>,
    pub proprietario_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VinculoDto {
    pub id: String,
    pub imovel_id: String,
    pub proprietario_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAluguelDto {
    pub imovel_id: Option<String>,
    pub inquilino_id: Option<String>,
    /// Defaults to the moment of creation.
    pub data_entrada: Option<DateTime<Utc>>,
    pub data_saida: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AluguelDto {
    pub id: String,
    pub imovel_id: String,
    pub inquilino_id: String,
    pub data_entrada: DateTime<Utc>,
    pub data_saida: Option<DateTime<Utc>>,
}
