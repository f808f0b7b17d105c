use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Photo metadata. The bytes are served by `GET /fotos/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FotoDto {
    pub id: String,
    pub mimetype: String,
    pub file_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FotosEnviadasDto {
    pub mensagem: String,
    pub fotos: Vec<FotoDto>,
}
