use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Address payload. Every field is required; missing ones are reported by the
/// handler instead of failing deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEnderecoDto {
    pub rua: Option<String>,
    pub complemento: Option<String>,
    pub numero: Option<i32>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub estado: Option<String>,
    pub cep: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnderecoDto {
    pub id: String,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}
