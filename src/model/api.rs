use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorDto {
    pub mensagem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detalhes: Option<Vec<String>>,
}

/// Plain confirmation message.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct MessageDto {
    pub mensagem: String,
}

impl MessageDto {
    pub fn new(mensagem: impl Into<String>) -> Self {
        Self {
            mensagem: mensagem.into(),
        }
    }
}

/// Id of the most recent record of a kind, `null` when there is none.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LatestIdDto {
    pub id: Option<String>,
}
