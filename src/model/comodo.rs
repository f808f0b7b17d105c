use entity::sea_orm_active_enums::TipoComodo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::componente::ComponenteDto;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateComodoDto {
    #[schema(value_type = String)]
    pub tipo: TipoComodo,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct UpdateComodoDto {
    #[schema(value_type = String)]
    pub tipo: TipoComodo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComodoDto {
    pub id: String,
    pub imovel_id: String,
    #[schema(value_type = String)]
    pub tipo: TipoComodo,
    pub numero: i32,
    pub componentes: Vec<ComponenteDto>,
}

#[derive(Deserialize, Debug, Default)]
pub struct QuantidadeQuery {
    pub quantidade: Option<String>,
}

/// Answer to room creation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct ComodoCriadoDto {
    pub comodo: ComodoDto,
}
