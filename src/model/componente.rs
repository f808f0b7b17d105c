use entity::sea_orm_active_enums::{Cor, Estado, Material};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteInputDto {
    pub tipo: String,
    #[serde(default)]
    pub obs: String,
    #[schema(value_type = String)]
    pub cor: Cor,
    #[schema(value_type = String)]
    pub estado: Estado,
    #[schema(value_type = String)]
    pub material: Material,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponenteDto {
    pub id: String,
    pub comodo_id: String,
    pub vistoria_id: String,
    pub tipo: String,
    pub obs: String,
    #[schema(value_type = String)]
    pub cor: Cor,
    #[schema(value_type = String)]
    pub estado: Estado,
    #[schema(value_type = String)]
    pub material: Material,
}
