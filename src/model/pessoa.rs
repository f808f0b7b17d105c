use chrono::NaiveDate;
use entity::sea_orm_active_enums::RolePessoa;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::endereco::{CreateEnderecoDto, EnderecoDto};

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePessoaDto {
    pub cpf: Option<String>,
    pub full_name: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    /// Birth date as `DD/MM/AAAA`.
    pub birth_date: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub tipo: Option<RolePessoa>,
    pub endereco: Option<CreateEnderecoDto>,
}

/// Partial update. Absent fields keep their stored value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePessoaDto {
    pub id: String,
    pub cpf: Option<String>,
    pub full_name: Option<String>,
    pub tel: Option<String>,
    pub email: Option<String>,
    pub birth_date: Option<String>,
    #[serde(rename = "type")]
    #[schema(value_type = Option<String>)]
    pub tipo: Option<RolePessoa>,
    pub endereco: Option<CreateEnderecoDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PessoaDto {
    pub id: String,
    pub cpf: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: String,
    pub email: Option<String>,
    pub tel: String,
    pub birth_date: NaiveDate,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub tipo: RolePessoa,
    pub endereco: EnderecoDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PessoasAgrupadasDto {
    pub proprietarios: Vec<PessoaDto>,
    pub inquilinos: Vec<PessoaDto>,
    pub vistoriadores: Vec<PessoaDto>,
}
