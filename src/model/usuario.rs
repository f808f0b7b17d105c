use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::util::date::validate_adult_birth_date;

#[derive(Serialize, Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUsuarioDto {
    #[validate(length(min = 5, max = 50, message = "O nome completo deve ter entre 5 e 50 caracteres."))]
    pub full_name: String,
    #[validate(
        email(message = "E-mail inválido."),
        length(max = 50, message = "O e-mail deve ter no máximo 50 caracteres.")
    )]
    pub email: String,
    #[validate(length(min = 5, max = 50, message = "A senha deve ter entre 5 e 50 caracteres."))]
    pub password: String,
    #[validate(must_match(other = "password", message = "As senhas não coincidiram."))]
    pub confirm_password: String,
    /// Birth date as `DD/MM/AAAA`.
    #[validate(custom(function = "validate_adult_birth_date"))]
    pub birth_date: String,
    #[serde(default, rename = "type")]
    #[schema(value_type = Option<String>)]
    pub tipo: Option<Role>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    /// `Bearer <token>`, ready to be sent back in the `Authorization` header.
    pub jwt: String,
    pub user_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsuarioDto {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub tipo: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangePermissionDto {
    pub user_id: String,
    #[serde(rename = "type")]
    #[schema(value_type = String)]
    pub tipo: Role,
}
