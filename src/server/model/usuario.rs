//! Application user domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::Role;

use crate::{
    model::usuario::{CreateUsuarioDto, UsuarioDto},
    server::{error::AppError, util::date::parse_br_date},
};

/// Account able to log in and receive a bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Usuario {
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub birth_date: NaiveDate,
    pub tipo: Role,
    pub created_at: DateTime<Utc>,
}

impl Usuario {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::usuario::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            password_hash: entity.password_hash,
            birth_date: entity.birth_date,
            tipo: entity.tipo,
            created_at: entity.created_at,
        }
    }

    /// Converts the user to a DTO, leaving out the password hash.
    pub fn into_dto(self) -> UsuarioDto {
        UsuarioDto {
            id: self.id,
            full_name: self.full_name,
            email: self.email,
            birth_date: self.birth_date,
            tipo: self.tipo,
            created_at: self.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.tipo == Role::Adm
    }
}

/// Parameters for inserting a user whose password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUsuarioParams {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub birth_date: NaiveDate,
    pub tipo: Role,
}

/// Registration request after field validation, still holding the plain password.
#[derive(Debug, Clone)]
pub struct RegisterUsuarioParams {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub birth_date: NaiveDate,
    pub tipo: Role,
}

impl RegisterUsuarioParams {
    /// Converts a DTO that already passed `Validate`. New users default to `User`.
    pub fn from_dto(dto: CreateUsuarioDto) -> Result<Self, AppError> {
        let birth_date = parse_br_date(&dto.birth_date)
            .ok_or_else(|| AppError::BadRequest("Formato de data inválido.".to_string()))?;

        Ok(Self {
            full_name: dto.full_name.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
            birth_date,
            tipo: dto.tipo.unwrap_or(Role::User),
        })
    }
}
