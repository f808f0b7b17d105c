//! Application user factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users.
///
/// The stored hash is not a valid argon2 string unless one is supplied with
/// `password_hash`, so users built with defaults cannot log in.
pub struct UsuarioFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    password_hash: String,
    tipo: Role,
}

impl<'a> UsuarioFactory<'a> {
    /// Creates a new UsuarioFactory with default values.
    ///
    /// Defaults:
    /// - email: `"usuario{id}@example.com"`
    /// - tipo: `User`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("UsuarioTeste{}", id),
            email: format!("usuario{}@example.com", id),
            password_hash: "not-a-hash".to_string(),
            tipo: Role::User,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn tipo(mut self, tipo: Role) -> Self {
        self.tipo = tipo;
        self
    }

    /// Builds and inserts the user into the database.
    pub async fn build(self) -> Result<entity::usuario::Model, DbErr> {
        entity::usuario::ActiveModel {
            id: ActiveValue::Set(self.id),
            full_name: ActiveValue::Set("Usuário de Teste".to_string()),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1990, 5, 20).unwrap_or_default()),
            tipo: ActiveValue::Set(self.tipo),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_usuario(db: &DatabaseConnection) -> Result<entity::usuario::Model, DbErr> {
    UsuarioFactory::new(db).build().await
}
