//! User data repository for database operations.
//!
//! This module provides the `UsuarioRepository` for managing application users: account
//! creation, lookups used by login and the bearer token guard, and role changes.

use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::usuario::{CreateUsuarioParams, Usuario};

/// Repository providing database operations for application users.
pub struct UsuarioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsuarioRepository<'a> {
    /// Creates a new UsuarioRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UsuarioRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `id` - Primary key for the new row
    /// - `params` - User fields with the password already hashed
    ///
    /// # Returns
    /// - `Ok(Usuario)` - The created user
    /// - `Err(DbErr)` - Insert failed, including unique email violations
    pub async fn create(&self, id: String, params: CreateUsuarioParams) -> Result<Usuario, DbErr> {
        let entity = entity::usuario::ActiveModel {
            id: ActiveValue::Set(id),
            full_name: ActiveValue::Set(params.full_name),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            birth_date: ActiveValue::Set(params.birth_date),
            tipo: ActiveValue::Set(params.tipo),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Usuario::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(Usuario))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Usuario>, DbErr> {
        let entity = entity::prelude::Usuario::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Usuario::from_entity))
    }

    /// Finds a user by email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Usuario>, DbErr> {
        let entity = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Usuario::from_entity))
    }

    /// Checks whether an email address is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Usuario::find()
            .filter(entity::usuario::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(Some(Usuario))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_tipo(&self, id: &str, tipo: Role) -> Result<Option<Usuario>, DbErr> {
        let Some(existing) = entity::prelude::Usuario::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::usuario::ActiveModel = existing.into();
        active.tipo = ActiveValue::Set(tipo);
        let entity = active.update(self.db).await?;

        Ok(Some(Usuario::from_entity(entity)))
    }
}
