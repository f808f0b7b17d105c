//! Person factory. Inserts a default address unless one is supplied.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::RolePessoa;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::{endereco_pessoa::EnderecoFactory, helpers::next_id};

/// Factory for creating test persons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let pessoa = PessoaFactory::new(&db)
///     .tipo(RolePessoa::Vistoriador)
///     .first_name("Ana")
///     .build()
///     .await?;
/// ```
pub struct PessoaFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    first_name: String,
    last_name: Option<String>,
    email: Option<String>,
    tipo: RolePessoa,
    endereco_id: Option<String>,
}

impl<'a> PessoaFactory<'a> {
    /// Creates a new PessoaFactory with default values.
    ///
    /// Defaults:
    /// - id: `"PessoaTeste{id}"`
    /// - first_name: `"Pessoa"`, last_name: `"{id}"`
    /// - email: `None`
    /// - tipo: `Inquilino`
    /// - endereco: a new default address
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("PessoaTeste{}", id),
            first_name: "Pessoa".to_string(),
            last_name: Some(id.to_string()),
            email: None,
            tipo: RolePessoa::Inquilino,
            endereco_id: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn tipo(mut self, tipo: RolePessoa) -> Self {
        self.tipo = tipo;
        self
    }

    /// Uses an existing address instead of inserting a new one.
    pub fn endereco_id(mut self, endereco_id: impl Into<String>) -> Self {
        self.endereco_id = Some(endereco_id.into());
        self
    }

    /// Builds and inserts the person (and its address when needed).
    ///
    /// # Returns
    /// - `Ok(entity::pessoa::Model)` - Created person
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::pessoa::Model, DbErr> {
        let endereco_id = match self.endereco_id {
            Some(id) => id,
            None => EnderecoFactory::new(self.db).build().await?.id,
        };

        entity::pessoa::ActiveModel {
            id: ActiveValue::Set(self.id),
            cpf: ActiveValue::Set("12345678901".to_string()),
            first_name: ActiveValue::Set(self.first_name),
            middle_name: ActiveValue::Set(None),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            tel: ActiveValue::Set("11999990000".to_string()),
            birth_date: ActiveValue::Set(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default()),
            tipo: ActiveValue::Set(self.tipo),
            endereco_id: ActiveValue::Set(endereco_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tenant with default values.
pub async fn create_pessoa(db: &DatabaseConnection) -> Result<entity::pessoa::Model, DbErr> {
    PessoaFactory::new(db).build().await
}

/// Creates a person with the given role.
pub async fn create_pessoa_with_tipo(
    db: &DatabaseConnection,
    tipo: RolePessoa,
) -> Result<entity::pessoa::Model, DbErr> {
    PessoaFactory::new(db).tipo(tipo).build().await
}
