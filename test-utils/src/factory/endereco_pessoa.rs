//! Address factory for person addresses.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test addresses.
///
/// # Example
///
/// ```rust,ignore
/// let endereco = EnderecoFactory::new(&db)
///     .cidade("Curitiba")
///     .estado("PR")
///     .build()
///     .await?;
/// ```
pub struct EnderecoFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    rua: String,
    cidade: String,
    estado: String,
    cep: String,
}

impl<'a> EnderecoFactory<'a> {
    /// Creates a new EnderecoFactory with default values.
    ///
    /// Defaults:
    /// - id: `"Endereco{id}"`
    /// - rua: `"Rua {id}"`
    /// - cidade: `"São Paulo"`, estado: `"SP"`, cep: `"01000-000"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("Endereco{}", id),
            rua: format!("Rua {}", id),
            cidade: "São Paulo".to_string(),
            estado: "SP".to_string(),
            cep: "01000-000".to_string(),
        }
    }

    pub fn rua(mut self, rua: impl Into<String>) -> Self {
        self.rua = rua.into();
        self
    }

    pub fn cidade(mut self, cidade: impl Into<String>) -> Self {
        self.cidade = cidade.into();
        self
    }

    pub fn estado(mut self, estado: impl Into<String>) -> Self {
        self.estado = estado.into();
        self
    }

    pub fn cep(mut self, cep: impl Into<String>) -> Self {
        self.cep = cep.into();
        self
    }

    /// Builds and inserts the address into the database.
    ///
    /// # Returns
    /// - `Ok(entity::endereco_pessoa::Model)` - Created address
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::endereco_pessoa::Model, DbErr> {
        entity::endereco_pessoa::ActiveModel {
            id: ActiveValue::Set(self.id),
            rua: ActiveValue::Set(self.rua),
            complemento: ActiveValue::Set("Casa".to_string()),
            numero: ActiveValue::Set(100),
            bairro: ActiveValue::Set("Centro".to_string()),
            cidade: ActiveValue::Set(self.cidade),
            estado: ActiveValue::Set(self.estado),
            cep: ActiveValue::Set(self.cep),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values.
pub async fn create_endereco(
    db: &DatabaseConnection,
) -> Result<entity::endereco_pessoa::Model, DbErr> {
    EnderecoFactory::new(db).build().await
}
