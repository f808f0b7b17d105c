//! Room factory.

use entity::sea_orm_active_enums::TipoComodo;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test rooms inside an existing property.
pub struct ComodoFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    imovel_id: String,
    tipo: TipoComodo,
    numero: i32,
}

impl<'a> ComodoFactory<'a> {
    /// Creates a new ComodoFactory with default values.
    ///
    /// Defaults:
    /// - id: `"ComodoTeste{id}"`
    /// - tipo: `Sala`
    /// - numero: `1`
    pub fn new(db: &'a DatabaseConnection, imovel_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("ComodoTeste{}", id),
            imovel_id: imovel_id.into(),
            tipo: TipoComodo::Sala,
            numero: 1,
        }
    }

    pub fn tipo(mut self, tipo: TipoComodo) -> Self {
        self.tipo = tipo;
        self
    }

    pub fn numero(mut self, numero: i32) -> Self {
        self.numero = numero;
        self
    }

    /// Builds and inserts the room into the database.
    pub async fn build(self) -> Result<entity::comodo::Model, DbErr> {
        entity::comodo::ActiveModel {
            id: ActiveValue::Set(self.id),
            imovel_id: ActiveValue::Set(self.imovel_id),
            tipo: ActiveValue::Set(self.tipo),
            numero: ActiveValue::Set(self.numero),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values for the given property.
pub async fn create_comodo(
    db: &DatabaseConnection,
    imovel_id: &str,
) -> Result<entity::comodo::Model, DbErr> {
    ComodoFactory::new(db, imovel_id).build().await
}
