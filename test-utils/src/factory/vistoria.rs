//! Inspection factory.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TipoVistoria;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test inspections for an existing property.
pub struct VistoriaFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    imovel_id: String,
    vistoriador_id: Option<String>,
    tipo: TipoVistoria,
    data: DateTime<Utc>,
}

impl<'a> VistoriaFactory<'a> {
    /// Creates a new VistoriaFactory with default values.
    ///
    /// Defaults:
    /// - id: `"VistoriaTeste{id}"`
    /// - vistoriador: none
    /// - tipo: `Entrada`
    /// - data: now
    pub fn new(db: &'a DatabaseConnection, imovel_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("VistoriaTeste{}", id),
            imovel_id: imovel_id.into(),
            vistoriador_id: None,
            tipo: TipoVistoria::Entrada,
            data: Utc::now(),
        }
    }

    pub fn vistoriador_id(mut self, vistoriador_id: impl Into<String>) -> Self {
        self.vistoriador_id = Some(vistoriador_id.into());
        self
    }

    pub fn tipo(mut self, tipo: TipoVistoria) -> Self {
        self.tipo = tipo;
        self
    }

    pub fn data(mut self, data: DateTime<Utc>) -> Self {
        self.data = data;
        self
    }

    /// Builds and inserts the inspection into the database.
    pub async fn build(self) -> Result<entity::vistoria::Model, DbErr> {
        entity::vistoria::ActiveModel {
            id: ActiveValue::Set(self.id),
            imovel_id: ActiveValue::Set(self.imovel_id),
            vistoriador_id: ActiveValue::Set(self.vistoriador_id),
            tipo: ActiveValue::Set(self.tipo),
            data: ActiveValue::Set(self.data),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an inspection with default values for the given property.
pub async fn create_vistoria(
    db: &DatabaseConnection,
    imovel_id: &str,
) -> Result<entity::vistoria::Model, DbErr> {
    VistoriaFactory::new(db, imovel_id).build().await
}
