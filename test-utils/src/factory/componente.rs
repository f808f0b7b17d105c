//! Component factory.

use entity::sea_orm_active_enums::{Cor, Estado, Material};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test components of a room in an inspection.
pub struct ComponenteFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    comodo_id: String,
    vistoria_id: String,
    tipo: String,
    obs: String,
    estado: Estado,
}

impl<'a> ComponenteFactory<'a> {
    /// Creates a new ComponenteFactory with default values.
    ///
    /// Defaults:
    /// - id: `"ComponenteTeste{id}"`
    /// - tipo: `"Parede"`, obs: `"N/A"`
    /// - cor `Branco`, estado `NP`, material `Tinta`
    pub fn new(
        db: &'a DatabaseConnection,
        comodo_id: impl Into<String>,
        vistoria_id: impl Into<String>,
    ) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("ComponenteTeste{}", id),
            comodo_id: comodo_id.into(),
            vistoria_id: vistoria_id.into(),
            tipo: "Parede".to_string(),
            obs: "N/A".to_string(),
            estado: Estado::NP,
        }
    }

    pub fn tipo(mut self, tipo: impl Into<String>) -> Self {
        self.tipo = tipo.into();
        self
    }

    pub fn obs(mut self, obs: impl Into<String>) -> Self {
        self.obs = obs.into();
        self
    }

    pub fn estado(mut self, estado: Estado) -> Self {
        self.estado = estado;
        self
    }

    /// Builds and inserts the component into the database.
    pub async fn build(self) -> Result<entity::componente::Model, DbErr> {
        entity::componente::ActiveModel {
            id: ActiveValue::Set(self.id),
            comodo_id: ActiveValue::Set(self.comodo_id),
            vistoria_id: ActiveValue::Set(self.vistoria_id),
            tipo: ActiveValue::Set(self.tipo),
            obs: ActiveValue::Set(self.obs),
            cor: ActiveValue::Set(Cor::Branco),
            estado: ActiveValue::Set(self.estado),
            material: ActiveValue::Set(Material::Tinta),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a component with default values.
pub async fn create_componente(
    db: &DatabaseConnection,
    comodo_id: &str,
    vistoria_id: &str,
) -> Result<entity::componente::Model, DbErr> {
    ComponenteFactory::new(db, comodo_id, vistoria_id)
        .build()
        .await
}
