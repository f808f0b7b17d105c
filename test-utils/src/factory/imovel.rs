//! Property factory.

use entity::sea_orm_active_enums::TipoImovel;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test properties.
///
/// # Example
///
/// ```rust,ignore
/// let imovel = ImovelFactory::new(&db)
///     .tipo(TipoImovel::Apartamento)
///     .rua("Avenida Paulista")
///     .build()
///     .await?;
/// ```
pub struct ImovelFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    icm: String,
    tipo: TipoImovel,
    rua: String,
    cidade: String,
}

impl<'a> ImovelFactory<'a> {
    /// Creates a new ImovelFactory with default values.
    ///
    /// Defaults:
    /// - id: `"ImovelTeste{id}"`, icm: `"ICM{id}"`
    /// - tipo: `Casa`
    /// - rua: `"Rua das Flores {id}"`, cidade: `"Campinas"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: format!("ImovelTeste{}", id),
            icm: format!("ICM{}", id),
            tipo: TipoImovel::Casa,
            rua: format!("Rua das Flores {}", id),
            cidade: "Campinas".to_string(),
        }
    }

    pub fn icm(mut self, icm: impl Into<String>) -> Self {
        self.icm = icm.into();
        self
    }

    pub fn tipo(mut self, tipo: TipoImovel) -> Self {
        self.tipo = tipo;
        self
    }

    pub fn rua(mut self, rua: impl Into<String>) -> Self {
        self.rua = rua.into();
        self
    }

    pub fn cidade(mut self, cidade: impl Into<String>) -> Self {
        self.cidade = cidade.into();
        self
    }

    /// Builds and inserts the property into the database.
    pub async fn build(self) -> Result<entity::imovel::Model, DbErr> {
        entity::imovel::ActiveModel {
            id: ActiveValue::Set(self.id),
            icm: ActiveValue::Set(self.icm),
            tipo: ActiveValue::Set(self.tipo),
            rua: ActiveValue::Set(self.rua),
            complemento: ActiveValue::Set("Fundos".to_string()),
            numero: ActiveValue::Set(42),
            bairro: ActiveValue::Set("Jardim".to_string()),
            cidade: ActiveValue::Set(self.cidade),
            estado: ActiveValue::Set("SP".to_string()),
            cep: ActiveValue::Set("13000-000".to_string()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a property with default values.
pub async fn create_imovel(db: &DatabaseConnection) -> Result<entity::imovel::Model, DbErr> {
    ImovelFactory::new(db).build().await
}
