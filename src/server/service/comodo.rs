//! Room service for business logic.

use entity::sea_orm_active_enums::TipoComodo;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comodo::ComodoRepository, imovel::ImovelRepository, vistoria::VistoriaRepository},
    error::AppError,
    model::comodo::{preset_componentes, Comodo, ComodoComComponentes},
    service::{imovel::NOT_FOUND_MESSAGE as IMOVEL_NOT_FOUND_MESSAGE, vistoria},
    util::id::uuid_id,
};

pub(crate) const NOT_FOUND_MESSAGE: &str = "Comodo não encontrado.";

pub struct ComodoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComodoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a room numbered after the last room of the same type in the property.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Property does not exist
    pub async fn create(&self, imovel_id: &str, tipo: TipoComodo) -> Result<Comodo, AppError> {
        self.require_imovel(imovel_id).await?;

        let repo = ComodoRepository::new(self.db);
        let numero = repo.last_numero_of_tipo(imovel_id, tipo).await?.unwrap_or(0) + 1;

        let comodo = repo
            .create(uuid_id(), imovel_id.to_string(), tipo, numero)
            .await?;

        tracing::info!("Comodo {} criado no imóvel {}", comodo.titulo(), imovel_id);

        Ok(comodo)
    }

    /// Adds a room numbered after every room of the property and fills in the preset
    /// checklist of its type for the given inspection.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Property or inspection does not exist
    pub async fn create_with_componentes(
        &self,
        imovel_id: &str,
        vistoria_id: &str,
        tipo: TipoComodo,
    ) -> Result<ComodoComComponentes, AppError> {
        self.require_imovel(imovel_id).await?;
        if !VistoriaRepository::new(self.db).exists(vistoria_id).await? {
            return Err(AppError::NotFound(vistoria::NOT_FOUND_MESSAGE.to_string()));
        }

        let repo = ComodoRepository::new(self.db);
        let numero = repo.max_numero(imovel_id).await?.unwrap_or(0) + 1;

        let comodo = repo
            .create_with_componentes(
                uuid_id(),
                imovel_id.to_string(),
                tipo,
                numero,
                vistoria_id.to_string(),
                preset_componentes(tipo),
            )
            .await?;

        tracing::info!(
            "Comodo {} criado com {} componentes",
            comodo.comodo.titulo(),
            comodo.componentes.len()
        );

        Ok(comodo)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - The property has no rooms
    pub async fn get_by_imovel(&self, imovel_id: &str) -> Result<Vec<ComodoComComponentes>, AppError> {
        let comodos = ComodoRepository::new(self.db)
            .find_by_imovel_with_componentes(imovel_id)
            .await?;

        if comodos.is_empty() {
            return Err(AppError::NotFound(
                "Nenhum comodo encontrado para este imóvel.".to_string(),
            ));
        }

        Ok(comodos)
    }

    /// Highest-numbered room across all properties.
    pub async fn latest(&self) -> Result<Option<Comodo>, AppError> {
        Ok(ComodoRepository::new(self.db).latest().await?)
    }

    /// Highest-numbered rooms of the property that `comodo_id` belongs to.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown room, or no rooms found
    pub async fn latest_with_componentes(
        &self,
        comodo_id: &str,
        quantidade: usize,
    ) -> Result<Vec<ComodoComComponentes>, AppError> {
        let repo = ComodoRepository::new(self.db);

        let comodo = repo
            .find_by_id(comodo_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        let comodos = repo
            .latest_in_imovel_with_componentes(&comodo.imovel_id, quantidade as u64)
            .await?;

        if comodos.is_empty() {
            return Err(AppError::NotFound(
                "Nenhum comodo encontrado recentemente.".to_string(),
            ));
        }

        Ok(comodos)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - Room missing or not in the property
    pub async fn update_tipo(
        &self,
        imovel_id: &str,
        comodo_id: &str,
        tipo: TipoComodo,
    ) -> Result<Comodo, AppError> {
        ComodoRepository::new(self.db)
            .update_tipo(comodo_id, imovel_id, tipo)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    /// Deletes a room and its components.
    pub async fn delete(&self, comodo_id: &str) -> Result<(), AppError> {
        if !ComodoRepository::new(self.db)
            .delete_with_componentes(comodo_id)
            .await?
        {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!("Comodo {} excluído com seus componentes", comodo_id);

        Ok(())
    }

    async fn require_imovel(&self, imovel_id: &str) -> Result<(), AppError> {
        if !ImovelRepository::new(self.db).exists(imovel_id).await? {
            return Err(AppError::NotFound(IMOVEL_NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }
}
