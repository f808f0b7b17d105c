use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        comodo::ComodoRepository, componente::ComponenteRepository,
        vistoria::VistoriaRepository,
    },
    error::AppError,
    model::componente::{Componente, ComponenteParams},
    service::{comodo, vistoria},
    util::id::uuid_id,
};

const NOT_FOUND_MESSAGE: &str = "Componente não encontrado.";

pub struct ComponenteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComponenteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a component of a room for an inspection.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Room or inspection does not exist
    pub async fn create(
        &self,
        vistoria_id: &str,
        comodo_id: &str,
        params: ComponenteParams,
    ) -> Result<Componente, AppError> {
        if !ComodoRepository::new(self.db).exists(comodo_id).await? {
            return Err(AppError::NotFound(comodo::NOT_FOUND_MESSAGE.to_string()));
        }
        if !VistoriaRepository::new(self.db).exists(vistoria_id).await? {
            return Err(AppError::NotFound(vistoria::NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(ComponenteRepository::new(self.db)
            .create(
                uuid_id(),
                comodo_id.to_string(),
                vistoria_id.to_string(),
                params,
            )
            .await?)
    }

    /// Replaces a component's fields and attaches it to `comodo_id`.
    pub async fn update(
        &self,
        componente_id: &str,
        comodo_id: &str,
        params: ComponenteParams,
    ) -> Result<Componente, AppError> {
        if !ComodoRepository::new(self.db).exists(comodo_id).await? {
            return Err(AppError::NotFound(comodo::NOT_FOUND_MESSAGE.to_string()));
        }

        ComponenteRepository::new(self.db)
            .update(componente_id, comodo_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn delete(&self, componente_id: &str) -> Result<(), AppError> {
        if !ComponenteRepository::new(self.db).delete(componente_id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }

    pub async fn get_by_comodo(&self, comodo_id: &str) -> Result<Vec<Componente>, AppError> {
        Ok(ComponenteRepository::new(self.db)
            .find_by_comodo(comodo_id)
            .await?)
    }
}
