//! Photo uploads stored inline in the database.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        componente::ComponenteRepository, foto::FotoRepository, imovel::ImovelRepository,
        vistoria::VistoriaRepository,
    },
    error::AppError,
    model::foto::{Foto, FotoOwner, NovaFoto},
    service::{imovel, vistoria},
};

const NOT_FOUND_MESSAGE: &str = "Foto não encontrada.";

pub struct FotoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FotoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores uploaded photos for a property, inspection or component.
    ///
    /// # Returns
    /// - `Ok(Vec<Foto>)` - Stored photos
    /// - `Err(AppError::BadRequest)` - No files in the upload
    /// - `Err(AppError::Unprocessable)` - A file is not PNG or JPEG
    /// - `Err(AppError::NotFound)` - Owner does not exist
    pub async fn upload(&self, owner: FotoOwner, fotos: Vec<NovaFoto>) -> Result<Vec<Foto>, AppError> {
        if fotos.is_empty() {
            return Err(AppError::BadRequest("Nenhum arquivo enviado.".to_string()));
        }

        if let Some(rejected) = fotos.iter().find(|foto| !foto.is_allowed()) {
            return Err(AppError::Unprocessable(format!(
                "Tipo de arquivo não suportado: {}. Envie imagens PNG ou JPEG.",
                rejected.mimetype
            )));
        }

        self.require_owner(&owner).await?;

        let stored = FotoRepository::new(self.db).create_many(&owner, fotos).await?;

        tracing::info!("{} fotos armazenadas para {}", stored.len(), owner.id());

        Ok(stored)
    }

    /// Photos of an owner, oldest first.
    pub async fn list(&self, owner: FotoOwner) -> Result<Vec<Foto>, AppError> {
        self.require_owner(&owner).await?;

        Ok(FotoRepository::new(self.db).find_by_owner(&owner).await?)
    }

    pub async fn get(&self, id: &str) -> Result<Foto, AppError> {
        FotoRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !FotoRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        Ok(())
    }

    async fn require_owner(&self, owner: &FotoOwner) -> Result<(), AppError> {
        let (exists, message) = match owner {
            FotoOwner::Imovel(id) => (
                ImovelRepository::new(self.db).exists(id).await?,
                imovel::NOT_FOUND_MESSAGE,
            ),
            FotoOwner::Vistoria(id) => (
                VistoriaRepository::new(self.db).exists(id).await?,
                vistoria::NOT_FOUND_MESSAGE,
            ),
            FotoOwner::Componente(id) => (
                ComponenteRepository::new(self.db).exists(id).await?,
                "Componente não encontrado.",
            ),
        };

        if !exists {
            return Err(AppError::NotFound(message.to_string()));
        }

        Ok(())
    }
}
