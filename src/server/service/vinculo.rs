//! Owner links and rentals between people and properties.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        aluga::AlugaRepository, imovel::ImovelRepository, pessoa::PessoaRepository,
        vinculo::VinculoRepository,
    },
    error::AppError,
    model::{
        endereco::non_blank,
        vinculo::{Aluguel, CreateAluguelParams, Vinculo},
    },
    util::id::{numbered_id, unique_id},
};

pub struct VinculoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VinculoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Links an owner to a property.
    ///
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Either id missing
    /// - `Err(AppError::NotFound)` - Property or owner unknown
    pub async fn create_vinculo(
        &self,
        imovel_id: Option<String>,
        proprietario_id: Option<String>,
    ) -> Result<Vinculo, AppError> {
        let (Some(imovel_id), Some(proprietario_id)) = (non_blank(imovel_id), non_blank(proprietario_id))
        else {
            return Err(AppError::Unprocessable(
                "imovelId e proprietarioId são obrigatórios.".to_string(),
            ));
        };

        self.require_imovel(&imovel_id).await?;
        if !PessoaRepository::new(self.db)
            .exists(&proprietario_id)
            .await?
        {
            return Err(AppError::NotFound("Proprietário não encontrado.".to_string()));
        }

        let repo = VinculoRepository::new(self.db);
        let repo_ref = &repo;
        let id = unique_id("Vinculo", numbered_id, |id| async move {
            repo_ref.exists(&id).await
        })
        .await?;

        Ok(repo.create(id, imovel_id, proprietario_id).await?)
    }

    pub async fn get_vinculos(&self) -> Result<Vec<Vinculo>, AppError> {
        Ok(VinculoRepository::new(self.db).get_all().await?)
    }

    /// Registers a tenant moving into a property. The move-in date defaults to now.
    ///
    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Either id missing
    /// - `Err(AppError::NotFound)` - Property or tenant unknown
    pub async fn create_aluguel(
        &self,
        imovel_id: Option<String>,
        inquilino_id: Option<String>,
        data_entrada: Option<DateTime<Utc>>,
        data_saida: Option<DateTime<Utc>>,
    ) -> Result<Aluguel, AppError> {
        let (Some(imovel_id), Some(inquilino_id)) = (non_blank(imovel_id), non_blank(inquilino_id))
        else {
            return Err(AppError::Unprocessable(
                "imovelId e inquilinoId são obrigatórios.".to_string(),
            ));
        };

        self.require_imovel(&imovel_id).await?;
        if !PessoaRepository::new(self.db).exists(&inquilino_id).await? {
            return Err(AppError::NotFound("Inquilino não encontrado.".to_string()));
        }

        let repo = AlugaRepository::new(self.db);
        let repo_ref = &repo;
        let id = unique_id("Aluguel", numbered_id, |id| async move {
            repo_ref.exists(&id).await
        })
        .await?;

        let aluguel = repo
            .create(
                id,
                CreateAluguelParams {
                    imovel_id,
                    inquilino_id,
                    data_entrada: data_entrada.unwrap_or_else(Utc::now),
                    data_saida,
                },
            )
            .await?;

        tracing::info!("Aluguel {} registrado", aluguel.id);

        Ok(aluguel)
    }

    pub async fn get_alugueis(&self) -> Result<Vec<Aluguel>, AppError> {
        Ok(AlugaRepository::new(self.db).get_all().await?)
    }

    async fn require_imovel(&self, imovel_id: &str) -> Result<(), AppError> {
        if !ImovelRepository::new(self.db).exists(imovel_id).await? {
            return Err(AppError::NotFound(
                super::imovel::NOT_FOUND_MESSAGE.to_string(),
            ));
        }

        Ok(())
    }
}
