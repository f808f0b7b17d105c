//! Property service for business logic.
//!
//! Properties are returned together with their owners, resolved through the owner
//! links. Single lookups also carry the property's inspections.

use std::collections::HashMap;

use entity::sea_orm_active_enums::TipoImovel;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        imovel::ImovelRepository, pessoa::PessoaRepository, vinculo::VinculoRepository,
        vistoria::VistoriaRepository,
    },
    error::AppError,
    model::{
        imovel::{Imovel, ImovelDetalhado, ImovelParams},
        pessoa::Pessoa,
    },
    util::id::{numbered_id, unique_id},
};

pub(crate) const NOT_FOUND_MESSAGE: &str = "Imóvel não encontrado.";
const DUPLICATE_ICM_MESSAGE: &str = "Já existe um imóvel com este ICM.";

pub struct ImovelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImovelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a property and links it to its owner in one transaction.
    ///
    /// # Returns
    /// - `Ok(Imovel)` - Created property
    /// - `Err(AppError::NotFound)` - Owner does not exist
    /// - `Err(AppError::BadRequest)` - ICM already registered
    pub async fn create(
        &self,
        params: ImovelParams,
        proprietario_id: String,
    ) -> Result<Imovel, AppError> {
        if !PessoaRepository::new(self.db)
            .exists(&proprietario_id)
            .await?
        {
            return Err(AppError::NotFound("Proprietário não encontrado.".to_string()));
        }

        let repo = ImovelRepository::new(self.db);
        if repo.icm_in_use(&params.icm, None).await? {
            return Err(AppError::BadRequest(DUPLICATE_ICM_MESSAGE.to_string()));
        }

        let repo_ref = &repo;
        let id = unique_id("Imovel", numbered_id, |id| async move {
            repo_ref.exists(&id).await
        })
        .await?;

        let vinculos = VinculoRepository::new(self.db);
        let vinculos_ref = &vinculos;
        let vinculo_id = unique_id("Vinculo", numbered_id, |id| async move {
            vinculos_ref.exists(&id).await
        })
        .await?;

        let (imovel, vinculo) = repo
            .create_with_proprietario(id, vinculo_id, params, proprietario_id)
            .await?;

        tracing::info!(
            "Imóvel {} criado com proprietário {}",
            imovel.id,
            vinculo.proprietario_id
        );

        Ok(imovel)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown id
    /// - `Err(AppError::BadRequest)` - ICM used by another property
    pub async fn update(&self, id: &str, params: ImovelParams) -> Result<Imovel, AppError> {
        let repo = ImovelRepository::new(self.db);

        if !repo.exists(id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }
        if repo.icm_in_use(&params.icm, Some(id)).await? {
            return Err(AppError::BadRequest(DUPLICATE_ICM_MESSAGE.to_string()));
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !ImovelRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!("Imóvel {} excluído", id);

        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<ImovelDetalhado>, AppError> {
        let imoveis = ImovelRepository::new(self.db).get_all().await?;

        self.with_proprietarios(imoveis).await
    }

    /// Gets a property with owners and inspections.
    pub async fn get_by_id(&self, id: &str) -> Result<ImovelDetalhado, AppError> {
        let imovel = ImovelRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        let mut detalhado = self.detalhar(imovel).await?;
        detalhado.vistorias = Some(VistoriaRepository::new(self.db).find_by_imovel(id).await?);

        Ok(detalhado)
    }

    pub async fn get_by_icm(&self, icm: &str) -> Result<ImovelDetalhado, AppError> {
        let imovel = ImovelRepository::new(self.db)
            .find_by_icm(icm)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        self.detalhar(imovel).await
    }

    pub async fn get_by_tipo(&self, tipo: TipoImovel) -> Result<Vec<ImovelDetalhado>, AppError> {
        let imoveis = ImovelRepository::new(self.db).find_by_tipo(tipo).await?;

        self.with_proprietarios(imoveis).await
    }

    /// Properties whose street contains `nome`.
    pub async fn get_by_nome(&self, nome: &str) -> Result<Vec<ImovelDetalhado>, AppError> {
        let imoveis = ImovelRepository::new(self.db)
            .find_by_rua_contains(nome)
            .await?;

        self.with_proprietarios(imoveis).await
    }

    /// Loads the owners of a single property.
    pub(crate) async fn detalhar(&self, imovel: Imovel) -> Result<ImovelDetalhado, AppError> {
        let mut detalhados = self.with_proprietarios(vec![imovel]).await?;

        detalhados
            .pop()
            .ok_or_else(|| AppError::InternalError("Imóvel perdido ao carregar proprietários".to_string()))
    }

    /// Resolves owners for a batch of properties with two queries.
    async fn with_proprietarios(
        &self,
        imoveis: Vec<Imovel>,
    ) -> Result<Vec<ImovelDetalhado>, AppError> {
        let ids: Vec<String> = imoveis.iter().map(|i| i.id.clone()).collect();
        let mut links = VinculoRepository::new(self.db)
            .proprietario_ids_by_imovel(ids)
            .await?;

        let pessoa_ids: Vec<String> = links.values().flatten().cloned().collect();
        let pessoas: HashMap<String, Pessoa> = PessoaRepository::new(self.db)
            .find_by_ids(pessoa_ids)
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        Ok(imoveis
            .into_iter()
            .map(|imovel| {
                let proprietarios = links
                    .remove(&imovel.id)
                    .unwrap_or_default()
                    .iter()
                    .filter_map(|id| pessoas.get(id).cloned())
                    .collect();

                ImovelDetalhado {
                    imovel,
                    proprietarios,
                    vistorias: None,
                }
            })
            .collect())
    }
}
