//! Inspection service for business logic.
//!
//! Besides plain CRUD, this service assembles `VistoriaCompleta`: the inspection with its
//! property, owners, inspector, rooms (with the components recorded by this inspection)
//! and photos. Listings, single lookups and report exports all use that assembly.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        comodo::ComodoRepository, foto::FotoRepository, imovel::ImovelRepository,
        pessoa::PessoaRepository, vistoria::VistoriaRepository,
    },
    error::AppError,
    model::{
        foto::FotoOwner,
        vistoria::{
            CreateVistoriaParams, UpdateVistoriaParams, Vistoria, VistoriaCompleta,
            VistoriaFilter,
        },
    },
    service::imovel::{ImovelService, NOT_FOUND_MESSAGE as IMOVEL_NOT_FOUND_MESSAGE},
    util::id::{short_hex_id, unique_id},
};

pub(crate) const NOT_FOUND_MESSAGE: &str = "Vistoria não encontrada.";
const VISTORIADOR_NOT_FOUND_MESSAGE: &str = "Vistoriador não encontrado.";

/// Result of a create request.
#[derive(Debug, Clone)]
pub enum VistoriaCriada {
    /// A new inspection was inserted.
    Nova(Vistoria),
    /// An inspection of the same property and type already existed.
    EmAndamento(Vistoria),
}

pub struct VistoriaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VistoriaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts an inspection, or returns the one already open for the property and type.
    ///
    /// # Returns
    /// - `Ok(VistoriaCriada::Nova)` - Inspection created with a `Vistoria<hex>` id
    /// - `Ok(VistoriaCriada::EmAndamento)` - Existing inspection reused
    /// - `Err(AppError::BadRequest)` - Property does not exist
    /// - `Err(AppError::NotFound)` - Inspector does not exist
    pub async fn create(&self, params: CreateVistoriaParams) -> Result<VistoriaCriada, AppError> {
        if !ImovelRepository::new(self.db)
            .exists(&params.imovel_id)
            .await?
        {
            return Err(AppError::BadRequest(IMOVEL_NOT_FOUND_MESSAGE.to_string()));
        }

        if let Some(vistoriador_id) = &params.vistoriador_id {
            if !PessoaRepository::new(self.db).exists(vistoriador_id).await? {
                return Err(AppError::NotFound(VISTORIADOR_NOT_FOUND_MESSAGE.to_string()));
            }
        }

        let repo = VistoriaRepository::new(self.db);

        if let Some(existing) = repo.find_open(&params.imovel_id, params.tipo).await? {
            tracing::debug!(
                "Vistoria {} já em andamento para o imóvel {}",
                existing.id,
                existing.imovel_id
            );
            return Ok(VistoriaCriada::EmAndamento(existing));
        }

        let repo_ref = &repo;
        let id = unique_id("Vistoria", short_hex_id, |id| async move {
            repo_ref.exists(&id).await
        })
        .await?;

        let vistoria = repo.create(id, params).await?;

        tracing::info!("Vistoria {} criada", vistoria.id);

        Ok(VistoriaCriada::Nova(vistoria))
    }

    /// Lists full inspections, filtered by free text and sorted by date.
    pub async fn get_all(&self, filter: VistoriaFilter) -> Result<Vec<VistoriaCompleta>, AppError> {
        let vistorias = VistoriaRepository::new(self.db).get_all(filter.sort).await?;

        let mut completas = Vec::with_capacity(vistorias.len());
        for vistoria in vistorias {
            let completa = self.completar(vistoria).await?;
            if filter
                .search_text
                .as_deref()
                .is_none_or(|search| completa.matches(search))
            {
                completas.push(completa);
            }
        }

        Ok(completas)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<VistoriaCompleta, AppError> {
        let vistoria = VistoriaRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        self.completar(vistoria).await
    }

    /// Most recent inspection by date.
    pub async fn latest(&self) -> Result<Option<Vistoria>, AppError> {
        Ok(VistoriaRepository::new(self.db).latest().await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - Inspection, new property or new inspector unknown
    pub async fn update(
        &self,
        id: &str,
        params: UpdateVistoriaParams,
    ) -> Result<Vistoria, AppError> {
        if let Some(imovel_id) = &params.imovel_id {
            if !ImovelRepository::new(self.db).exists(imovel_id).await? {
                return Err(AppError::NotFound(IMOVEL_NOT_FOUND_MESSAGE.to_string()));
            }
        }
        if let Some(vistoriador_id) = &params.vistoriador_id {
            if !PessoaRepository::new(self.db).exists(vistoriador_id).await? {
                return Err(AppError::NotFound(VISTORIADOR_NOT_FOUND_MESSAGE.to_string()));
            }
        }

        VistoriaRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !VistoriaRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!("Vistoria {} excluída", id);

        Ok(())
    }

    async fn completar(&self, vistoria: Vistoria) -> Result<VistoriaCompleta, AppError> {
        let imovel = ImovelRepository::new(self.db)
            .find_by_id(&vistoria.imovel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(IMOVEL_NOT_FOUND_MESSAGE.to_string()))?;
        let imovel = ImovelService::new(self.db).detalhar(imovel).await?;

        let vistoriador = match &vistoria.vistoriador_id {
            Some(id) => PessoaRepository::new(self.db).find_by_id(id).await?,
            None => None,
        };

        let comodos = ComodoRepository::new(self.db)
            .find_by_imovel_for_vistoria(&vistoria.imovel_id, &vistoria.id)
            .await?;

        let fotos = FotoRepository::new(self.db)
            .find_by_owner(&FotoOwner::Vistoria(vistoria.id.clone()))
            .await?;

        Ok(VistoriaCompleta {
            vistoria,
            imovel,
            vistoriador,
            comodos,
            fotos,
        })
    }
}
