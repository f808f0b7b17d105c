//! Person service for business logic.
//!
//! People are tenants, owners or inspectors. Each one owns exactly one address, created
//! and deleted together with the person.

use entity::sea_orm_active_enums::RolePessoa;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{endereco::EnderecoRepository, pessoa::PessoaRepository},
    error::AppError,
    model::pessoa::{CreatePessoaParams, Pessoa, PessoasAgrupadas, UpdatePessoaParams},
    util::id::{numbered_id, unique_id},
};

const DUPLICATE_EMAIL_MESSAGE: &str = "Usuário já existe.";
const NOT_FOUND_MESSAGE: &str = "Pessoa não encontrada";

pub struct PessoaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PessoaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a person and their address.
    ///
    /// The person id is `Pessoa<Tipo><n>`, e.g. `PessoaVistoriador12`.
    ///
    /// # Returns
    /// - `Ok(Pessoa)` - Created person with address
    /// - `Err(AppError::BadRequest)` - Email already used by another person
    pub async fn create(&self, params: CreatePessoaParams) -> Result<Pessoa, AppError> {
        let repo = PessoaRepository::new(self.db);

        if let Some(email) = &params.email {
            if repo.email_in_use(email, None).await? {
                return Err(AppError::BadRequest(DUPLICATE_EMAIL_MESSAGE.to_string()));
            }
        }

        let repo_ref = &repo;
        let prefix = format!("Pessoa{}", tipo_prefix(params.tipo));
        let id = unique_id(&prefix, numbered_id, |id| async move {
            repo_ref.exists(&id).await
        })
        .await?;

        let enderecos = EnderecoRepository::new(self.db);
        let enderecos_ref = &enderecos;
        let endereco_id = unique_id("Endereco", numbered_id, |id| async move {
            enderecos_ref.exists(&id).await
        })
        .await?;

        let pessoa = repo.create(id, endereco_id, params).await?;

        tracing::info!("Pessoa {} criada", pessoa.id);

        Ok(pessoa)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Pessoa)` - Updated person
    /// - `Err(AppError::NotFound)` - Unknown id
    /// - `Err(AppError::BadRequest)` - New email already used by someone else
    pub async fn update(&self, params: UpdatePessoaParams) -> Result<Pessoa, AppError> {
        let repo = PessoaRepository::new(self.db);

        if let Some(email) = &params.email {
            if repo.email_in_use(email, Some(&params.id)).await? {
                return Err(AppError::BadRequest(DUPLICATE_EMAIL_MESSAGE.to_string()));
            }
        }

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn get_all(&self) -> Result<Vec<Pessoa>, AppError> {
        Ok(PessoaRepository::new(self.db).get_all().await?)
    }

    pub async fn get_grouped(&self) -> Result<PessoasAgrupadas, AppError> {
        let pessoas = PessoaRepository::new(self.db).get_all().await?;

        Ok(PessoasAgrupadas::from_pessoas(pessoas))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Pessoa, AppError> {
        PessoaRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn get_by_tipo(&self, tipo: RolePessoa) -> Result<Vec<Pessoa>, AppError> {
        Ok(PessoaRepository::new(self.db).find_by_tipo(tipo).await?)
    }

    pub async fn get_by_cidade_estado(
        &self,
        cidade: &str,
        estado: &str,
    ) -> Result<Vec<Pessoa>, AppError> {
        Ok(PessoaRepository::new(self.db)
            .find_by_cidade_estado(cidade, estado)
            .await?)
    }

    /// Deletes a person and their address.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Unknown id
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !PessoaRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        tracing::info!("Pessoa {} excluída", id);

        Ok(())
    }
}

fn tipo_prefix(tipo: RolePessoa) -> &'static str {
    match tipo {
        RolePessoa::Inquilino => "Inquilino",
        RolePessoa::Proprietario => "Proprietario",
        RolePessoa::Vistoriador => "Vistoriador",
    }
}
