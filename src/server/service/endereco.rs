use sea_orm::DatabaseConnection;

use crate::server::{
    data::endereco::EnderecoRepository,
    error::AppError,
    model::endereco::{Endereco, EnderecoParams},
    util::id::{numbered_id, unique_id},
};

pub struct EnderecoService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnderecoService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a standalone address with an `Endereco<n>` id.
    pub async fn create(&self, params: EnderecoParams) -> Result<Endereco, AppError> {
        let repo = EnderecoRepository::new(self.db);
        let repo_ref = &repo;

        let id = unique_id("Endereco", numbered_id, |id| async move {
            repo_ref.exists(&id).await
        })
        .await?;

        Ok(repo.create(id, params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Endereco>, AppError> {
        Ok(EnderecoRepository::new(self.db).get_all().await?)
    }

    /// # Returns
    /// - `Err(AppError::NotFound)` - No address with that id
    pub async fn get_by_id(&self, id: &str) -> Result<Endereco, AppError> {
        EnderecoRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Endereço não encontrado".to_string()))
    }

    pub async fn get_by_rua(&self, rua: &str) -> Result<Vec<Endereco>, AppError> {
        Ok(EnderecoRepository::new(self.db).find_by_rua(rua).await?)
    }

    pub async fn get_by_cidade(&self, cidade: &str) -> Result<Vec<Endereco>, AppError> {
        Ok(EnderecoRepository::new(self.db).find_by_cidade(cidade).await?)
    }

    pub async fn get_by_cep(&self, cep: &str) -> Result<Vec<Endereco>, AppError> {
        Ok(EnderecoRepository::new(self.db).find_by_cep(cep).await?)
    }
}
