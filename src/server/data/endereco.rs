//! Address data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::endereco::{Endereco, EnderecoParams};

/// Repository providing database operations for person addresses.
pub struct EnderecoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnderecoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a standalone address.
    pub async fn create(&self, id: String, params: EnderecoParams) -> Result<Endereco, DbErr> {
        insert(self.db, id, params).await
    }

    pub async fn get_all(&self) -> Result<Vec<Endereco>, DbErr> {
        let entities = entity::prelude::EnderecoPessoa::find()
            .order_by_asc(entity::endereco_pessoa::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Endereco::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Endereco>, DbErr> {
        let entity = entity::prelude::EnderecoPessoa::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Endereco::from_entity))
    }

    /// Addresses on an exact street name.
    pub async fn find_by_rua(&self, rua: &str) -> Result<Vec<Endereco>, DbErr> {
        self.find_where(entity::endereco_pessoa::Column::Rua, rua).await
    }

    pub async fn find_by_cidade(&self, cidade: &str) -> Result<Vec<Endereco>, DbErr> {
        self.find_where(entity::endereco_pessoa::Column::Cidade, cidade)
            .await
    }

    pub async fn find_by_cep(&self, cep: &str) -> Result<Vec<Endereco>, DbErr> {
        self.find_where(entity::endereco_pessoa::Column::Cep, cep).await
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::EnderecoPessoa::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn find_where(
        &self,
        column: entity::endereco_pessoa::Column,
        value: &str,
    ) -> Result<Vec<Endereco>, DbErr> {
        let entities = entity::prelude::EnderecoPessoa::find()
            .filter(column.eq(value))
            .order_by_asc(entity::endereco_pessoa::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Endereco::from_entity).collect())
    }
}

/// Inserts an address on any connection, so person creation can reuse it inside a
/// transaction.
pub(crate) async fn insert<C: ConnectionTrait>(
    conn: &C,
    id: String,
    params: EnderecoParams,
) -> Result<Endereco, DbErr> {
    let entity = entity::endereco_pessoa::ActiveModel {
        id: ActiveValue::Set(id),
        rua: ActiveValue::Set(params.rua),
        complemento: ActiveValue::Set(params.complemento),
        numero: ActiveValue::Set(params.numero),
        bairro: ActiveValue::Set(params.bairro),
        cidade: ActiveValue::Set(params.cidade),
        estado: ActiveValue::Set(params.estado),
        cep: ActiveValue::Set(params.cep),
    }
    .insert(conn)
    .await?;

    Ok(Endereco::from_entity(entity))
}
