//! Rental data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::vinculo::{Aluguel, CreateAluguelParams};

/// Repository providing database operations for rentals.
pub struct AlugaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlugaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, id: String, params: CreateAluguelParams) -> Result<Aluguel, DbErr> {
        let entity = entity::aluga::ActiveModel {
            id: ActiveValue::Set(id),
            imovel_id: ActiveValue::Set(params.imovel_id),
            inquilino_id: ActiveValue::Set(params.inquilino_id),
            data_entrada: ActiveValue::Set(params.data_entrada),
            data_saida: ActiveValue::Set(params.data_saida),
        }
        .insert(self.db)
        .await?;

        Ok(Aluguel::from_entity(entity))
    }

    /// Gets every rental, most recent move-in first.
    pub async fn get_all(&self) -> Result<Vec<Aluguel>, DbErr> {
        let entities = entity::prelude::Aluga::find()
            .order_by_desc(entity::aluga::Column::DataEntrada)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Aluguel::from_entity).collect())
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Aluga::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
