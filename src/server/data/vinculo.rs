//! Owner link data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vinculo::Vinculo;

/// Repository providing database operations for property ownership links.
pub struct VinculoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VinculoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        id: String,
        imovel_id: String,
        proprietario_id: String,
    ) -> Result<Vinculo, DbErr> {
        let entity = entity::vinculo::ActiveModel {
            id: ActiveValue::Set(id),
            imovel_id: ActiveValue::Set(imovel_id),
            proprietario_id: ActiveValue::Set(proprietario_id),
        }
        .insert(self.db)
        .await?;

        Ok(Vinculo::from_entity(entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Vinculo>, DbErr> {
        let entities = entity::prelude::Vinculo::find()
            .order_by_asc(entity::vinculo::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vinculo::from_entity).collect())
    }

    /// Owner ids of each given property, keyed by property id.
    ///
    /// Properties without owners are absent from the map.
    pub async fn proprietario_ids_by_imovel(
        &self,
        imovel_ids: Vec<String>,
    ) -> Result<HashMap<String, Vec<String>>, DbErr> {
        if imovel_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Vinculo::find()
            .filter(entity::vinculo::Column::ImovelId.is_in(imovel_ids))
            .order_by_asc(entity::vinculo::Column::Id)
            .all(self.db)
            .await?;

        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for vinculo in entities {
            map.entry(vinculo.imovel_id)
                .or_default()
                .push(vinculo.proprietario_id);
        }

        Ok(map)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Vinculo::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
