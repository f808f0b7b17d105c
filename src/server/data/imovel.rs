//! Property data repository for database operations.

use entity::sea_orm_active_enums::TipoImovel;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    imovel::{Imovel, ImovelParams},
    vinculo::Vinculo,
};

/// Repository providing database operations for properties.
pub struct ImovelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImovelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a property together with the link to its first owner.
    ///
    /// # Arguments
    /// - `id` - Primary key for the property
    /// - `vinculo_id` - Primary key for the owner link
    /// - `params` - Property fields
    /// - `proprietario_id` - Existing person owning the property
    ///
    /// # Returns
    /// - `Ok((Imovel, Vinculo))` - Both rows created
    /// - `Err(DbErr)` - Either insert failed; nothing is written
    pub async fn create_with_proprietario(
        &self,
        id: String,
        vinculo_id: String,
        params: ImovelParams,
        proprietario_id: String,
    ) -> Result<(Imovel, Vinculo), DbErr> {
        let txn = self.db.begin().await?;

        let imovel = entity::imovel::ActiveModel {
            id: ActiveValue::Set(id),
            icm: ActiveValue::Set(params.icm),
            tipo: ActiveValue::Set(params.tipo),
            rua: ActiveValue::Set(params.rua),
            complemento: ActiveValue::Set(params.complemento),
            numero: ActiveValue::Set(params.numero),
            bairro: ActiveValue::Set(params.bairro),
            cidade: ActiveValue::Set(params.cidade),
            estado: ActiveValue::Set(params.estado),
            cep: ActiveValue::Set(params.cep),
        }
        .insert(&txn)
        .await?;

        let vinculo = entity::vinculo::ActiveModel {
            id: ActiveValue::Set(vinculo_id),
            imovel_id: ActiveValue::Set(imovel.id.clone()),
            proprietario_id: ActiveValue::Set(proprietario_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok((Imovel::from_entity(imovel), Vinculo::from_entity(vinculo)))
    }

    /// Replaces every field of a property.
    ///
    /// # Returns
    /// - `Ok(Some(Imovel))` - Updated property
    /// - `Ok(None)` - No property with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: &str, params: ImovelParams) -> Result<Option<Imovel>, DbErr> {
        if !self.exists(id).await? {
            return Ok(None);
        }

        let entity = entity::imovel::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            icm: ActiveValue::Set(params.icm),
            tipo: ActiveValue::Set(params.tipo),
            rua: ActiveValue::Set(params.rua),
            complemento: ActiveValue::Set(params.complemento),
            numero: ActiveValue::Set(params.numero),
            bairro: ActiveValue::Set(params.bairro),
            cidade: ActiveValue::Set(params.cidade),
            estado: ActiveValue::Set(params.estado),
            cep: ActiveValue::Set(params.cep),
        }
        .update(self.db)
        .await?;

        Ok(Some(Imovel::from_entity(entity)))
    }

    /// Deletes a property. Links, rooms, inspections and photos follow by cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Property deleted
    /// - `Ok(false)` - No property with that id
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Imovel::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_all(&self) -> Result<Vec<Imovel>, DbErr> {
        let entities = entity::prelude::Imovel::find()
            .order_by_asc(entity::imovel::Column::Icm)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Imovel::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Imovel>, DbErr> {
        let entity = entity::prelude::Imovel::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Imovel::from_entity))
    }

    pub async fn find_by_icm(&self, icm: &str) -> Result<Option<Imovel>, DbErr> {
        let entity = entity::prelude::Imovel::find()
            .filter(entity::imovel::Column::Icm.eq(icm))
            .one(self.db)
            .await?;

        Ok(entity.map(Imovel::from_entity))
    }

    pub async fn find_by_tipo(&self, tipo: TipoImovel) -> Result<Vec<Imovel>, DbErr> {
        let entities = entity::prelude::Imovel::find()
            .filter(entity::imovel::Column::Tipo.eq(tipo))
            .order_by_asc(entity::imovel::Column::Icm)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Imovel::from_entity).collect())
    }

    /// Properties whose street contains `nome`.
    pub async fn find_by_rua_contains(&self, nome: &str) -> Result<Vec<Imovel>, DbErr> {
        let entities = entity::prelude::Imovel::find()
            .filter(entity::imovel::Column::Rua.contains(nome))
            .order_by_asc(entity::imovel::Column::Icm)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Imovel::from_entity).collect())
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Imovel::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether an ICM is registered on a property other than `except_id`.
    pub async fn icm_in_use(&self, icm: &str, except_id: Option<&str>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Imovel::find().filter(entity::imovel::Column::Icm.eq(icm));
        if let Some(id) = except_id {
            query = query.filter(entity::imovel::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }
}
