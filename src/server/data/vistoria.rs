//! Inspection data repository for database operations.

use chrono::Utc;
use entity::sea_orm_active_enums::TipoVistoria;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::vistoria::{
    CreateVistoriaParams, SortOrder, UpdateVistoriaParams, Vistoria,
};

/// Repository providing database operations for inspections.
pub struct VistoriaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VistoriaRepository<'a> {
    /// Creates a new VistoriaRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `VistoriaRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an inspection dated now.
    ///
    /// # Arguments
    /// - `id` - Primary key for the inspection
    /// - `params` - Property, optional inspector and inspection type
    ///
    /// # Returns
    /// - `Ok(Vistoria)` - The created inspection
    /// - `Err(DbErr)` - Insert failed
    pub async fn create(&self, id: String, params: CreateVistoriaParams) -> Result<Vistoria, DbErr> {
        let entity = entity::vistoria::ActiveModel {
            id: ActiveValue::Set(id),
            imovel_id: ActiveValue::Set(params.imovel_id),
            vistoriador_id: ActiveValue::Set(params.vistoriador_id),
            tipo: ActiveValue::Set(params.tipo),
            data: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Vistoria::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Vistoria>, DbErr> {
        let entity = entity::prelude::Vistoria::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Vistoria::from_entity))
    }

    /// Finds an existing inspection of the same property and type.
    ///
    /// # Returns
    /// - `Ok(Some(Vistoria))` - Most recent matching inspection
    /// - `Ok(None)` - None exists yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_open(
        &self,
        imovel_id: &str,
        tipo: TipoVistoria,
    ) -> Result<Option<Vistoria>, DbErr> {
        let entity = entity::prelude::Vistoria::find()
            .filter(entity::vistoria::Column::ImovelId.eq(imovel_id))
            .filter(entity::vistoria::Column::Tipo.eq(tipo))
            .order_by_desc(entity::vistoria::Column::Data)
            .one(self.db)
            .await?;

        Ok(entity.map(Vistoria::from_entity))
    }

    /// Gets every inspection sorted by date.
    pub async fn get_all(&self, sort: SortOrder) -> Result<Vec<Vistoria>, DbErr> {
        let query = entity::prelude::Vistoria::find();
        let query = match sort {
            SortOrder::Asc => query.order_by_asc(entity::vistoria::Column::Data),
            SortOrder::Desc => query.order_by_desc(entity::vistoria::Column::Data),
        };

        let entities = query
            .order_by_asc(entity::vistoria::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vistoria::from_entity).collect())
    }

    /// Gets the inspections of one property, newest first.
    pub async fn find_by_imovel(&self, imovel_id: &str) -> Result<Vec<Vistoria>, DbErr> {
        let entities = entity::prelude::Vistoria::find()
            .filter(entity::vistoria::Column::ImovelId.eq(imovel_id))
            .order_by_desc(entity::vistoria::Column::Data)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Vistoria::from_entity).collect())
    }

    /// Gets the inspection with the most recent date.
    pub async fn latest(&self) -> Result<Option<Vistoria>, DbErr> {
        let entity = entity::prelude::Vistoria::find()
            .order_by_desc(entity::vistoria::Column::Data)
            .order_by_desc(entity::vistoria::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Vistoria::from_entity))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Vistoria))` - Updated inspection
    /// - `Ok(None)` - No inspection with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: &str,
        params: UpdateVistoriaParams,
    ) -> Result<Option<Vistoria>, DbErr> {
        let Some(existing) = entity::prelude::Vistoria::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::vistoria::ActiveModel = existing.into();
        if let Some(vistoriador_id) = params.vistoriador_id {
            active.vistoriador_id = ActiveValue::Set(Some(vistoriador_id));
        }
        if let Some(imovel_id) = params.imovel_id {
            active.imovel_id = ActiveValue::Set(imovel_id);
        }
        if let Some(data) = params.data {
            active.data = ActiveValue::Set(data);
        }
        if let Some(tipo) = params.tipo {
            active.tipo = ActiveValue::Set(tipo);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Vistoria::from_entity(entity)))
    }

    /// Deletes an inspection. Its components and photos follow by cascade.
    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Vistoria::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Vistoria::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
