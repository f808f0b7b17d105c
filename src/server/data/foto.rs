//! Photo data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    model::foto::{Foto, FotoOwner, NovaFoto},
    util::id::uuid_id,
};

/// Repository providing database operations for stored photos.
pub struct FotoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FotoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a batch of uploads for one owner in a single transaction.
    ///
    /// # Arguments
    /// - `owner` - Property, inspection or component the photos belong to
    /// - `fotos` - Uploaded files
    ///
    /// # Returns
    /// - `Ok(Vec<Foto>)` - Stored photos in upload order
    /// - `Err(DbErr)` - Any insert failed; nothing is written
    pub async fn create_many(&self, owner: &FotoOwner, fotos: Vec<NovaFoto>) -> Result<Vec<Foto>, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let mut stored = Vec::with_capacity(fotos.len());
        for foto in fotos {
            let (imovel_id, vistoria_id, componente_id) = match owner {
                FotoOwner::Imovel(id) => (Some(id.clone()), None, None),
                FotoOwner::Vistoria(id) => (None, Some(id.clone()), None),
                FotoOwner::Componente(id) => (None, None, Some(id.clone())),
            };

            let entity = entity::foto::ActiveModel {
                id: ActiveValue::Set(uuid_id()),
                imovel_id: ActiveValue::Set(imovel_id),
                vistoria_id: ActiveValue::Set(vistoria_id),
                componente_id: ActiveValue::Set(componente_id),
                mimetype: ActiveValue::Set(foto.mimetype),
                file_name: ActiveValue::Set(foto.file_name),
                data: ActiveValue::Set(foto.data),
                created_at: ActiveValue::Set(now),
            }
            .insert(&txn)
            .await?;

            stored.push(Foto::from_entity(entity));
        }

        txn.commit().await?;

        Ok(stored)
    }

    /// Gets the photos of one owner, oldest first, including their bytes.
    pub async fn find_by_owner(&self, owner: &FotoOwner) -> Result<Vec<Foto>, DbErr> {
        let column = match owner {
            FotoOwner::Imovel(_) => entity::foto::Column::ImovelId,
            FotoOwner::Vistoria(_) => entity::foto::Column::VistoriaId,
            FotoOwner::Componente(_) => entity::foto::Column::ComponenteId,
        };

        let entities = entity::prelude::Foto::find()
            .filter(column.eq(owner.id()))
            .order_by_asc(entity::foto::Column::CreatedAt)
            .order_by_asc(entity::foto::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Foto::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Foto>, DbErr> {
        let entity = entity::prelude::Foto::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Foto::from_entity))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Foto::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
