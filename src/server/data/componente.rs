//! Component data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::componente::{Componente, ComponenteParams};

/// Repository providing database operations for room components.
pub struct ComponenteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComponenteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        id: String,
        comodo_id: String,
        vistoria_id: String,
        params: ComponenteParams,
    ) -> Result<Componente, DbErr> {
        insert(self.db, id, comodo_id, vistoria_id, params).await
    }

    /// Replaces the fields of a component, optionally moving it to another room.
    ///
    /// # Returns
    /// - `Ok(Some(Componente))` - Updated component
    /// - `Ok(None)` - No component with that id
    pub async fn update(
        &self,
        id: &str,
        comodo_id: &str,
        params: ComponenteParams,
    ) -> Result<Option<Componente>, DbErr> {
        let Some(existing) = entity::prelude::Componente::find_by_id(id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::componente::ActiveModel = existing.into();
        active.comodo_id = ActiveValue::Set(comodo_id.to_string());
        active.tipo = ActiveValue::Set(params.tipo);
        active.obs = ActiveValue::Set(params.obs);
        active.cor = ActiveValue::Set(params.cor);
        active.estado = ActiveValue::Set(params.estado);
        active.material = ActiveValue::Set(params.material);
        let entity = active.update(self.db).await?;

        Ok(Some(Componente::from_entity(entity)))
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Componente::delete_by_id(id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn find_by_comodo(&self, comodo_id: &str) -> Result<Vec<Componente>, DbErr> {
        let entities = entity::prelude::Componente::find()
            .filter(entity::componente::Column::ComodoId.eq(comodo_id))
            .order_by_asc(entity::componente::Column::Tipo)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Componente::from_entity).collect())
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Componente::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

/// Inserts a component on any connection, so room creation can reuse it inside a
/// transaction.
pub(crate) async fn insert<C: ConnectionTrait>(
    conn: &C,
    id: String,
    comodo_id: String,
    vistoria_id: String,
    params: ComponenteParams,
) -> Result<Componente, DbErr> {
    let entity = entity::componente::ActiveModel {
        id: ActiveValue::Set(id),
        comodo_id: ActiveValue::Set(comodo_id),
        vistoria_id: ActiveValue::Set(vistoria_id),
        tipo: ActiveValue::Set(params.tipo),
        obs: ActiveValue::Set(params.obs),
        cor: ActiveValue::Set(params.cor),
        estado: ActiveValue::Set(params.estado),
        material: ActiveValue::Set(params.material),
    }
    .insert(conn)
    .await?;

    Ok(Componente::from_entity(entity))
}
