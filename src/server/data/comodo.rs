//! Room data repository for database operations.

use entity::sea_orm_active_enums::TipoComodo;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::componente,
    model::{
        comodo::{Comodo, ComodoComComponentes},
        componente::{Componente, ComponenteParams},
    },
    util::id::uuid_id,
};

/// Repository providing database operations for rooms.
pub struct ComodoRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComodoRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        id: String,
        imovel_id: String,
        tipo: TipoComodo,
        numero: i32,
    ) -> Result<Comodo, DbErr> {
        let entity = entity::comodo::ActiveModel {
            id: ActiveValue::Set(id),
            imovel_id: ActiveValue::Set(imovel_id),
            tipo: ActiveValue::Set(tipo),
            numero: ActiveValue::Set(numero),
        }
        .insert(self.db)
        .await?;

        Ok(Comodo::from_entity(entity))
    }

    /// Inserts a room and its initial components for an inspection in one transaction.
    ///
    /// # Arguments
    /// - `id` - Primary key for the room
    /// - `imovel_id` - Property the room belongs to
    /// - `tipo` / `numero` - Room type and number within the property
    /// - `vistoria_id` - Inspection the components are recorded for
    /// - `componentes` - Component fields; each gets a new UUID
    ///
    /// # Returns
    /// - `Ok(ComodoComComponentes)` - Room with the inserted components
    /// - `Err(DbErr)` - Any insert failed; nothing is written
    pub async fn create_with_componentes(
        &self,
        id: String,
        imovel_id: String,
        tipo: TipoComodo,
        numero: i32,
        vistoria_id: String,
        componentes: Vec<ComponenteParams>,
    ) -> Result<ComodoComComponentes, DbErr> {
        let txn = self.db.begin().await?;

        let comodo = entity::comodo::ActiveModel {
            id: ActiveValue::Set(id),
            imovel_id: ActiveValue::Set(imovel_id),
            tipo: ActiveValue::Set(tipo),
            numero: ActiveValue::Set(numero),
        }
        .insert(&txn)
        .await?;

        let mut inserted = Vec::with_capacity(componentes.len());
        for params in componentes {
            let componente = componente::insert(
                &txn,
                uuid_id(),
                comodo.id.clone(),
                vistoria_id.clone(),
                params,
            )
            .await?;
            inserted.push(componente);
        }

        txn.commit().await?;

        Ok(ComodoComComponentes {
            comodo: Comodo::from_entity(comodo),
            componentes: inserted,
        })
    }

    /// Highest number used by rooms of one type in a property.
    pub async fn last_numero_of_tipo(
        &self,
        imovel_id: &str,
        tipo: TipoComodo,
    ) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Comodo::find()
            .filter(entity::comodo::Column::ImovelId.eq(imovel_id))
            .filter(entity::comodo::Column::Tipo.eq(tipo))
            .order_by_desc(entity::comodo::Column::Numero)
            .one(self.db)
            .await?;

        Ok(entity.map(|c| c.numero))
    }

    /// Highest number used by any room in a property.
    pub async fn max_numero(&self, imovel_id: &str) -> Result<Option<i32>, DbErr> {
        let entity = entity::prelude::Comodo::find()
            .filter(entity::comodo::Column::ImovelId.eq(imovel_id))
            .order_by_desc(entity::comodo::Column::Numero)
            .one(self.db)
            .await?;

        Ok(entity.map(|c| c.numero))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Comodo>, DbErr> {
        let entity = entity::prelude::Comodo::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Comodo::from_entity))
    }

    /// Gets the rooms of a property with all their components.
    pub async fn find_by_imovel_with_componentes(
        &self,
        imovel_id: &str,
    ) -> Result<Vec<ComodoComComponentes>, DbErr> {
        let rows = entity::prelude::Comodo::find()
            .filter(entity::comodo::Column::ImovelId.eq(imovel_id))
            .order_by_asc(entity::comodo::Column::Numero)
            .find_with_related(entity::prelude::Componente)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(into_comodo_com_componentes).collect())
    }

    /// Gets the rooms of a property with the components recorded by one inspection.
    pub async fn find_by_imovel_for_vistoria(
        &self,
        imovel_id: &str,
        vistoria_id: &str,
    ) -> Result<Vec<ComodoComComponentes>, DbErr> {
        let comodos = self.find_by_imovel_with_componentes(imovel_id).await?;

        Ok(comodos
            .into_iter()
            .map(|mut comodo| {
                comodo.componentes.retain(|c| c.vistoria_id == vistoria_id);
                comodo
            })
            .collect())
    }

    /// Room with the highest number across all properties.
    pub async fn latest(&self) -> Result<Option<Comodo>, DbErr> {
        let entity = entity::prelude::Comodo::find()
            .order_by_desc(entity::comodo::Column::Numero)
            .order_by_desc(entity::comodo::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comodo::from_entity))
    }

    /// Highest-numbered rooms of a property with their components.
    pub async fn latest_in_imovel_with_componentes(
        &self,
        imovel_id: &str,
        limit: u64,
    ) -> Result<Vec<ComodoComComponentes>, DbErr> {
        let comodos = entity::prelude::Comodo::find()
            .filter(entity::comodo::Column::ImovelId.eq(imovel_id))
            .order_by_desc(entity::comodo::Column::Numero)
            .limit(limit)
            .all(self.db)
            .await?;

        let ids: Vec<String> = comodos.iter().map(|c| c.id.clone()).collect();
        let componentes = entity::prelude::Componente::find()
            .filter(entity::componente::Column::ComodoId.is_in(ids))
            .order_by_asc(entity::componente::Column::Tipo)
            .all(self.db)
            .await?;

        Ok(comodos
            .into_iter()
            .map(|comodo| {
                let componentes = componentes
                    .iter()
                    .filter(|c| c.comodo_id == comodo.id)
                    .cloned()
                    .map(Componente::from_entity)
                    .collect();

                ComodoComComponentes {
                    comodo: Comodo::from_entity(comodo),
                    componentes,
                }
            })
            .collect())
    }

    /// Changes the type of a room belonging to the given property.
    ///
    /// # Returns
    /// - `Ok(Some(Comodo))` - Updated room
    /// - `Ok(None)` - Room missing or in another property
    pub async fn update_tipo(
        &self,
        id: &str,
        imovel_id: &str,
        tipo: TipoComodo,
    ) -> Result<Option<Comodo>, DbErr> {
        let Some(existing) = entity::prelude::Comodo::find_by_id(id.to_string())
            .filter(entity::comodo::Column::ImovelId.eq(imovel_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::comodo::ActiveModel = existing.into();
        active.tipo = ActiveValue::Set(tipo);
        let entity = active.update(self.db).await?;

        Ok(Some(Comodo::from_entity(entity)))
    }

    /// Deletes a room after its components, in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Room and components deleted
    /// - `Ok(false)` - No room with that id
    pub async fn delete_with_componentes(&self, id: &str) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Componente::delete_many()
            .filter(entity::componente::Column::ComodoId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Comodo::delete_by_id(id.to_string())
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }

    pub async fn exists(&self, id: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Comodo::find_by_id(id.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}

fn into_comodo_com_componentes(
    (comodo, componentes): (entity::comodo::Model, Vec<entity::componente::Model>),
) -> ComodoComComponentes {
    ComodoComComponentes {
        comodo: Comodo::from_entity(comodo),
        componentes: componentes.into_iter().map(Componente::from_entity).collect(),
    }
}
