//! Catalogue item data repository for database operations.
//!
//! Main items and accessories live in separate tables with the same columns; the
//! repository picks the table from an `ItemKind`.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::item::{Item, ItemKind};

/// Repository providing database operations for one item catalogue.
pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
    kind: ItemKind,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection, kind: ItemKind) -> Self {
        Self { db, kind }
    }

    pub async fn create(&self, id: String, name: String) -> Result<Item, DbErr> {
        match self.kind {
            ItemKind::Principal => {
                let entity = entity::item_principal::ActiveModel {
                    id: ActiveValue::Set(id),
                    name: ActiveValue::Set(name),
                }
                .insert(self.db)
                .await?;

                Ok(Item {
                    id: entity.id,
                    name: entity.name,
                })
            }
            ItemKind::Acessorio => {
                let entity = entity::item_acessorio::ActiveModel {
                    id: ActiveValue::Set(id),
                    name: ActiveValue::Set(name),
                }
                .insert(self.db)
                .await?;

                Ok(Item {
                    id: entity.id,
                    name: entity.name,
                })
            }
        }
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Item>, DbErr> {
        let item = match self.kind {
            ItemKind::Principal => entity::prelude::ItemPrincipal::find_by_id(id.to_string())
                .one(self.db)
                .await?
                .map(|e| Item {
                    id: e.id,
                    name: e.name,
                }),
            ItemKind::Acessorio => entity::prelude::ItemAcessorio::find_by_id(id.to_string())
                .one(self.db)
                .await?
                .map(|e| Item {
                    id: e.id,
                    name: e.name,
                }),
        };

        Ok(item)
    }

    pub async fn delete(&self, id: &str) -> Result<bool, DbErr> {
        let result = match self.kind {
            ItemKind::Principal => {
                entity::prelude::ItemPrincipal::delete_by_id(id.to_string())
                    .exec(self.db)
                    .await?
            }
            ItemKind::Acessorio => {
                entity::prelude::ItemAcessorio::delete_by_id(id.to_string())
                    .exec(self.db)
                    .await?
            }
        };

        Ok(result.rows_affected > 0)
    }
}
