use sea_orm::DatabaseConnection;

use crate::server::{
    data::item::ItemRepository,
    error::AppError,
    model::item::{Item, ItemKind},
    util::id::uuid_id,
};

/// Service for one of the two item catalogues.
pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
    kind: ItemKind,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection, kind: ItemKind) -> Self {
        Self { db, kind }
    }

    /// # Returns
    /// - `Err(AppError::Unprocessable)` - Blank name
    pub async fn create(&self, name: &str) -> Result<Item, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Unprocessable(format!(
                "O nome do {} é obrigatório.",
                self.kind.label().to_lowercase()
            )));
        }

        Ok(ItemRepository::new(self.db, self.kind)
            .create(uuid_id(), name.to_string())
            .await?)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Item, AppError> {
        ItemRepository::new(self.db, self.kind)
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found())
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        if !ItemRepository::new(self.db, self.kind).delete(id).await? {
            return Err(self.not_found());
        }

        Ok(())
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} não encontrado.", self.kind.label()))
    }
}
