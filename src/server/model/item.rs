//! Catalogue item domain models.

use crate::model::item::ItemDto;

/// The two item catalogues share a shape but live in separate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Principal,
    Acessorio,
}

impl ItemKind {
    /// Human-readable name used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Principal => "Item principal",
            Self::Acessorio => "Item acessório",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl Item {
    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
        }
    }
}
