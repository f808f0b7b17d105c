//! Photo domain models.
//!
//! Photos are stored inline in the database and belong to exactly one property,
//! inspection or component.

use chrono::{DateTime, Utc};

use crate::model::foto::FotoDto;

/// Accepted upload content types.
pub const ALLOWED_MIMETYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// Record a photo is attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FotoOwner {
    Imovel(String),
    Vistoria(String),
    Componente(String),
}

impl FotoOwner {
    pub fn id(&self) -> &str {
        match self {
            Self::Imovel(id) | Self::Vistoria(id) | Self::Componente(id) => id,
        }
    }
}

/// Photo metadata plus, when loaded, its bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct Foto {
    pub id: String,
    pub mimetype: String,
    pub file_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub data: Vec<u8>,
}

impl Foto {
    pub fn from_entity(entity: entity::foto::Model) -> Self {
        Self {
            id: entity.id,
            mimetype: entity.mimetype,
            file_name: entity.file_name,
            created_at: entity.created_at,
            data: entity.data,
        }
    }

    pub fn into_dto(self) -> FotoDto {
        FotoDto {
            id: self.id,
            mimetype: self.mimetype,
            file_name: self.file_name,
            created_at: self.created_at,
        }
    }
}

/// Uploaded file ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NovaFoto {
    pub mimetype: String,
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

impl NovaFoto {
    pub fn is_allowed(&self) -> bool {
        ALLOWED_MIMETYPES.contains(&self.mimetype.as_str())
    }
}
