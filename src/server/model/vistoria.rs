//! Inspection domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::TipoVistoria;

use crate::{
    model::vistoria::{PegarVistoriasQuery, UpdateVistoriaDto, VistoriaDto, VistoriaResumoDto},
    server::model::{
        comodo::ComodoComComponentes, foto::Foto, imovel::ImovelDetalhado, pessoa::Pessoa,
    },
};

/// Inspection row without relations.
#[derive(Debug, Clone, PartialEq)]
pub struct Vistoria {
    pub id: String,
    pub imovel_id: String,
    pub vistoriador_id: Option<String>,
    pub tipo: TipoVistoria,
    pub data: DateTime<Utc>,
}

impl Vistoria {
    pub fn from_entity(entity: entity::vistoria::Model) -> Self {
        Self {
            id: entity.id,
            imovel_id: entity.imovel_id,
            vistoriador_id: entity.vistoriador_id,
            tipo: entity.tipo,
            data: entity.data,
        }
    }

    pub fn into_resumo_dto(self) -> VistoriaResumoDto {
        VistoriaResumoDto {
            id: self.id,
            imovel_id: self.imovel_id,
            vistoriador_id: self.vistoriador_id,
            tipo: self.tipo,
            data: self.data,
        }
    }
}

/// Inspection with everything needed to display or export it.
#[derive(Debug, Clone, PartialEq)]
pub struct VistoriaCompleta {
    pub vistoria: Vistoria,
    pub imovel: ImovelDetalhado,
    pub vistoriador: Option<Pessoa>,
    /// Rooms of the property with the components recorded by this inspection.
    pub comodos: Vec<ComodoComComponentes>,
    pub fotos: Vec<Foto>,
}

impl VistoriaCompleta {
    /// Case-insensitive match against id, street, city and inspector name.
    pub fn matches(&self, search: &str) -> bool {
        let needle = search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let vistoriador = self
            .vistoriador
            .as_ref()
            .map(Pessoa::full_name)
            .unwrap_or_default();

        [
            self.vistoria.id.as_str(),
            self.imovel.imovel.rua.as_str(),
            self.imovel.imovel.cidade.as_str(),
            vistoriador.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn into_dto(self) -> VistoriaDto {
        VistoriaDto {
            id: self.vistoria.id,
            tipo: self.vistoria.tipo,
            data: self.vistoria.data,
            imovel: self.imovel.into_dto(),
            vistoriador: self.vistoriador.map(Pessoa::into_dto),
            comodos: self
                .comodos
                .into_iter()
                .map(ComodoComComponentes::into_dto)
                .collect(),
            fotos: self.fotos.into_iter().map(Foto::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Search and sort options of the inspection listing.
#[derive(Debug, Clone, Default)]
pub struct VistoriaFilter {
    pub search_text: Option<String>,
    pub sort: SortOrder,
}

impl From<PegarVistoriasQuery> for VistoriaFilter {
    fn from(query: PegarVistoriasQuery) -> Self {
        let sort = match query.sort_type.as_deref().map(str::to_lowercase).as_deref() {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        };

        Self {
            search_text: query.search_text.filter(|s| !s.trim().is_empty()),
            sort,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateVistoriaParams {
    pub imovel_id: String,
    pub vistoriador_id: Option<String>,
    pub tipo: TipoVistoria,
}

/// Partial inspection update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateVistoriaParams {
    pub vistoriador_id: Option<String>,
    pub imovel_id: Option<String>,
    pub data: Option<DateTime<Utc>>,
    pub tipo: Option<TipoVistoria>,
}

impl From<UpdateVistoriaDto> for UpdateVistoriaParams {
    fn from(dto: UpdateVistoriaDto) -> Self {
        Self {
            vistoriador_id: dto.vistoriador_id,
            imovel_id: dto.imovel_id,
            data: dto.data,
            tipo: dto.tipo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_descending() {
        let filter = VistoriaFilter::from(PegarVistoriasQuery::default());
        assert_eq!(filter.sort, SortOrder::Desc);
        assert!(filter.search_text.is_none());
    }

    #[test]
    fn sort_accepts_any_case() {
        let filter = VistoriaFilter::from(PegarVistoriasQuery {
            search_text: Some("  ".to_string()),
            sort_type: Some("ASC".to_string()),
        });
        assert_eq!(filter.sort, SortOrder::Asc);
        assert!(filter.search_text.is_none());
    }
}
