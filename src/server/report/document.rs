//! Format-independent content of an inspection report.

use entity::sea_orm_active_enums::TipoVistoria;
use image::ImageFormat;
use sea_orm::ActiveEnum;

use crate::server::{
    error::report::ReportError,
    model::{
        comodo::{export_rank, ComodoComComponentes},
        componente::Componente,
        pessoa::Pessoa,
        vistoria::VistoriaCompleta,
    },
    util::date::format_br_datetime,
};

pub const REPORT_TITLE: &str = "Vistoria de Locação de Imóvel - Residencial";
pub const VISTORIADOR_INDISPONIVEL: &str = "*Nome do Vistoriador Indisponível*";
pub const SEM_COMPONENTES: &str = "Nenhum componente registrado.";

/// Decoded raster image plus the bytes it was decoded from.
#[derive(Debug, Clone)]
pub struct ReportImage {
    pub width: u32,
    pub height: u32,
    /// 8-bit RGB samples, row by row.
    pub rgb: Vec<u8>,
    pub source: Vec<u8>,
    pub extension: &'static str,
}

impl ReportImage {
    pub fn decode(bytes: &[u8]) -> Result<Self, ReportError> {
        let extension = match image::guess_format(bytes)? {
            ImageFormat::Jpeg => "jpeg",
            _ => "png",
        };
        let decoded = image::load_from_memory(bytes)?.to_rgb8();

        Ok(Self {
            width: decoded.width(),
            height: decoded.height(),
            rgb: decoded.into_raw(),
            source: bytes.to_vec(),
            extension,
        })
    }
}

/// One component row of a room table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub componente: String,
    pub estado: String,
    pub cor: String,
    pub material: String,
    pub obs: String,
}

impl ReportRow {
    fn from_componente(componente: &Componente) -> Self {
        Self {
            componente: componente.tipo.clone(),
            estado: componente.estado.to_value(),
            cor: componente.cor.to_value(),
            material: componente.material.to_value(),
            obs: componente.obs.clone(),
        }
    }

    /// Single-line rendering, e.g. `Parede — Estado: NP | Cor: Branco | Material: Tinta | Obs: N/A`.
    pub fn line(&self) -> String {
        format!(
            "{} — Estado: {} | Cor: {} | Material: {} | Obs: {}",
            self.componente, self.estado, self.cor, self.material, self.obs
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub heading: String,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub vistoria_id: String,
    pub title: String,
    pub header_lines: Vec<String>,
    pub sections: Vec<ReportSection>,
    pub fotos: Vec<ReportImage>,
    pub logo: Option<ReportImage>,
}

impl ReportDocument {
    /// Builds the report of an inspection. Images that fail to decode are left out.
    pub fn assemble(vistoria: &VistoriaCompleta, logo: Option<&[u8]>) -> Self {
        let logo = logo.and_then(|bytes| match ReportImage::decode(bytes) {
            Ok(image) => Some(image),
            Err(e) => {
                tracing::warn!("Logo do relatório ignorado: {}", e);
                None
            }
        });

        let fotos = vistoria
            .fotos
            .iter()
            .filter_map(|foto| match ReportImage::decode(&foto.data) {
                Ok(image) => Some(image),
                Err(e) => {
                    tracing::warn!(
                        "Foto {} da vistoria {} ignorada no relatório: {}",
                        foto.id,
                        vistoria.vistoria.id,
                        e
                    );
                    None
                }
            })
            .collect();

        let mut comodos: Vec<&ComodoComComponentes> = vistoria.comodos.iter().collect();
        comodos.sort_by_key(|c| export_rank(&c.comodo));

        let sections = comodos
            .into_iter()
            .map(|c| ReportSection {
                heading: c.comodo.titulo(),
                rows: c
                    .componentes
                    .iter()
                    .map(ReportRow::from_componente)
                    .collect(),
            })
            .collect();

        Self {
            vistoria_id: vistoria.vistoria.id.clone(),
            title: REPORT_TITLE.to_string(),
            header_lines: header_lines(vistoria),
            sections,
            fotos,
            logo,
        }
    }
}

fn header_lines(vistoria: &VistoriaCompleta) -> Vec<String> {
    let tipo = match vistoria.vistoria.tipo {
        TipoVistoria::Entrada => "Entrada",
        TipoVistoria::Saida => "Saída",
    };
    let vistoriador = vistoria
        .vistoriador
        .as_ref()
        .map(Pessoa::full_name)
        .unwrap_or_else(|| VISTORIADOR_INDISPONIVEL.to_string());

    vec![
        format!(
            "Data: {} | Fotos: {} | Tipo: {} | Vistoriador: {}",
            format_br_datetime(vistoria.vistoria.data),
            vistoria.fotos.len(),
            tipo,
            vistoriador
        ),
        format!("Endereço: {}", vistoria.imovel.imovel.endereco_completo()),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use chrono::{TimeZone, Utc};
    use entity::sea_orm_active_enums::{Cor, Estado, Material, TipoComodo, TipoImovel};
    use image::{DynamicImage, ImageFormat, RgbImage};

    use super::*;
    use crate::server::model::{
        comodo::Comodo,
        foto::Foto,
        imovel::{Imovel, ImovelDetalhado},
        vistoria::Vistoria,
    };

    pub(crate) fn png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(width, height))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn comodo(tipo: TipoComodo, numero: i32, componentes: &[&str]) -> ComodoComComponentes {
        let id = format!("{:?}{}", tipo, numero);
        ComodoComComponentes {
            comodo: Comodo {
                id: id.clone(),
                imovel_id: "Imovel1".to_string(),
                tipo,
                numero,
            },
            componentes: componentes
                .iter()
                .enumerate()
                .map(|(i, tipo)| Componente {
                    id: format!("{}Componente{}", id, i),
                    comodo_id: id.clone(),
                    vistoria_id: "Vistoria1".to_string(),
                    tipo: tipo.to_string(),
                    obs: "N/A".to_string(),
                    cor: Cor::Branco,
                    estado: Estado::NP,
                    material: Material::Tinta,
                })
                .collect(),
        }
    }

    fn foto(id: &str, data: Vec<u8>) -> Foto {
        Foto {
            id: id.to_string(),
            mimetype: "image/png".to_string(),
            file_name: None,
            created_at: Utc::now(),
            data,
        }
    }

    /// Inspection with `comodos` and `fotos`, no inspector.
    pub(crate) fn vistoria_completa(
        comodos: Vec<ComodoComComponentes>,
        fotos: Vec<Vec<u8>>,
    ) -> VistoriaCompleta {
        VistoriaCompleta {
            vistoria: Vistoria {
                id: "Vistoria1".to_string(),
                imovel_id: "Imovel1".to_string(),
                vistoriador_id: None,
                tipo: TipoVistoria::Entrada,
                data: Utc.with_ymd_and_hms(2024, 3, 5, 14, 0, 0).unwrap(),
            },
            imovel: ImovelDetalhado {
                imovel: Imovel {
                    id: "Imovel1".to_string(),
                    icm: "ICM1".to_string(),
                    tipo: TipoImovel::Apartamento,
                    rua: "Rua das Flores".to_string(),
                    complemento: "Apto 12".to_string(),
                    numero: 10,
                    bairro: "Centro".to_string(),
                    cidade: "Campinas".to_string(),
                    estado: "SP".to_string(),
                    cep: "13000-000".to_string(),
                },
                proprietarios: vec![],
                vistorias: None,
            },
            vistoriador: None,
            comodos,
            fotos: fotos
                .into_iter()
                .enumerate()
                .map(|(i, data)| foto(&format!("Foto{}", i), data))
                .collect(),
        }
    }

    pub(crate) fn sample() -> VistoriaCompleta {
        vistoria_completa(
            vec![
                comodo(TipoComodo::Quarto, 1, &["Parede", "Piso"]),
                comodo(TipoComodo::Garagem, 1, &["Portão"]),
                comodo(TipoComodo::Sala, 2, &["Parede"]),
                comodo(TipoComodo::Sala, 1, &["Teto"]),
            ],
            vec![png(40, 20)],
        )
    }

    /// Expected: rooms in export order, unlisted types last, numbers ascending.
    #[test]
    fn sorts_rooms_in_export_order() {
        let doc = ReportDocument::assemble(&sample(), None);

        let headings: Vec<&str> = doc.sections.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, vec!["Sala 1", "Sala 2", "Quarto 1", "Garagem 1"]);
    }

    /// Expected: header carries date, photo count, type, placeholder inspector and address.
    #[test]
    fn builds_header_lines() {
        let doc = ReportDocument::assemble(&sample(), None);

        assert_eq!(doc.title, REPORT_TITLE);
        assert_eq!(
            doc.header_lines[0],
            "Data: 05/03/2024 | Fotos: 1 | Tipo: Entrada | Vistoriador: *Nome do Vistoriador Indisponível*"
        );
        assert_eq!(
            doc.header_lines[1],
            "Endereço: Rua das Flores, 10 - Apto 12, Centro, Campinas - SP, 13000-000"
        );
    }

    /// Expected: component line uses the stored enum values.
    #[test]
    fn formats_component_lines() {
        let doc = ReportDocument::assemble(&sample(), None);

        assert_eq!(
            doc.sections[0].rows[0].line(),
            "Teto — Estado: NP | Cor: Branco | Material: Tinta | Obs: N/A"
        );
    }

    /// Expected: undecodable photo is skipped, valid photo and logo are kept.
    #[test]
    fn skips_unreadable_photos() {
        let vistoria = vistoria_completa(vec![], vec![b"not an image".to_vec(), png(8, 6)]);
        let logo = png(10, 10);

        let doc = ReportDocument::assemble(&vistoria, Some(&logo));

        assert_eq!(doc.fotos.len(), 1);
        assert_eq!((doc.fotos[0].width, doc.fotos[0].height), (8, 6));
        assert_eq!(doc.fotos[0].rgb.len(), 8 * 6 * 3);
        assert_eq!(doc.fotos[0].extension, "png");
        assert!(doc.logo.is_some());
    }

    /// Expected: unreadable logo is dropped without failing.
    #[test]
    fn ignores_unreadable_logo() {
        let doc = ReportDocument::assemble(&sample(), Some(b"garbage"));

        assert!(doc.logo.is_none());
    }
}
