//! Room domain models and the preset component checklists.

use entity::sea_orm_active_enums::{Cor, Estado, Material, TipoComodo};

use crate::{
    model::comodo::ComodoDto,
    server::model::componente::{Componente, ComponenteParams},
};

/// Observation stored on preset components until the inspector fills them in.
pub const PRESET_OBS: &str = "N/A";

/// Room row without components.
#[derive(Debug, Clone, PartialEq)]
pub struct Comodo {
    pub id: String,
    pub imovel_id: String,
    pub tipo: TipoComodo,
    pub numero: i32,
}

impl Comodo {
    pub fn from_entity(entity: entity::comodo::Model) -> Self {
        Self {
            id: entity.id,
            imovel_id: entity.imovel_id,
            tipo: entity.tipo,
            numero: entity.numero,
        }
    }

    /// Room without its components.
    pub fn into_dto(self) -> ComodoDto {
        ComodoComComponentes {
            comodo: self,
            componentes: Vec::new(),
        }
        .into_dto()
    }

    /// Heading used in reports, e.g. `Banheiro Social 2`.
    pub fn titulo(&self) -> String {
        format!("{} {}", tipo_label(self.tipo), self.numero)
    }
}

/// Room with the components recorded for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ComodoComComponentes {
    pub comodo: Comodo,
    pub componentes: Vec<Componente>,
}

impl ComodoComComponentes {
    pub fn into_dto(self) -> ComodoDto {
        ComodoDto {
            id: self.comodo.id,
            imovel_id: self.comodo.imovel_id,
            tipo: self.comodo.tipo,
            numero: self.comodo.numero,
            componentes: self
                .componentes
                .into_iter()
                .map(Componente::into_dto)
                .collect(),
        }
    }
}

/// Display name of a room type.
pub fn tipo_label(tipo: TipoComodo) -> &'static str {
    match tipo {
        TipoComodo::Sala => "Sala",
        TipoComodo::Corredor => "Corredor",
        TipoComodo::BanheiroSocial => "Banheiro Social",
        TipoComodo::Banheiro => "Banheiro",
        TipoComodo::Quarto => "Quarto",
        TipoComodo::Copa => "Copa",
        TipoComodo::Cozinha => "Cozinha",
        TipoComodo::Servico => "Serviço",
        TipoComodo::BanheiroServico => "Banheiro de Serviço",
        TipoComodo::Dispensa => "Dispensa",
        TipoComodo::Sacada => "Sacada",
        TipoComodo::Escada => "Escada",
        TipoComodo::Porao => "Porão",
        TipoComodo::Garagem => "Garagem",
        TipoComodo::Outro => "Outro",
    }
}

/// Order in which room types appear in exported reports.
pub const EXPORT_ORDER: [TipoComodo; 12] = [
    TipoComodo::Sala,
    TipoComodo::Corredor,
    TipoComodo::BanheiroSocial,
    TipoComodo::Banheiro,
    TipoComodo::Quarto,
    TipoComodo::Copa,
    TipoComodo::Cozinha,
    TipoComodo::Servico,
    TipoComodo::BanheiroServico,
    TipoComodo::Dispensa,
    TipoComodo::Sacada,
    TipoComodo::Outro,
];

/// Sort key placing listed types first, remaining types after, then by room number.
pub fn export_rank(comodo: &Comodo) -> (usize, i32) {
    let position = EXPORT_ORDER
        .iter()
        .position(|tipo| *tipo == comodo.tipo)
        .unwrap_or(EXPORT_ORDER.len());

    (position, comodo.numero)
}

const SALA_QUARTO_PRESET: [&str; 10] = [
    "Parede",
    "Teto",
    "Base",
    "Portas e Portais",
    "Maçanetas e Fechaduras",
    "Janelas",
    "Interruptores e Tomadas",
    "Piso",
    "Rodapé",
    "Obs",
];

const BANHEIRO_PRESET: [&str; 14] = [
    "Parede",
    "Teto",
    "Base",
    "Portas e Portais",
    "Maçanetas e Fechaduras",
    "Janelas",
    "Piso",
    "Pia",
    "Torneira",
    "Armário",
    "Vaso Sanitário",
    "Descarga",
    "Acessórios",
    "Obs",
];

const COZINHA_PRESET: [&str; 7] = ["Teto", "Parede", "Base", "Porta", "Janela", "Tomadas", "Pia"];

const COPA_PRESET: [&str; 8] = [
    "Teto", "Parede", "Base", "Rodapé", "Porta", "Janela", "Tomadas", "Pia",
];

/// Component checklist inserted when a room is created with presets.
///
/// Types without a checklist get an empty list.
pub fn preset_componentes(tipo: TipoComodo) -> Vec<ComponenteParams> {
    let (nomes, banheiro): (&[&str], bool) = match tipo {
        TipoComodo::Cozinha => (COZINHA_PRESET.as_slice(), false),
        TipoComodo::Copa => (COPA_PRESET.as_slice(), false),
        TipoComodo::Quarto | TipoComodo::Sala | TipoComodo::Corredor | TipoComodo::Sacada => {
            (SALA_QUARTO_PRESET.as_slice(), false)
        }
        TipoComodo::Banheiro | TipoComodo::BanheiroSocial => (BANHEIRO_PRESET.as_slice(), true),
        _ => return Vec::new(),
    };

    nomes
        .iter()
        .map(|nome| ComponenteParams {
            tipo: nome.to_string(),
            obs: PRESET_OBS.to_string(),
            cor: Cor::Branco,
            estado: Estado::NP,
            material: preset_material(nome, banheiro),
        })
        .collect()
}

fn preset_material(nome: &str, banheiro: bool) -> Material {
    match nome {
        "Teto" | "Parede" => Material::Tinta,
        "Base" if banheiro => Material::Tinta,
        _ => Material::Outro,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comodo(tipo: TipoComodo, numero: i32) -> Comodo {
        Comodo {
            id: format!("{:?}{}", tipo, numero),
            imovel_id: "Imovel1".to_string(),
            tipo,
            numero,
        }
    }

    #[test]
    fn kitchen_preset_paints_ceiling_and_walls() {
        let preset = preset_componentes(TipoComodo::Cozinha);

        assert_eq!(preset.len(), 7);
        assert_eq!(preset[0].tipo, "Teto");
        assert_eq!(preset[0].material, Material::Tinta);
        assert_eq!(preset[2].tipo, "Base");
        assert_eq!(preset[2].material, Material::Outro);
        assert!(preset.iter().all(|c| c.obs == PRESET_OBS && c.estado == Estado::NP));
    }

    #[test]
    fn copa_adds_skirting_board() {
        let preset = preset_componentes(TipoComodo::Copa);
        assert_eq!(preset.len(), 8);
        assert_eq!(preset[3].tipo, "Rodapé");
    }

    #[test]
    fn bathroom_base_is_painted() {
        let preset = preset_componentes(TipoComodo::BanheiroSocial);

        assert_eq!(preset.len(), 14);
        let base = preset.iter().find(|c| c.tipo == "Base").unwrap();
        assert_eq!(base.material, Material::Tinta);
    }

    #[test]
    fn other_rooms_have_no_preset() {
        assert!(preset_componentes(TipoComodo::Garagem).is_empty());
        assert!(preset_componentes(TipoComodo::Outro).is_empty());
    }

    #[test]
    fn export_rank_orders_known_types_first() {
        let mut comodos = vec![
            comodo(TipoComodo::Garagem, 1),
            comodo(TipoComodo::Cozinha, 1),
            comodo(TipoComodo::Quarto, 2),
            comodo(TipoComodo::Sala, 1),
            comodo(TipoComodo::Quarto, 1),
        ];
        comodos.sort_by_key(export_rank);

        let titulos: Vec<String> = comodos.iter().map(Comodo::titulo).collect();
        assert_eq!(
            titulos,
            vec!["Sala 1", "Quarto 1", "Quarto 2", "Cozinha 1", "Garagem 1"]
        );
    }
}
