use entity::sea_orm_active_enums::{Cor, Estado, Material, TipoComodo};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::comodo::ComodoRepository, model::componente::ComponenteParams};

mod create_with_componentes;
mod delete_with_componentes;
mod latest;
mod numero;

fn componente(tipo: &str) -> ComponenteParams {
    ComponenteParams {
        tipo: tipo.to_string(),
        obs: "N/A".to_string(),
        cor: Cor::Branco,
        estado: Estado::NP,
        material: Material::Tinta,
    }
}
