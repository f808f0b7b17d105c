use entity::sea_orm_active_enums::{RolePessoa, TipoImovel};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{imovel::ImovelRepository, vinculo::VinculoRepository},
    model::imovel::ImovelParams,
};

mod create_with_proprietario;
mod delete;
mod find;
mod update;

fn params(icm: &str) -> ImovelParams {
    ImovelParams {
        icm: icm.to_string(),
        tipo: TipoImovel::Apartamento,
        rua: "Avenida Brasil".to_string(),
        complemento: "Bloco B".to_string(),
        numero: 900,
        bairro: "Centro".to_string(),
        cidade: "Campinas".to_string(),
        estado: "SP".to_string(),
        cep: "13010-000".to_string(),
    }
}
