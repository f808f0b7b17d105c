use chrono::NaiveDate;
use entity::sea_orm_active_enums::RolePessoa;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::pessoa::PessoaRepository,
    model::{
        endereco::EnderecoParams,
        pessoa::{CreatePessoaParams, UpdatePessoaParams},
    },
    util::parse::split_full_name,
};

mod create;
mod delete;
mod find_by_cidade_estado;
mod find_by_tipo;
mod update;

fn endereco_params(cidade: &str) -> EnderecoParams {
    EnderecoParams {
        rua: "Rua A".to_string(),
        complemento: "Apto 3".to_string(),
        numero: 50,
        bairro: "Centro".to_string(),
        cidade: cidade.to_string(),
        estado: "SP".to_string(),
        cep: "13000-000".to_string(),
    }
}

fn create_params(full_name: &str, tipo: RolePessoa) -> CreatePessoaParams {
    CreatePessoaParams {
        cpf: "12345678900".to_string(),
        nome: split_full_name(full_name).unwrap(),
        tel: "19988887777".to_string(),
        email: None,
        birth_date: NaiveDate::from_ymd_opt(1985, 3, 2).unwrap(),
        tipo,
        endereco: endereco_params("Campinas"),
    }
}
