use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::endereco::EnderecoRepository, model::endereco::EnderecoParams};

mod create;
mod find_by_cidade;
