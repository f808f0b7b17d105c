use chrono::{TimeZone, Utc};
use entity::sea_orm_active_enums::RolePessoa;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{aluga::AlugaRepository, vinculo::VinculoRepository},
    model::vinculo::CreateAluguelParams,
};

mod create;
