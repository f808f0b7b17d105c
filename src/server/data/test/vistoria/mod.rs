use chrono::{TimeZone, Utc};
use entity::sea_orm_active_enums::{RolePessoa, TipoVistoria};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::vistoria::VistoriaRepository,
    model::vistoria::{CreateVistoriaParams, SortOrder, UpdateVistoriaParams},
};

mod create;
mod get_all;
mod update;
