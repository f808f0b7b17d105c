use chrono::NaiveDate;
use entity::sea_orm_active_enums::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::usuario::UsuarioRepository, model::usuario::CreateUsuarioParams};

mod create;
mod find_by_email;
mod set_tipo;
