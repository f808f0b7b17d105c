use entity::sea_orm_active_enums::{Cor, Estado, Material};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::componente::ComponenteRepository, model::componente::ComponenteParams};

mod crud;
