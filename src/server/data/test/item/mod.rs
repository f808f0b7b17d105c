use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::{data::item::ItemRepository, model::item::ItemKind};

mod crud;
