use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::foto::FotoRepository,
    model::foto::{FotoOwner, NovaFoto},
};

mod create_many;
