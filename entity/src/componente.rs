use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{Cor, Estado, Material};

/// One inspected item of a room, recorded during a specific inspection.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "componente")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub comodo_id: String,
    pub vistoria_id: String,
    pub tipo: String,
    pub obs: String,
    pub cor: Cor,
    pub estado: Estado,
    pub material: Material,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::comodo::Entity",
        from = "Column::ComodoId",
        to = "super::comodo::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Comodo,
    #[sea_orm(
        belongs_to = "super::vistoria::Entity",
        from = "Column::VistoriaId",
        to = "super::vistoria::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vistoria,
}

impl Related<super::comodo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comodo.def()
    }
}

impl Related<super::vistoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vistoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
