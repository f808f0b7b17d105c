use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TipoVistoria;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vistoria")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub imovel_id: String,
    pub vistoriador_id: Option<String>,
    pub tipo: TipoVistoria,
    pub data: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::imovel::Entity",
        from = "Column::ImovelId",
        to = "super::imovel::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Imovel,
    #[sea_orm(
        belongs_to = "super::pessoa::Entity",
        from = "Column::VistoriadorId",
        to = "super::pessoa::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Pessoa,
    #[sea_orm(has_many = "super::componente::Entity")]
    Componente,
}

impl Related<super::imovel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Imovel.def()
    }
}

impl Related<super::pessoa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pessoa.def()
    }
}

impl Related<super::componente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Componente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
