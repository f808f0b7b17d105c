use sea_orm::entity::prelude::*;

/// Ownership link between a property and a person of type `Proprietario`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vinculo")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub imovel_id: String,
    pub proprietario_id: String,
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
        from = "Column::ProprietarioId",
        to = "super::pessoa::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Pessoa,
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

impl ActiveModelBehavior for ActiveModel {}
