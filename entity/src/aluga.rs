use sea_orm::entity::prelude::*;

/// Rental link between a property and a tenant.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aluga")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub imovel_id: String,
    pub inquilino_id: String,
    pub data_entrada: DateTimeUtc,
    pub data_saida: Option<DateTimeUtc>,
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
        from = "Column::InquilinoId",
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
