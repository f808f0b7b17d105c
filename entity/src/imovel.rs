use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::TipoImovel;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "imovel")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub icm: String,
    pub tipo: TipoImovel,
    pub rua: String,
    pub complemento: String,
    pub numero: i32,
    pub bairro: String,
    pub cidade: String,
    pub estado: String,
    pub cep: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aluga::Entity")]
    Aluga,
    #[sea_orm(has_many = "super::comodo::Entity")]
    Comodo,
    #[sea_orm(has_many = "super::vinculo::Entity")]
    Vinculo,
    #[sea_orm(has_many = "super::vistoria::Entity")]
    Vistoria,
}

impl Related<super::aluga::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aluga.def()
    }
}

impl Related<super::comodo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comodo.def()
    }
}

impl Related<super::vinculo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vinculo.def()
    }
}

impl Related<super::vistoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vistoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
