use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "endereco_pessoa")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
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
    #[sea_orm(has_many = "super::pessoa::Entity")]
    Pessoa,
}

impl Related<super::pessoa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pessoa.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
