use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::RolePessoa;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "pessoa")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub cpf: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    #[sea_orm(unique)]
    pub email: Option<String>,
    pub tel: String,
    pub birth_date: Date,
    pub tipo: RolePessoa,
    pub endereco_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::endereco_pessoa::Entity",
        from = "Column::EnderecoId",
        to = "super::endereco_pessoa::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    EnderecoPessoa,
}

impl Related<super::endereco_pessoa::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnderecoPessoa.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
