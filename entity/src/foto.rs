use sea_orm::entity::prelude::*;

/// Photo bytes stored inline. Exactly one of the owner columns is set.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "foto")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub imovel_id: Option<String>,
    pub vistoria_id: Option<String>,
    pub componente_id: Option<String>,
    pub mimetype: String,
    pub file_name: Option<String>,
    #[sea_orm(column_type = "Blob")]
    pub data: Vec<u8>,
    pub created_at: DateTimeUtc,
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
        belongs_to = "super::vistoria::Entity",
        from = "Column::VistoriaId",
        to = "super::vistoria::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Vistoria,
    #[sea_orm(
        belongs_to = "super::componente::Entity",
        from = "Column::ComponenteId",
        to = "super::componente::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Componente,
}

impl ActiveModelBehavior for ActiveModel {}
