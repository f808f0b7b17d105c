use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000007_create_vistoria_table::Vistoria,
    m20260101_000008_create_comodo_table::Comodo,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Componente::Table)
                    .if_not_exists()
                    .col(string(Componente::Id).primary_key())
                    .col(string(Componente::ComodoId))
                    .col(string(Componente::VistoriaId))
                    .col(string(Componente::Tipo))
                    .col(text(Componente::Obs))
                    .col(string(Componente::Cor))
                    .col(string(Componente::Estado))
                    .col(string(Componente::Material))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_componente_comodo_id")
                            .from(Componente::Table, Componente::ComodoId)
                            .to(Comodo::Table, Comodo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_componente_vistoria_id")
                            .from(Componente::Table, Componente::VistoriaId)
                            .to(Vistoria::Table, Vistoria::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Componente::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Componente {
    Table,
    Id,
    ComodoId,
    VistoriaId,
    Tipo,
    Obs,
    Cor,
    Estado,
    Material,
}
