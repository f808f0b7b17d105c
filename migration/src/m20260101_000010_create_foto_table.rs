use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000004_create_imovel_table::Imovel,
    m20260101_000007_create_vistoria_table::Vistoria,
    m20260101_000009_create_componente_table::Componente,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Foto::Table)
                    .if_not_exists()
                    .col(string(Foto::Id).primary_key())
                    .col(string_null(Foto::ImovelId))
                    .col(string_null(Foto::VistoriaId))
                    .col(string_null(Foto::ComponenteId))
                    .col(string(Foto::Mimetype))
                    .col(string_null(Foto::FileName))
                    .col(blob(Foto::Data))
                    .col(
                        timestamp_with_time_zone(Foto::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_foto_imovel_id")
                            .from(Foto::Table, Foto::ImovelId)
                            .to(Imovel::Table, Imovel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_foto_vistoria_id")
                            .from(Foto::Table, Foto::VistoriaId)
                            .to(Vistoria::Table, Vistoria::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_foto_componente_id")
                            .from(Foto::Table, Foto::ComponenteId)
                            .to(Componente::Table, Componente::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Foto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Foto {
    Table,
    Id,
    ImovelId,
    VistoriaId,
    ComponenteId,
    Mimetype,
    FileName,
    Data,
    CreatedAt,
}
