use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000003_create_pessoa_table::Pessoa,
    m20260101_000004_create_imovel_table::Imovel,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vistoria::Table)
                    .if_not_exists()
                    .col(string(Vistoria::Id).primary_key())
                    .col(string(Vistoria::ImovelId))
                    .col(string_null(Vistoria::VistoriadorId))
                    .col(string(Vistoria::Tipo))
                    .col(
                        timestamp_with_time_zone(Vistoria::Data)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vistoria_imovel_id")
                            .from(Vistoria::Table, Vistoria::ImovelId)
                            .to(Imovel::Table, Imovel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vistoria_vistoriador_id")
                            .from(Vistoria::Table, Vistoria::VistoriadorId)
                            .to(Pessoa::Table, Pessoa::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vistoria::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vistoria {
    Table,
    Id,
    ImovelId,
    VistoriadorId,
    Tipo,
    Data,
}
