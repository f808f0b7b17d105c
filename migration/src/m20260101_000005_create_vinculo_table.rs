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
                    .table(Vinculo::Table)
                    .if_not_exists()
                    .col(string(Vinculo::Id).primary_key())
                    .col(string(Vinculo::ImovelId))
                    .col(string(Vinculo::ProprietarioId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vinculo_imovel_id")
                            .from(Vinculo::Table, Vinculo::ImovelId)
                            .to(Imovel::Table, Imovel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vinculo_proprietario_id")
                            .from(Vinculo::Table, Vinculo::ProprietarioId)
                            .to(Pessoa::Table, Pessoa::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vinculo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vinculo {
    Table,
    Id,
    ImovelId,
    ProprietarioId,
}
