use sea_orm_migration::{prelude::*, schema::*};

use super::{
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
                    .table(Comodo::Table)
                    .if_not_exists()
                    .col(string(Comodo::Id).primary_key())
                    .col(string(Comodo::ImovelId))
                    .col(string(Comodo::Tipo))
                    .col(integer(Comodo::Numero))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comodo_imovel_id")
                            .from(Comodo::Table, Comodo::ImovelId)
                            .to(Imovel::Table, Imovel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comodo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Comodo {
    Table,
    Id,
    ImovelId,
    Tipo,
    Numero,
}
