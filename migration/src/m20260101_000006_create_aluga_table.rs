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
                    .table(Aluga::Table)
                    .if_not_exists()
                    .col(string(Aluga::Id).primary_key())
                    .col(string(Aluga::ImovelId))
                    .col(string(Aluga::InquilinoId))
                    .col(
                        timestamp_with_time_zone(Aluga::DataEntrada)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Aluga::DataSaida))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aluga_imovel_id")
                            .from(Aluga::Table, Aluga::ImovelId)
                            .to(Imovel::Table, Imovel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aluga_inquilino_id")
                            .from(Aluga::Table, Aluga::InquilinoId)
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
            .drop_table(Table::drop().table(Aluga::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Aluga {
    Table,
    Id,
    ImovelId,
    InquilinoId,
    DataEntrada,
    DataSaida,
}
