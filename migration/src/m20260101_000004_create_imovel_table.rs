use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Imovel::Table)
                    .if_not_exists()
                    .col(string(Imovel::Id).primary_key())
                    .col(string_uniq(Imovel::Icm))
                    .col(string(Imovel::Tipo))
                    .col(string(Imovel::Rua))
                    .col(string(Imovel::Complemento))
                    .col(integer(Imovel::Numero))
                    .col(string(Imovel::Bairro))
                    .col(string(Imovel::Cidade))
                    .col(string(Imovel::Estado))
                    .col(string(Imovel::Cep))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Imovel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Imovel {
    Table,
    Id,
    Icm,
    Tipo,
    Rua,
    Complemento,
    Numero,
    Bairro,
    Cidade,
    Estado,
    Cep,
}
