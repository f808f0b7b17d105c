use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EnderecoPessoa::Table)
                    .if_not_exists()
                    .col(string(EnderecoPessoa::Id).primary_key())
                    .col(string(EnderecoPessoa::Rua))
                    .col(string(EnderecoPessoa::Complemento))
                    .col(integer(EnderecoPessoa::Numero))
                    .col(string(EnderecoPessoa::Bairro))
                    .col(string(EnderecoPessoa::Cidade))
                    .col(string(EnderecoPessoa::Estado))
                    .col(string(EnderecoPessoa::Cep))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EnderecoPessoa::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EnderecoPessoa {
    Table,
    Id,
    Rua,
    Complemento,
    Numero,
    Bairro,
    Cidade,
    Estado,
    Cep,
}
