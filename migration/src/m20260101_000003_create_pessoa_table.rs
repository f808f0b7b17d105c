use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000002_create_endereco_pessoa_table::EnderecoPessoa,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pessoa::Table)
                    .if_not_exists()
                    .col(string(Pessoa::Id).primary_key())
                    .col(string(Pessoa::Cpf))
                    .col(string(Pessoa::FirstName))
                    .col(string_null(Pessoa::MiddleName))
                    .col(string_null(Pessoa::LastName))
                    .col(string_null(Pessoa::Email).unique_key())
                    .col(string(Pessoa::Tel))
                    .col(date(Pessoa::BirthDate))
                    .col(string(Pessoa::Tipo))
                    .col(string(Pessoa::EnderecoId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pessoa_endereco_id")
                            .from(Pessoa::Table, Pessoa::EnderecoId)
                            .to(EnderecoPessoa::Table, EnderecoPessoa::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pessoa::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pessoa {
    Table,
    Id,
    Cpf,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Tel,
    BirthDate,
    Tipo,
    EnderecoId,
}
