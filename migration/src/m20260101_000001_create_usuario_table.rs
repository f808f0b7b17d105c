use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuario::Table)
                    .if_not_exists()
                    .col(string(Usuario::Id).primary_key())
                    .col(string(Usuario::FullName))
                    .col(string_uniq(Usuario::Email))
                    .col(string(Usuario::PasswordHash))
                    .col(date(Usuario::BirthDate))
                    .col(string(Usuario::Tipo))
                    .col(
                        timestamp_with_time_zone(Usuario::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuario::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Usuario {
    Table,
    Id,
    FullName,
    Email,
    PasswordHash,
    BirthDate,
    Tipo,
    CreatedAt,
}
