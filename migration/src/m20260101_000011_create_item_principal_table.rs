use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemPrincipal::Table)
                    .if_not_exists()
                    .col(string(ItemPrincipal::Id).primary_key())
                    .col(string(ItemPrincipal::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemPrincipal::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemPrincipal {
    Table,
    Id,
    Name,
}
