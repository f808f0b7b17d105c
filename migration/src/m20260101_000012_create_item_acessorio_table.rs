use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ItemAcessorio::Table)
                    .if_not_exists()
                    .col(string(ItemAcessorio::Id).primary_key())
                    .col(string(ItemAcessorio::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ItemAcessorio::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ItemAcessorio {
    Table,
    Id,
    Name,
}
