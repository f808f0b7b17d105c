pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_usuario_table;
mod m20260101_000002_create_endereco_pessoa_table;
mod m20260101_000003_create_pessoa_table;
mod m20260101_000004_create_imovel_table;
mod m20260101_000005_create_vinculo_table;
mod m20260101_000006_create_aluga_table;
mod m20260101_000007_create_vistoria_table;
mod m20260101_000008_create_comodo_table;
mod m20260101_000009_create_componente_table;
mod m20260101_000010_create_foto_table;
mod m20260101_000011_create_item_principal_table;
mod m20260101_000012_create_item_acessorio_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_usuario_table::Migration),
            Box::new(m20260101_000002_create_endereco_pessoa_table::Migration),
            Box::new(m20260101_000003_create_pessoa_table::Migration),
            Box::new(m20260101_000004_create_imovel_table::Migration),
            Box::new(m20260101_000005_create_vinculo_table::Migration),
            Box::new(m20260101_000006_create_aluga_table::Migration),
            Box::new(m20260101_000007_create_vistoria_table::Migration),
            Box::new(m20260101_000008_create_comodo_table::Migration),
            Box::new(m20260101_000009_create_componente_table::Migration),
            Box::new(m20260101_000010_create_foto_table::Migration),
            Box::new(m20260101_000011_create_item_principal_table::Migration),
            Box::new(m20260101_000012_create_item_acessorio_table::Migration),
        ]
    }
}
