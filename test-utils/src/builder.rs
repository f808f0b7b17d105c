use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{EnderecoPessoa, Pessoa};
///
/// let test = TestBuilder::new()
///     .with_table(EnderecoPessoa)
///     .with_table(Pessoa)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the person tables (`endereco_pessoa`, `pessoa`).
    pub fn with_pessoa_tables(self) -> Self {
        self.with_table(EnderecoPessoa).with_table(Pessoa)
    }

    /// Adds every table needed to work with properties and their links.
    ///
    /// Includes the person tables followed by `imovel`, `vinculo` and `aluga`.
    pub fn with_imovel_tables(self) -> Self {
        self.with_pessoa_tables()
            .with_table(Imovel)
            .with_table(Vinculo)
            .with_table(Aluga)
    }

    /// Adds every table needed for inspections, rooms, components and photos.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_vistoria_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_vistoria_tables(self) -> Self {
        self.with_imovel_tables()
            .with_table(Vistoria)
            .with_table(Comodo)
            .with_table(Componente)
            .with_table(Foto)
    }

    /// Adds the complete schema, including users and catalogue items.
    pub fn with_all_tables(self) -> Self {
        self.with_table(Usuario)
            .with_vistoria_tables()
            .with_table(ItemPrincipal)
            .with_table(ItemAcessorio)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
