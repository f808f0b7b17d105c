use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Database handle for one test.
///
/// Every context owns its own in-memory SQLite database, so tests never see each
/// other's records.
pub struct TestContext {
    /// Connection opened on first use; `TestBuilder::build` always opens it.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Returns the connection, opening the in-memory database if needed.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        let db = match self.db.take() {
            Some(db) => db,
            None => Database::connect(MEMORY_DATABASE_URL).await?,
        };

        Ok(self.db.insert(db))
    }

    /// Runs the CREATE TABLE statements in order. Parents must come before the tables
    /// holding foreign keys to them.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
