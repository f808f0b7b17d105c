//! Shared test setup for the vistoria workspace.
//!
//! Tests open a private in-memory SQLite database through [`builder::TestBuilder`],
//! create only the tables they need, and insert records with the [`factory`] builders.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_rooms() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_vistoria_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let imovel = factory::create_imovel(db).await?;
//!     factory::create_comodo(db, &imovel.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
