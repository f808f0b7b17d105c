//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for quick default creation. Factories that need a parent record take its id
//! in `new`, except `PessoaFactory`, which inserts its own address when none is given.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let imovel = factory::create_imovel(&db).await?;
//!     let vistoria = factory::create_vistoria(&db, &imovel.id).await?;
//!
//!     // Create with all dependencies
//!     let (imovel, vistoria, comodo) =
//!         factory::helpers::create_vistoria_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let pessoa = factory::pessoa::PessoaFactory::new(&db)
//!     .tipo(RolePessoa::Proprietario)
//!     .email("dono@example.com")
//!     .build()
//!     .await?;
//! ```

pub mod comodo;
pub mod componente;
pub mod endereco_pessoa;
pub mod foto;
pub mod helpers;
pub mod imovel;
pub mod pessoa;
pub mod usuario;
pub mod vistoria;

pub use comodo::create_comodo;
pub use componente::create_componente;
pub use endereco_pessoa::create_endereco;
pub use foto::create_foto_for_vistoria;
pub use imovel::create_imovel;
pub use pessoa::create_pessoa;
pub use usuario::create_usuario;
pub use vistoria::create_vistoria;
