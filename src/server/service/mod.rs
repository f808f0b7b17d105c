//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks, uniqueness rules and generated ids
//! - **Orchestration**: Assembling records from several repositories
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod comodo;
pub mod componente;
pub mod endereco;
pub mod foto;
pub mod imovel;
pub mod item;
pub mod pessoa;
pub mod report;
pub mod vinculo;
pub mod vistoria;
