//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod comodo;
pub mod componente;
pub mod endereco;
pub mod foto;
pub mod imovel;
pub mod item;
pub mod pessoa;
pub mod usuario;
pub mod vinculo;
pub mod vistoria;
