//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from the service layer. Operations that
//! write several rows run inside a single transaction.

pub mod aluga;
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

#[cfg(test)]
mod test;
