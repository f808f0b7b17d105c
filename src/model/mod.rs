//! Request and response DTOs exchanged over the HTTP API.
//!
//! JSON keys are camelCase. Enum fields reuse the entity enums and serialize as their
//! variant name, matching the values stored in the database.

pub mod api;
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
