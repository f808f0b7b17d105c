//! SeaORM entity models for the inspection schema.
//!
//! One module per table plus the shared active enums. Relations are declared on the
//! owning side (`belongs_to`) so schema generation in tests produces the same foreign
//! keys as the migrations.

pub mod prelude;

pub mod aluga;
pub mod comodo;
pub mod componente;
pub mod endereco_pessoa;
pub mod foto;
pub mod imovel;
pub mod item_acessorio;
pub mod item_principal;
pub mod pessoa;
pub mod sea_orm_active_enums;
pub mod usuario;
pub mod vinculo;
pub mod vistoria;
