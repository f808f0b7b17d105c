//! String-backed enums shared by the entity models.
//!
//! Every enum is stored as its variant name in a text column, which keeps the
//! stored values readable and identical to the JSON representation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Application user role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Role {
    #[sea_orm(string_value = "Adm")]
    Adm,
    #[sea_orm(string_value = "User")]
    User,
}

/// Role a registered person plays in a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum RolePessoa {
    #[sea_orm(string_value = "Inquilino")]
    Inquilino,
    #[sea_orm(string_value = "Proprietario")]
    Proprietario,
    #[sea_orm(string_value = "Vistoriador")]
    Vistoriador,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TipoImovel {
    #[sea_orm(string_value = "Casa")]
    Casa,
    #[sea_orm(string_value = "Apartamento")]
    Apartamento,
    #[sea_orm(string_value = "Terreno")]
    Terreno,
    #[sea_orm(string_value = "Lote")]
    Lote,
    #[sea_orm(string_value = "Ponto")]
    Ponto,
    #[sea_orm(string_value = "Rural")]
    Rural,
}

/// Move-in or move-out inspection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TipoVistoria {
    #[default]
    #[sea_orm(string_value = "Entrada")]
    Entrada,
    #[sea_orm(string_value = "Saida")]
    Saida,
}

/// Room type. Declaration order has no meaning; report ordering lives in the
/// report module.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum TipoComodo {
    #[sea_orm(string_value = "Sala")]
    Sala,
    #[sea_orm(string_value = "Corredor")]
    Corredor,
    #[sea_orm(string_value = "BanheiroSocial")]
    BanheiroSocial,
    #[sea_orm(string_value = "Banheiro")]
    Banheiro,
    #[sea_orm(string_value = "Quarto")]
    Quarto,
    #[sea_orm(string_value = "Copa")]
    Copa,
    #[sea_orm(string_value = "Cozinha")]
    Cozinha,
    #[sea_orm(string_value = "Servico")]
    Servico,
    #[sea_orm(string_value = "BanheiroServico")]
    BanheiroServico,
    #[sea_orm(string_value = "Dispensa")]
    Dispensa,
    #[sea_orm(string_value = "Sacada")]
    Sacada,
    #[sea_orm(string_value = "Escada")]
    Escada,
    #[sea_orm(string_value = "Porao")]
    Porao,
    #[sea_orm(string_value = "Garagem")]
    Garagem,
    #[sea_orm(string_value = "Outro")]
    Outro,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Cor {
    #[sea_orm(string_value = "Branco")]
    Branco,
    #[sea_orm(string_value = "Preto")]
    Preto,
    #[sea_orm(string_value = "Cinza")]
    Cinza,
    #[sea_orm(string_value = "Vermelho")]
    Vermelho,
    #[sea_orm(string_value = "Azul")]
    Azul,
    #[sea_orm(string_value = "Verde")]
    Verde,
    #[sea_orm(string_value = "Amarelo")]
    Amarelo,
    #[sea_orm(string_value = "Marrom")]
    Marrom,
    #[sea_orm(string_value = "Laranja")]
    Laranja,
    #[sea_orm(string_value = "Roxo")]
    Roxo,
    #[sea_orm(string_value = "Rosa")]
    Rosa,
    #[sea_orm(string_value = "Outro")]
    Outro,
}

/// Condition code of an inspected component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Estado {
    #[sea_orm(string_value = "IP")]
    IP,
    #[sea_orm(string_value = "IA")]
    IA,
    #[sea_orm(string_value = "NP")]
    NP,
    #[sea_orm(string_value = "NA")]
    NA,
    #[sea_orm(string_value = "UP")]
    UP,
    #[sea_orm(string_value = "UA")]
    UA,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Material {
    #[sea_orm(string_value = "Madeira")]
    Madeira,
    #[sea_orm(string_value = "Alvenaria")]
    Alvenaria,
    #[sea_orm(string_value = "Metal")]
    Metal,
    #[sea_orm(string_value = "Vidro")]
    Vidro,
    #[sea_orm(string_value = "Tinta")]
    Tinta,
    #[sea_orm(string_value = "Outro")]
    Outro,
}
