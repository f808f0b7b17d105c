pub use super::aluga::Entity as Aluga;
pub use super::comodo::Entity as Comodo;
pub use super::componente::Entity as Componente;
pub use super::endereco_pessoa::Entity as EnderecoPessoa;
pub use super::foto::Entity as Foto;
pub use super::imovel::Entity as Imovel;
pub use super::item_acessorio::Entity as ItemAcessorio;
pub use super::item_principal::Entity as ItemPrincipal;
pub use super::pessoa::Entity as Pessoa;
pub use super::usuario::Entity as Usuario;
pub use super::vinculo::Entity as Vinculo;
pub use super::vistoria::Entity as Vistoria;
