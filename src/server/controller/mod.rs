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
