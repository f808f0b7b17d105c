mod comodo;
mod componente;
mod endereco;
mod foto;
mod imovel;
mod item;
mod pessoa;
mod usuario;
mod vinculo;
mod vistoria;
