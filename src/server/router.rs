use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        comodo::{self, COMODO_TAG},
        componente::{self, COMPONENTE_TAG},
        endereco::{self, ENDERECO_TAG},
        foto::{self, FOTO_TAG},
        imovel::{self, IMOVEL_TAG},
        item::{self, ITEM_TAG},
        pessoa::{self, PESSOA_TAG},
        usuario::{self, USUARIO_TAG},
        vinculo::{self, VINCULO_TAG},
        vistoria::{self, VISTORIA_TAG},
    },
    state::AppState,
};

/// Largest accepted request body, sized for photo uploads.
const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

pub const HEALTH_MESSAGE: &str = "Servidor em execução";

#[derive(OpenApi)]
#[openapi(
    info(title = "Vistoria API", description = "Cadastro de imóveis e vistorias de locação"),
    paths(
        usuario::create_user,
        usuario::login,
        usuario::change_permission,
        pessoa::create_pessoa,
        pessoa::update_pessoa,
        pessoa::get_pessoas,
        pessoa::get_pessoas_agrupadas,
        pessoa::get_pessoa,
        pessoa::delete_pessoa,
        pessoa::get_inquilinos,
        pessoa::get_vistoriadores,
        pessoa::get_proprietarios,
        pessoa::get_pessoas_por_endereco,
        endereco::create_endereco,
        endereco::get_enderecos,
        endereco::get_endereco,
        endereco::get_enderecos_por_rua,
        endereco::get_enderecos_por_cidade,
        endereco::get_enderecos_por_cep,
        imovel::create_imovel,
        imovel::update_imovel,
        imovel::delete_imovel,
        imovel::get_imoveis,
        imovel::get_imovel,
        imovel::get_imovel_por_icm,
        imovel::get_imoveis_por_tipo,
        imovel::get_imoveis_por_nome,
        vinculo::create_vinculo,
        vinculo::get_vinculos,
        vinculo::create_aluguel,
        vinculo::get_alugueis,
        vistoria::create_vistoria,
        vistoria::get_vistorias,
        vistoria::get_vistoria,
        vistoria::get_ultima_vistoria,
        vistoria::get_ultima_vistoria_id,
        vistoria::update_vistoria,
        vistoria::delete_vistoria,
        vistoria::gerar_pdf,
        vistoria::gerar_docx,
        comodo::create_comodo,
        comodo::create_comodo_com_componentes,
        comodo::get_comodos,
        comodo::get_ultimo_comodo,
        comodo::get_ultimo_comodo_id,
        comodo::get_ultimos_comodos_componentes,
        comodo::update_comodo,
        comodo::delete_comodo,
        componente::create_componente,
        componente::update_componente,
        componente::delete_componente,
        componente::get_componentes_por_comodo,
        foto::upload_imovel_fotos,
        foto::get_imovel_fotos,
        foto::upload_vistoria_fotos,
        foto::get_vistoria_fotos,
        foto::upload_componente_fotos,
        foto::get_componente_fotos,
        foto::get_foto,
        foto::delete_foto,
        item::create_item_principal,
        item::get_item_principal,
        item::delete_item_principal,
        item::create_item_acessorio,
        item::get_item_acessorio,
        item::delete_item_acessorio,
    ),
    tags(
        (name = USUARIO_TAG, description = "Usuários, login e permissões"),
        (name = PESSOA_TAG, description = "Proprietários, inquilinos e vistoriadores"),
        (name = ENDERECO_TAG, description = "Endereços"),
        (name = IMOVEL_TAG, description = "Imóveis"),
        (name = VINCULO_TAG, description = "Vínculos de propriedade e aluguéis"),
        (name = VISTORIA_TAG, description = "Vistorias e relatórios"),
        (name = COMODO_TAG, description = "Cômodos"),
        (name = COMPONENTE_TAG, description = "Componentes dos cômodos"),
        (name = FOTO_TAG, description = "Fotos"),
        (name = ITEM_TAG, description = "Itens principais e acessórios"),
    )
)]
pub struct ApiDoc;

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        // Usuario
        .route("/User/CreateUser", post(usuario::create_user))
        .route("/User/Login", post(usuario::login))
        .route("/Permission/ChangePermission", put(usuario::change_permission))
        // Pessoa
        .route("/criarPessoa", post(pessoa::create_pessoa))
        .route("/atualizarPessoa", put(pessoa::update_pessoa))
        .route("/buscarPessoas", get(pessoa::get_pessoas))
        .route("/buscarPessoasAgrupadas", get(pessoa::get_pessoas_agrupadas))
        .route("/buscarPessoa/{id}", get(pessoa::get_pessoa))
        .route("/excluirPessoa/{id}", delete(pessoa::delete_pessoa))
        .route("/buscarInquilino", get(pessoa::get_inquilinos))
        .route("/buscarVistoriador", get(pessoa::get_vistoriadores))
        .route("/buscarProprietario", get(pessoa::get_proprietarios))
        .route(
            "/buscarPorEndereco/{cidade}/{estado}",
            get(pessoa::get_pessoas_por_endereco),
        )
        // Endereco
        .route("/Endereco/CreateEndereco", post(endereco::create_endereco))
        .route("/Endereco/PegarEnderecos", get(endereco::get_enderecos))
        .route("/Endereco/PegarEnderecoPorId/{id}", get(endereco::get_endereco))
        .route(
            "/Endereco/PegarEnderecoPorRua/{rua}",
            get(endereco::get_enderecos_por_rua),
        )
        .route(
            "/Endereco/PegarEnderecosPorCidade/{cidade}",
            get(endereco::get_enderecos_por_cidade),
        )
        .route(
            "/Endereco/PegarEnderecosPorCep/{cep}",
            get(endereco::get_enderecos_por_cep),
        )
        // Imovel
        .route("/imovel/criar", post(imovel::create_imovel))
        .route("/imovel/atualizar/{id}", put(imovel::update_imovel))
        .route("/imovel/excluir/{id}", delete(imovel::delete_imovel))
        .route("/imovel/listar", get(imovel::get_imoveis))
        .route("/imovel/por-id/{id}", get(imovel::get_imovel))
        .route("/imovel/por-icm", get(imovel::get_imovel_por_icm))
        .route("/imovel/por-tipo", get(imovel::get_imoveis_por_tipo))
        .route("/imovel/por-nome", get(imovel::get_imoveis_por_nome))
        .route(
            "/imovel/{id}/fotos",
            post(foto::upload_imovel_fotos).get(foto::get_imovel_fotos),
        )
        // Vinculo / Aluga
        .route("/Vinculo/CreateVinculo", post(vinculo::create_vinculo))
        .route("/Vinculo/PegarVinculos", get(vinculo::get_vinculos))
        .route("/Aluga/CreateAluguel", post(vinculo::create_aluguel))
        .route("/Aluga/PegarAluga", get(vinculo::get_alugueis))
        // Vistoria
        .route(
            "/Vistoria/CreateVistoria/{imovel_id}/{usuario_id}",
            post(vistoria::create_vistoria),
        )
        .route("/Vistoria/PegarVistorias", get(vistoria::get_vistorias))
        .route("/Vistoria/PegarVistorias/{id}", get(vistoria::get_vistoria))
        .route("/Vistoria/PegarVistoria/{id}", get(vistoria::get_vistoria))
        .route("/Vistoria/PegarVistoriaC/{id}", get(vistoria::get_vistoria))
        .route("/Vistoria/UltimaVistoria", get(vistoria::get_ultima_vistoria))
        .route(
            "/Vistoria/AtualizarVistoria/{id}",
            put(vistoria::update_vistoria),
        )
        .route(
            "/Vistoria/ExcluirVistoria/{id}",
            delete(vistoria::delete_vistoria),
        )
        .route("/Vistoria/GerarPDF/{id}", get(vistoria::gerar_pdf))
        .route("/Vistoria/GerarDOCX/{id}", get(vistoria::gerar_docx))
        .route(
            "/Vistoria/{id}/fotos",
            post(foto::upload_vistoria_fotos).get(foto::get_vistoria_fotos),
        )
        .route(
            "/obterUltimaVistoriaUsuario",
            get(vistoria::get_ultima_vistoria_id),
        )
        // Comodo; parameter names are shared by position
        .route("/Comodo/UltimoComodo", get(comodo::get_ultimo_comodo))
        .route("/Comodo/{id}/CriarComodo", post(comodo::create_comodo))
        .route(
            "/Comodo/{id}/{inner_id}/CriarComodoComComponentes",
            post(comodo::create_comodo_com_componentes),
        )
        .route("/Comodo/{id}/{inner_id}", put(comodo::update_comodo))
        .route("/Comodo/{id}", delete(comodo::delete_comodo))
        .route(
            "/Comodo/{id}/UltimoComodoComponente",
            get(comodo::get_ultimos_comodos_componentes),
        )
        .route("/comodoget/{imovel_id}", get(comodo::get_comodos))
        .route("/obterUltimoComodoUsuario", get(comodo::get_ultimo_comodo_id))
        // Componente
        .route(
            "/{vistoria_id}/{comodo_id}/criarComponente",
            post(componente::create_componente),
        )
        .route(
            "/atualizarComponente/{componente_id}/{comodo_id}",
            put(componente::update_componente),
        )
        .route(
            "/excluirComponente/{id}",
            delete(componente::delete_componente),
        )
        .route(
            "/buscarComponentesPorComodo/{comodo_id}",
            get(componente::get_componentes_por_comodo),
        )
        .route(
            "/componente/{id}/fotos",
            post(foto::upload_componente_fotos).get(foto::get_componente_fotos),
        )
        // Foto
        .route("/fotos/{id}", get(foto::get_foto).delete(foto::delete_foto))
        // Item
        .route("/criarItemPrincipal", post(item::create_item_principal))
        .route("/buscarItemPrincipal/{id}", get(item::get_item_principal))
        .route("/excluirItemPrincipal/{id}", delete(item::delete_item_principal))
        .route("/criarItemAcessorio", post(item::create_item_acessorio))
        .route("/buscarItemAcessorio/{id}", get(item::get_item_acessorio))
        .route("/excluirItemAcessorio/{id}", delete(item::delete_item_acessorio))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Complete application: routes, state and the HTTP layers.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
