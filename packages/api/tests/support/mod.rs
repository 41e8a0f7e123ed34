//! In-process stand-in for the Home Control API.
//!
//! Implements the same routes, JSON shapes, pagination headers and error
//! bodies as the real server, backed by vectors behind a mutex.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use api::{
    ApiClient, CategoriaCreateDto, CategoriaResponseDto, CategoriaUpdateDto, Decimal,
    TipoTransacao, TotalPorCategoriaDto, TotalPorUsuarioDto, TransacaoCreateDto,
    TransacaoResponseDto, UsuarioCreateDto, UsuarioResponseDto, UsuarioUpdateDto,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Default)]
pub struct Db {
    pub categorias: Vec<CategoriaResponseDto>,
    pub usuarios: Vec<UsuarioResponseDto>,
    pub transacoes: Vec<TransacaoResponseDto>,
    next_id: u64,
    next_codigo: i64,
}

impl Db {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

pub type Shared = Arc<Mutex<Db>>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageParams {
    page_number: u32,
    page_size: u32,
    descricao: Option<String>,
    termo: Option<String>,
    filtro: Option<String>,
}

/// Start the mock on an ephemeral port and return a client pointed at it.
pub async fn spawn_server() -> (ApiClient, Shared) {
    let db: Shared = Arc::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    let app = router(db.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::new(&api::ApiConfig {
        base_url: format!("http://{addr}/api/v1"),
    });
    (client, db)
}

fn router(db: Shared) -> Router {
    let api = Router::new()
        .route("/categorias", get(listar_categorias))
        .route("/categorias/buscar", get(buscar_categorias))
        .route("/categorias/criar", post(criar_categoria))
        .route("/categorias/atualizar/{id}", put(atualizar_categoria))
        .route(
            "/categorias/excluir/{id}",
            axum::routing::delete(excluir_categoria),
        )
        .route("/categorias/{id}", get(obter_categoria))
        .route("/usuarios", get(listar_usuarios).post(criar_usuario))
        .route("/usuarios/buscar", get(buscar_usuarios))
        .route(
            "/usuarios/{id}",
            get(obter_usuario)
                .put(atualizar_usuario)
                .delete(excluir_usuario),
        )
        .route("/transacoes", get(listar_transacoes))
        .route("/transacoes/buscar", get(buscar_transacoes))
        .route("/transacoes/nova", post(criar_transacao))
        .route("/transacoes/{id}", get(obter_transacao))
        .route("/totais/totais-por-usuario", get(totais_por_usuario))
        .route("/totais/totais-por-categoria", get(totais_por_categoria))
        .route("/relatorios/totais-por-usuario", get(pdf))
        .route("/relatorios/totais-por-categoria", get(pdf))
        .route("/sem-cabecalhos", get(sem_cabecalhos))
        .with_state(db);

    Router::new().nest("/api/v1", api)
}

fn paginate<T: Serialize + Clone>(items: &[T], page: u32, size: u32) -> Response {
    let total_records = items.len() as u64;
    let total_pages = if size == 0 {
        0
    } else {
        total_records.div_ceil(size as u64)
    };
    let start = ((page.max(1) - 1) * size) as usize;
    let slice: Vec<T> = items
        .iter()
        .skip(start)
        .take(size as usize)
        .cloned()
        .collect();

    (
        [
            ("x-pagenumber", page.to_string()),
            ("x-pagesize", size.to_string()),
            ("x-totalpages", total_pages.to_string()),
            ("x-totalrecords", total_records.to_string()),
        ],
        Json(slice),
    )
        .into_response()
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn text_error(status: StatusCode, message: &str) -> Response {
    (status, message.to_string()).into_response()
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

async fn listar_categorias(State(db): State<Shared>, Query(q): Query<PageParams>) -> Response {
    let db = db.lock().unwrap();
    paginate(&db.categorias, q.page_number, q.page_size)
}

async fn buscar_categorias(State(db): State<Shared>, Query(q): Query<PageParams>) -> Response {
    let db = db.lock().unwrap();
    let term = q.descricao.unwrap_or_default();
    let found: Vec<_> = db
        .categorias
        .iter()
        .filter(|c| contains(&c.descricao, &term))
        .cloned()
        .collect();
    paginate(&found, q.page_number, q.page_size)
}

async fn obter_categoria(State(db): State<Shared>, Path(id): Path<String>) -> Response {
    let db = db.lock().unwrap();
    match db.categorias.iter().find(|c| c.id == id) {
        Some(c) => Json(c.clone()).into_response(),
        None => json_error(StatusCode::NOT_FOUND, "Categoria não encontrada."),
    }
}

async fn criar_categoria(
    State(db): State<Shared>,
    Json(dto): Json<CategoriaCreateDto>,
) -> Response {
    if dto.descricao.trim().is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "A descrição é obrigatória.");
    }
    let mut db = db.lock().unwrap();
    let categoria = CategoriaResponseDto {
        id: db.id("cat"),
        descricao: dto.descricao,
        finalidade: dto.finalidade,
    };
    db.categorias.push(categoria.clone());
    (StatusCode::CREATED, Json(categoria)).into_response()
}

async fn atualizar_categoria(
    State(db): State<Shared>,
    Path(id): Path<String>,
    Json(dto): Json<CategoriaUpdateDto>,
) -> Response {
    let mut db = db.lock().unwrap();
    match db.categorias.iter_mut().find(|c| c.id == id) {
        Some(c) => {
            c.descricao = dto.descricao;
            c.finalidade = dto.finalidade;
            Json(c.clone()).into_response()
        }
        None => json_error(StatusCode::NOT_FOUND, "Categoria não encontrada."),
    }
}

async fn excluir_categoria(State(db): State<Shared>, Path(id): Path<String>) -> Response {
    let mut db = db.lock().unwrap();
    if db.transacoes.iter().any(|t| t.categoria_id == id) {
        return text_error(
            StatusCode::BAD_REQUEST,
            "Categoria possui transações vinculadas.",
        );
    }
    let before = db.categorias.len();
    db.categorias.retain(|c| c.id != id);
    if db.categorias.len() == before {
        return json_error(StatusCode::NOT_FOUND, "Categoria não encontrada.");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn listar_usuarios(State(db): State<Shared>, Query(q): Query<PageParams>) -> Response {
    let db = db.lock().unwrap();
    paginate(&db.usuarios, q.page_number, q.page_size)
}

async fn buscar_usuarios(State(db): State<Shared>, Query(q): Query<PageParams>) -> Response {
    let db = db.lock().unwrap();
    let term = q.termo.unwrap_or_default();
    let found: Vec<_> = db
        .usuarios
        .iter()
        .filter(|u| contains(&u.nome, &term))
        .cloned()
        .collect();
    paginate(&found, q.page_number, q.page_size)
}

async fn obter_usuario(State(db): State<Shared>, Path(id): Path<String>) -> Response {
    let db = db.lock().unwrap();
    match db.usuarios.iter().find(|u| u.id == id) {
        Some(u) => Json(u.clone()).into_response(),
        None => json_error(StatusCode::NOT_FOUND, "Usuário não encontrado."),
    }
}

async fn criar_usuario(State(db): State<Shared>, Json(dto): Json<UsuarioCreateDto>) -> Response {
    let mut db = db.lock().unwrap();
    let usuario = UsuarioResponseDto {
        id: db.id("usr"),
        nome: dto.nome,
        idade: dto.idade,
    };
    db.usuarios.push(usuario.clone());
    (StatusCode::CREATED, Json(usuario)).into_response()
}

async fn atualizar_usuario(
    State(db): State<Shared>,
    Path(id): Path<String>,
    Json(dto): Json<UsuarioUpdateDto>,
) -> Response {
    let mut db = db.lock().unwrap();
    match db.usuarios.iter_mut().find(|u| u.id == id) {
        Some(u) => {
            if let Some(nome) = dto.nome {
                u.nome = nome;
            }
            if let Some(idade) = dto.idade {
                u.idade = idade;
            }
            Json(u.clone()).into_response()
        }
        None => json_error(StatusCode::NOT_FOUND, "Usuário não encontrado."),
    }
}

async fn excluir_usuario(State(db): State<Shared>, Path(id): Path<String>) -> Response {
    let mut db = db.lock().unwrap();
    let before = db.usuarios.len();
    db.usuarios.retain(|u| u.id != id);
    if db.usuarios.len() == before {
        return json_error(StatusCode::NOT_FOUND, "Usuário não encontrado.");
    }
    db.transacoes.retain(|t| t.usuario_id != id);
    StatusCode::NO_CONTENT.into_response()
}

async fn listar_transacoes(State(db): State<Shared>, Query(q): Query<PageParams>) -> Response {
    let db = db.lock().unwrap();
    paginate(&db.transacoes, q.page_number, q.page_size)
}

async fn buscar_transacoes(State(db): State<Shared>, Query(q): Query<PageParams>) -> Response {
    let db = db.lock().unwrap();
    let term = q.filtro.unwrap_or_default();
    let found: Vec<_> = db
        .transacoes
        .iter()
        .filter(|t| contains(&t.descricao, &term) || t.codigo_transacao.to_string() == term)
        .cloned()
        .collect();
    paginate(&found, q.page_number, q.page_size)
}

async fn obter_transacao(State(db): State<Shared>, Path(id): Path<String>) -> Response {
    let db = db.lock().unwrap();
    match db.transacoes.iter().find(|t| t.id == id) {
        Some(t) => Json(t.clone()).into_response(),
        None => json_error(StatusCode::NOT_FOUND, "Transação não encontrada."),
    }
}

async fn criar_transacao(
    State(db): State<Shared>,
    Json(dto): Json<TransacaoCreateDto>,
) -> Response {
    let mut db = db.lock().unwrap();
    let Some(categoria) = db.categorias.iter().find(|c| c.id == dto.categoria_id).cloned()
    else {
        return text_error(StatusCode::BAD_REQUEST, "Categoria não encontrada.");
    };
    let Some(usuario) = db.usuarios.iter().find(|u| u.id == dto.usuario_id).cloned() else {
        return text_error(StatusCode::BAD_REQUEST, "Usuário não encontrado.");
    };
    if usuario.idade < 18 && dto.tipo == TipoTransacao::Receita {
        return text_error(
            StatusCode::BAD_REQUEST,
            "Usuários menores de idade só podem registrar despesas.",
        );
    }

    db.next_codigo += 1;
    let transacao = TransacaoResponseDto {
        id: db.id("trx"),
        codigo_transacao: db.next_codigo,
        valor: dto.valor,
        descricao: dto.descricao,
        categoria_id: categoria.id.clone(),
        tipo: dto.tipo,
        usuario_id: usuario.id.clone(),
        categoria,
        usuario,
        data_criacao_dto: "01/01/2025 12:00".to_string(),
    };
    db.transacoes.push(transacao.clone());
    (StatusCode::CREATED, Json(transacao)).into_response()
}

fn split(transacoes: &[&TransacaoResponseDto]) -> (Decimal, Decimal) {
    transacoes
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(receita, despesa), t| {
            match t.tipo {
                TipoTransacao::Receita => (receita + t.valor, despesa),
                TipoTransacao::Despesa => (receita, despesa + t.valor),
            }
        })
}

async fn totais_por_usuario(State(db): State<Shared>) -> Response {
    let db = db.lock().unwrap();
    let mut rows: Vec<TotalPorUsuarioDto> = db
        .usuarios
        .iter()
        .map(|u| {
            let own: Vec<_> = db.transacoes.iter().filter(|t| t.usuario_id == u.id).collect();
            let (receita, despesa) = split(&own);
            TotalPorUsuarioDto {
                usuario_id: Some(u.id.clone()),
                nome: u.nome.clone(),
                total_receita: receita,
                total_despesa: despesa,
                saldo: receita - despesa,
            }
        })
        .collect();
    let all: Vec<_> = db.transacoes.iter().collect();
    let (receita, despesa) = split(&all);
    rows.push(TotalPorUsuarioDto {
        usuario_id: None,
        nome: "Total Geral".to_string(),
        total_receita: receita,
        total_despesa: despesa,
        saldo: receita - despesa,
    });
    Json(rows).into_response()
}

async fn totais_por_categoria(State(db): State<Shared>) -> Response {
    let db = db.lock().unwrap();
    let mut rows: Vec<TotalPorCategoriaDto> = db
        .categorias
        .iter()
        .map(|c| {
            let own: Vec<_> = db
                .transacoes
                .iter()
                .filter(|t| t.categoria_id == c.id)
                .collect();
            let (receita, despesa) = split(&own);
            TotalPorCategoriaDto {
                categoria_id: Some(c.id.clone()),
                nome: c.descricao.clone(),
                total_receita: receita,
                total_despesa: despesa,
                saldo: receita - despesa,
            }
        })
        .collect();
    let all: Vec<_> = db.transacoes.iter().collect();
    let (receita, despesa) = split(&all);
    rows.push(TotalPorCategoriaDto {
        categoria_id: None,
        nome: "Total Geral".to_string(),
        total_receita: receita,
        total_despesa: despesa,
        saldo: receita - despesa,
    });
    Json(rows).into_response()
}

pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n%mock report\n%%EOF\n";

async fn pdf() -> Response {
    ([(header::CONTENT_TYPE, "application/pdf")], PDF_BYTES).into_response()
}

async fn sem_cabecalhos() -> Response {
    Json(Vec::<UsuarioResponseDto>::new()).into_response()
}
