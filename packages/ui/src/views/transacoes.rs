use api::{
    ApiClient, ApiError, CategoriaResponseDto, PaginationResult, TipoTransacao,
    TransacaoCreateDto, TransacaoResponseDto, UsuarioResponseDto,
};
use dioxus::prelude::*;

use crate::components::{Column, CrudTable, FormModal, InfoModal, Notice, SearchInput, TableRow};
use crate::context::{use_api, use_config};
use crate::form::{parse_number, value, Field, FormValues, SelectOption};
use crate::format::format_brl;
use crate::paged_list::{use_paged_list, PagedResource};

impl PagedResource for TransacaoResponseDto {
    const NAME: &'static str = "transacoes";

    async fn list(
        client: &ApiClient,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError> {
        client.listar_transacoes(page_number, page_size).await
    }

    async fn search(
        client: &ApiClient,
        term: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError> {
        client.buscar_transacoes(term, page_number, page_size).await
    }
}

impl TableRow for TransacaoResponseDto {
    fn row_key(&self) -> String {
        self.id.clone()
    }
}

fn columns() -> Vec<Column<TransacaoResponseDto>> {
    vec![
        Column::new("ID", |t| t.codigo_transacao.to_string()),
        Column::new("Descrição", |t| t.descricao.clone()),
        Column::new("Valor", |t| format_brl(t.valor)),
        Column::new("Data", |t| t.data_criacao_dto.clone()),
        Column::new("Tipo", |t| t.tipo.label().to_string()),
        Column::new("Categoria", |t| t.categoria.descricao.clone()),
        Column::new("Usuário", |t| t.usuario.nome.clone()),
    ]
}

/// Form fields; the select options come from the lookups loaded on mount.
fn fields(categorias: &[CategoriaResponseDto], usuarios: &[UsuarioResponseDto]) -> Vec<Field> {
    let categoria_options = categorias
        .iter()
        .map(|c| SelectOption::new(c.id.clone(), c.descricao.clone()))
        .collect();
    let tipo_options = TipoTransacao::ALL
        .iter()
        .map(|t| SelectOption::new(t.code().to_string(), t.label()))
        .collect();
    let usuario_options = usuarios
        .iter()
        .map(|u| SelectOption::new(u.id.clone(), u.nome.clone()))
        .collect();

    vec![
        Field::number("valor", "Valor").required(),
        Field::text("descricao", "Descrição").required(),
        Field::select("categoriaId", "Categoria", categoria_options).required(),
        Field::select("tipo", "Tipo", tipo_options).required(),
        Field::select("usuarioId", "Usuário", usuario_options).required(),
    ]
}

fn create_dto(values: &FormValues) -> Result<TransacaoCreateDto, String> {
    let valor = parse_number(value(values, "valor")).ok_or("Informe um valor válido.")?;
    let tipo = value(values, "tipo")
        .parse::<TipoTransacao>()
        .map_err(|_| "Selecione um tipo válido.".to_string())?;
    Ok(TransacaoCreateDto {
        valor,
        descricao: value(values, "descricao").to_string(),
        categoria_id: value(values, "categoriaId").to_string(),
        tipo,
        usuario_id: value(values, "usuarioId").to_string(),
    })
}

fn created_message(transacao: &TransacaoResponseDto) -> String {
    format!(
        "Transação com n° {} criada com sucesso!",
        transacao.codigo_transacao
    )
}

async fn save(client: &ApiClient, values: &FormValues) -> Result<String, String> {
    let dto = create_dto(values)?;
    client
        .criar_transacao(&dto)
        .await
        .map(|created| created_message(&created))
        .map_err(|e| e.user_message(ApiError::DEFAULT_MESSAGE))
}

/// Every category and user, for the select fields. Each list is loaded on
/// its own; a failure empties only that list.
async fn load_lookups(
    client: &ApiClient,
    page_size: u32,
) -> (Vec<CategoriaResponseDto>, Vec<UsuarioResponseDto>) {
    let (categorias, usuarios) = futures::join!(
        client.listar_categorias(1, page_size),
        client.listar_usuarios(1, page_size)
    );
    (lookup_items("categorias", categorias), lookup_items("usuarios", usuarios))
}

fn lookup_items<T>(name: &str, page: Result<PaginationResult<T>, ApiError>) -> Vec<T> {
    match page {
        Ok(page) => page.items,
        Err(e) => {
            tracing::error!("failed to load {name}: {e}");
            Vec::new()
        }
    }
}

#[component]
pub fn TransacoesView() -> Element {
    let api = use_api();
    let config = use_config();
    let list = use_paged_list::<TransacaoResponseDto>();
    let mut form_open = use_signal(|| false);
    let mut notice = use_signal(|| None::<Notice>);

    let lookups = use_resource(move || async move {
        let client = api.peek().clone();
        let page_size = config.peek().pagination.lookup_page_size;
        load_lookups(&client, page_size).await
    });

    let handle_submit = move |values: FormValues| {
        spawn(async move {
            let client = api.peek().clone();
            match save(&client, &values).await {
                Ok(message) => {
                    form_open.set(false);
                    notice.set(Some(Notice::success(message)));
                    list.reload().await;
                }
                Err(message) => {
                    tracing::error!("saving transacao failed: {message}");
                    notice.set(Some(Notice::error(message)));
                }
            }
        });
    };

    let form_fields = match &*lookups.read() {
        Some((categorias, usuarios)) => fields(categorias, usuarios),
        None => fields(&[], &[]),
    };

    rsx! {
        div {
            class: "page",
            SearchInput {
                placeholder: "Pesquisar por descrição ou código",
                value: list.filter(),
                on_input: move |text| list.set_filter(text),
            }
            CrudTable::<TransacaoResponseDto> {
                title: "$ Transações $",
                columns: columns(),
                rows: list.items(),
                page: list.page(),
                on_page_change: move |n| list.set_page(n),
                on_create: move |_| form_open.set(true),
            }
            if form_open() {
                FormModal {
                    title: "Nova Transação",
                    fields: form_fields,
                    default_values: None,
                    on_submit: handle_submit,
                    on_close: move |_| form_open.set(false),
                }
            }
            if let Some(current) = notice() {
                InfoModal {
                    kind: current.kind,
                    message: current.message,
                    on_close: move |_| notice.set(None),
                }
            }
        }
    }
}
