use api::{
    ApiClient, ApiError, CategoriaCreateDto, CategoriaResponseDto, CategoriaUpdateDto,
    Finalidade, PaginationResult,
};
use dioxus::prelude::*;

use crate::components::{Column, CrudTable, FormModal, InfoModal, Notice, SearchInput, TableRow};
use crate::context::use_api;
use crate::form::{form_values, value, Field, FormValues, SelectOption};
use crate::paged_list::{use_paged_list, PagedResource};

impl PagedResource for CategoriaResponseDto {
    const NAME: &'static str = "categorias";

    async fn list(
        client: &ApiClient,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError> {
        client.listar_categorias(page_number, page_size).await
    }

    async fn search(
        client: &ApiClient,
        term: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError> {
        client.buscar_categorias(term, page_number, page_size).await
    }
}

impl TableRow for CategoriaResponseDto {
    fn row_key(&self) -> String {
        self.id.clone()
    }
}

fn columns() -> Vec<Column<CategoriaResponseDto>> {
    vec![
        Column::new("Descrição", |c| c.descricao.clone()),
        Column::new("Finalidade", |c| c.finalidade.label().to_string()),
    ]
}

fn finalidade_options() -> Vec<SelectOption> {
    Finalidade::ALL
        .iter()
        .map(|f| SelectOption::new(f.code().to_string(), f.label()))
        .collect()
}

fn descricao_field() -> Field {
    Field::text("descricao", "Descrição").required().max_length(200)
}

fn create_fields() -> Vec<Field> {
    vec![
        descricao_field(),
        Field::select("finalidade", "Finalidade", finalidade_options()).required(),
    ]
}

/// Editing only changes the description; the purpose is carried over.
fn edit_fields() -> Vec<Field> {
    vec![descricao_field()]
}

fn edit_defaults(categoria: &CategoriaResponseDto) -> FormValues {
    form_values([("descricao", categoria.descricao.clone())])
}

fn create_dto(values: &FormValues) -> Result<CategoriaCreateDto, String> {
    let finalidade = value(values, "finalidade")
        .parse::<Finalidade>()
        .map_err(|_| "Selecione uma finalidade válida.".to_string())?;
    Ok(CategoriaCreateDto {
        descricao: value(values, "descricao").to_string(),
        finalidade,
    })
}

fn update_dto(values: &FormValues, current: &CategoriaResponseDto) -> CategoriaUpdateDto {
    CategoriaUpdateDto {
        descricao: value(values, "descricao").to_string(),
        finalidade: current.finalidade,
    }
}

/// Create or update, returning the success text or the error to display.
async fn save(
    client: &ApiClient,
    editing: Option<CategoriaResponseDto>,
    values: &FormValues,
) -> Result<String, String> {
    match editing {
        Some(current) => client
            .atualizar_categoria(&current.id, &update_dto(values, &current))
            .await
            .map(|_| "Categoria editada com sucesso!".to_string())
            .map_err(|e| e.user_message("Ocorreu um erro ao atualizar a categoria.")),
        None => {
            let dto = create_dto(values)?;
            client
                .criar_categoria(&dto)
                .await
                .map(|_| "Categoria criada com sucesso!".to_string())
                .map_err(|e| e.user_message("Ocorreu um erro ao criar a categoria."))
        }
    }
}

#[component]
pub fn CategoriasView() -> Element {
    let api = use_api();
    let list = use_paged_list::<CategoriaResponseDto>();
    let mut form_open = use_signal(|| false);
    let mut editing = use_signal(|| None::<CategoriaResponseDto>);
    let mut notice = use_signal(|| None::<Notice>);

    let handle_submit = move |values: FormValues| {
        let target = editing();
        spawn(async move {
            let client = api.peek().clone();
            match save(&client, target, &values).await {
                Ok(message) => {
                    form_open.set(false);
                    editing.set(None);
                    notice.set(Some(Notice::success(message)));
                    list.reload().await;
                }
                Err(message) => {
                    tracing::error!("saving categoria failed: {message}");
                    notice.set(Some(Notice::error(message)));
                }
            }
        });
    };

    let (title, fields, defaults) = match editing() {
        Some(current) => (
            "Editar Categoria".to_string(),
            edit_fields(),
            Some(edit_defaults(&current)),
        ),
        None => ("Nova Categoria".to_string(), create_fields(), None),
    };

    rsx! {
        div {
            class: "page",
            SearchInput {
                value: list.filter(),
                on_input: move |text| list.set_filter(text),
            }
            CrudTable::<CategoriaResponseDto> {
                title: "Categorias",
                columns: columns(),
                rows: list.items(),
                page: list.page(),
                on_page_change: move |n| list.set_page(n),
                on_create: move |_| {
                    editing.set(None);
                    form_open.set(true);
                },
                on_edit: move |categoria| {
                    editing.set(Some(categoria));
                    form_open.set(true);
                },
            }
            if form_open() {
                FormModal {
                    title,
                    fields,
                    default_values: defaults,
                    on_submit: handle_submit,
                    on_close: move |_| {
                        form_open.set(false);
                        editing.set(None);
                    },
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
