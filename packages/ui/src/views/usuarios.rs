use api::{
    ApiClient, ApiError, PaginationResult, UsuarioCreateDto, UsuarioResponseDto,
    UsuarioUpdateDto,
};
use dioxus::prelude::*;

use crate::components::{
    Column, CrudTable, FormModal, InfoModal, Notice, NoticeKind, SearchInput, TableRow,
};
use crate::context::use_api;
use crate::form::{form_values, parse_number, value, Field, FormValues};
use crate::paged_list::{use_paged_list, PagedResource};

impl PagedResource for UsuarioResponseDto {
    const NAME: &'static str = "usuarios";

    async fn list(
        client: &ApiClient,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError> {
        client.listar_usuarios(page_number, page_size).await
    }

    async fn search(
        client: &ApiClient,
        term: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<Self>, ApiError> {
        client.buscar_usuarios(term, page_number, page_size).await
    }
}

impl TableRow for UsuarioResponseDto {
    fn row_key(&self) -> String {
        self.id.clone()
    }
}

fn columns() -> Vec<Column<UsuarioResponseDto>> {
    vec![
        Column::new("Nome", |u| u.nome.clone()),
        Column::new("Idade", |u| u.idade.to_string()),
    ]
}

fn fields() -> Vec<Field> {
    vec![
        Field::text("nome", "Nome").required().max_length(100),
        Field::number("idade", "Idade").required(),
    ]
}

fn edit_defaults(usuario: &UsuarioResponseDto) -> FormValues {
    form_values([
        ("nome", usuario.nome.clone()),
        ("idade", usuario.idade.to_string()),
    ])
}

/// Ages are whole, non-negative years.
fn parse_idade(values: &FormValues) -> Result<u32, String> {
    parse_number(value(values, "idade"))
        .filter(|n| n.fract().is_zero() && !n.is_sign_negative())
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| "Informe uma idade válida.".to_string())
}

fn create_dto(values: &FormValues) -> Result<UsuarioCreateDto, String> {
    Ok(UsuarioCreateDto {
        nome: value(values, "nome").to_string(),
        idade: parse_idade(values)?,
    })
}

fn update_dto(values: &FormValues) -> Result<UsuarioUpdateDto, String> {
    Ok(UsuarioUpdateDto {
        nome: Some(value(values, "nome").to_string()),
        idade: Some(parse_idade(values)?),
    })
}

fn delete_prompt(nome: &str) -> String {
    format!(
        "Tem certeza que deseja deletar o usuário \"{nome}\"? Todas as transações dele também serão removidas."
    )
}

async fn save(
    client: &ApiClient,
    editing: Option<UsuarioResponseDto>,
    values: &FormValues,
) -> Result<String, String> {
    let outcome = match editing {
        Some(current) => client
            .atualizar_usuario(&current.id, &update_dto(values)?)
            .await
            .map(|_| "Usuário atualizado com sucesso!"),
        None => client
            .criar_usuario(&create_dto(values)?)
            .await
            .map(|_| "Usuário criado com sucesso!"),
    };
    outcome
        .map(str::to_string)
        .map_err(|e| e.user_message("Erro ao salvar usuário."))
}

#[component]
pub fn UsuariosView() -> Element {
    let api = use_api();
    let list = use_paged_list::<UsuarioResponseDto>();
    let mut form_open = use_signal(|| false);
    let mut editing = use_signal(|| None::<UsuarioResponseDto>);
    let mut deleting = use_signal(|| None::<UsuarioResponseDto>);
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
                    tracing::error!("saving usuario failed: {message}");
                    notice.set(Some(Notice::error(message)));
                }
            }
        });
    };

    let handle_delete = move |_| {
        let Some(target) = deleting() else {
            return;
        };
        spawn(async move {
            let client = api.peek().clone();
            let result = client.excluir_usuario(&target.id).await;
            deleting.set(None);
            match result {
                Ok(()) => {
                    notice.set(Some(Notice::success("Usuário deletado com sucesso!")));
                    list.reload().await;
                }
                Err(e) => {
                    tracing::error!("deleting usuario {} failed: {e}", target.id);
                    notice.set(Some(Notice::error(e.user_message("Erro ao deletar usuário."))));
                }
            }
        });
    };

    let (title, defaults) = match editing() {
        Some(current) => ("Editar Usuário".to_string(), Some(edit_defaults(&current))),
        None => ("Criar Usuário".to_string(), None),
    };

    rsx! {
        div {
            class: "page",
            SearchInput {
                value: list.filter(),
                on_input: move |text| list.set_filter(text),
            }
            CrudTable::<UsuarioResponseDto> {
                title: "Usuários",
                columns: columns(),
                rows: list.items(),
                page: list.page(),
                on_page_change: move |n| list.set_page(n),
                on_create: move |_| {
                    editing.set(None);
                    form_open.set(true);
                },
                on_edit: move |usuario| {
                    editing.set(Some(usuario));
                    form_open.set(true);
                },
                on_delete: move |usuario| deleting.set(Some(usuario)),
            }
            if form_open() {
                FormModal {
                    title,
                    fields: fields(),
                    default_values: defaults,
                    on_submit: handle_submit,
                    on_close: move |_| {
                        form_open.set(false);
                        editing.set(None);
                    },
                }
            }
            if let Some(target) = deleting() {
                InfoModal {
                    kind: NoticeKind::Confirm,
                    message: delete_prompt(&target.nome),
                    on_close: move |_| deleting.set(None),
                    actions: rsx! {
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| deleting.set(None),
                            "Cancelar"
                        }
                        button {
                            class: "btn btn-danger",
                            r#type: "button",
                            onclick: handle_delete,
                            "Deletar"
                        }
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
