use api::{ApiClient, ApiError, Decimal, TotalPorCategoriaDto, TotalPorUsuarioDto};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaFilePdf;
use dioxus_free_icons::Icon;

use crate::components::{InfoModal, Notice};
use crate::context::use_api;
use crate::download::save_pdf;
use crate::format::{format_brl, saldo_class};

/// The two exportable reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relatorio {
    PorCategoria,
    PorUsuario,
}

impl Relatorio {
    pub fn file_name(&self) -> &'static str {
        match self {
            Relatorio::PorCategoria => "relatorio-totais-por-categoria.pdf",
            Relatorio::PorUsuario => "relatorio-totais-por-usuario.pdf",
        }
    }

    async fn download(&self, client: &ApiClient) -> Result<Vec<u8>, ApiError> {
        match self {
            Relatorio::PorCategoria => client.exportar_totais_por_categoria_pdf().await,
            Relatorio::PorUsuario => client.exportar_totais_por_usuario_pdf().await,
        }
    }
}

/// One table line, shared by both reports.
#[derive(Clone, Debug, PartialEq)]
struct TotalRow {
    key: String,
    nome: String,
    receita: Decimal,
    despesa: Decimal,
    saldo: Decimal,
    total_geral: bool,
}

impl TotalRow {
    fn from_usuario(index: usize, total: &TotalPorUsuarioDto) -> Self {
        Self {
            key: total.usuario_id.clone().unwrap_or_else(|| format!("linha-{index}")),
            nome: total.nome.clone(),
            receita: total.total_receita,
            despesa: total.total_despesa,
            saldo: total.saldo,
            total_geral: total.is_total_geral(),
        }
    }

    fn from_categoria(index: usize, total: &TotalPorCategoriaDto) -> Self {
        Self {
            key: total.categoria_id.clone().unwrap_or_else(|| format!("linha-{index}")),
            nome: total.nome.clone(),
            receita: total.total_receita,
            despesa: total.total_despesa,
            saldo: total.saldo,
            total_geral: total.is_total_geral(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Totais {
    por_categoria: Vec<TotalRow>,
    por_usuario: Vec<TotalRow>,
}

/// Both totals, fetched concurrently. Either failure empties both tables.
async fn load_totais(client: &ApiClient) -> Result<Totais, ApiError> {
    let (por_categoria, por_usuario) =
        futures::join!(client.totais_por_categoria(), client.totais_por_usuario());
    Ok(Totais {
        por_categoria: por_categoria?
            .iter()
            .enumerate()
            .map(|(i, t)| TotalRow::from_categoria(i, t))
            .collect(),
        por_usuario: por_usuario?
            .iter()
            .enumerate()
            .map(|(i, t)| TotalRow::from_usuario(i, t))
            .collect(),
    })
}

#[component]
pub fn RelatoriosView() -> Element {
    let api = use_api();
    let mut notice = use_signal(|| None::<Notice>);

    let totais = use_resource(move || async move {
        let client = api.peek().clone();
        load_totais(&client).await.unwrap_or_else(|e| {
            tracing::error!("failed to load totals: {e}");
            Totais::default()
        })
    });

    let export = move |relatorio: Relatorio| {
        spawn(async move {
            let client = api.peek().clone();
            let saved = match relatorio.download(&client).await {
                Ok(bytes) => save_pdf(&bytes, relatorio.file_name()),
                Err(e) => Err(e.user_message("Erro ao exportar o relatório.")),
            };
            if let Err(message) = saved {
                tracing::error!("exporting {} failed: {message}", relatorio.file_name());
                notice.set(Some(Notice::error(message)));
            }
        });
    };

    let Some(totais) = totais() else {
        return rsx! {
            p { class: "loading", "Carregando relatórios..." }
        };
    };

    rsx! {
        div {
            class: "page relatorios",
            h1 { class: "page-title", "$ Relatório do Total de Receitas e Despesas $" }
            TotalsTable {
                title: "Totais por Categoria",
                first_header: "Categoria",
                rows: totais.por_categoria,
                on_export: move |_| export(Relatorio::PorCategoria),
            }
            TotalsTable {
                title: "Totais por Usuário",
                first_header: "Usuário",
                rows: totais.por_usuario,
                on_export: move |_| export(Relatorio::PorUsuario),
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

#[component]
fn TotalsTable(
    title: String,
    first_header: String,
    rows: Vec<TotalRow>,
    on_export: EventHandler<()>,
) -> Element {
    rsx! {
        section {
            class: "totals-table",
            div {
                class: "crud-table-header",
                h2 { "{title}" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_export.call(()),
                    Icon { icon: FaFilePdf, width: 12, height: 12 }
                    span { "Exportar PDF" }
                }
            }
            table {
                thead {
                    tr {
                        th { "{first_header}" }
                        th { "Receita" }
                        th { "Despesa" }
                        th { "Saldo" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "crud-table-empty", colspan: "4", "Nenhum dado encontrado" }
                        }
                    }
                    for row in rows.iter() {
                        tr {
                            key: "{row.key}",
                            class: if row.total_geral { "total-geral" },
                            td { "{row.nome}" }
                            td { {format_brl(row.receita)} }
                            td { {format_brl(row.despesa)} }
                            td { class: saldo_class(row.saldo), {format_brl(row.saldo)} }
                        }
                    }
                }
            }
        }
    }
}
