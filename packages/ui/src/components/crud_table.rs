use api::PageInfo;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaChevronLeft, FaChevronRight, FaPen, FaPlus, FaTrashCan,
};
use dioxus_free_icons::Icon;

/// A row type the table can render.
pub trait TableRow: Clone + PartialEq + 'static {
    /// Stable identity used as the row key.
    fn row_key(&self) -> String;
}

/// A table column: a header and a function producing the cell text.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(header: &'static str, cell: fn(&T) -> String) -> Self {
        Self { header, cell }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.cell as usize == other.cell as usize
    }
}

/// Paginated table with optional create, edit, delete and paging controls.
///
/// The table is stateless: every interaction is reported through the
/// optional handlers, and a control only renders when its handler is set.
#[component]
pub fn CrudTable<T: TableRow>(
    title: String,
    columns: Vec<Column<T>>,
    rows: Vec<T>,
    #[props(default)] page: PageInfo,
    on_page_change: Option<EventHandler<u32>>,
    on_create: Option<EventHandler<()>>,
    on_edit: Option<EventHandler<T>>,
    on_delete: Option<EventHandler<T>>,
) -> Element {
    let has_actions = on_edit.is_some() || on_delete.is_some();
    let span = columns.len() + 1;

    rsx! {
        div {
            class: "crud-table",
            div {
                class: "crud-table-header",
                h2 { "{title}" }
                if let Some(on_create) = on_create {
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| on_create.call(()),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "Adicionar" }
                    }
                }
            }
            table {
                thead {
                    tr {
                        for column in columns.iter() {
                            th { key: "{column.header}", "{column.header}" }
                        }
                        if has_actions {
                            th { class: "crud-table-actions", "Opções" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                class: "crud-table-empty",
                                colspan: "{span}",
                                "Nenhum registro encontrado."
                            }
                        }
                    }
                    for (row_key, row) in rows.iter().map(|row| (row.row_key(), row.clone())) {
                        CrudRow {
                            key: "{row_key}",
                            row,
                            columns: columns.clone(),
                            has_actions,
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
            if let Some(on_page_change) = on_page_change {
                div {
                    class: "crud-table-footer",
                    span {
                        "Página {page.page_number} de {page.total_pages} — Total: {page.total_records} registros"
                    }
                    div {
                        class: "crud-table-pager",
                        button {
                            class: "btn-icon",
                            r#type: "button",
                            title: "Página anterior",
                            disabled: !page.has_previous(),
                            onclick: move |_| on_page_change.call(page.page_number.saturating_sub(1)),
                            Icon { icon: FaChevronLeft, width: 12, height: 12 }
                        }
                        button {
                            class: "btn-icon",
                            r#type: "button",
                            title: "Próxima página",
                            disabled: !page.has_next(),
                            onclick: move |_| on_page_change.call(page.page_number + 1),
                            Icon { icon: FaChevronRight, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CrudRow<T: TableRow>(
    row: T,
    columns: Vec<Column<T>>,
    has_actions: bool,
    #[props(!optional)] on_edit: Option<EventHandler<T>>,
    #[props(!optional)] on_delete: Option<EventHandler<T>>,
) -> Element {
    let edit_row = row.clone();
    let delete_row = row.clone();

    rsx! {
        tr {
            for column in columns.iter() {
                td { key: "{column.header}", {(column.cell)(&row)} }
            }
            if has_actions {
                td {
                    class: "crud-table-actions",
                    if let Some(on_edit) = on_edit {
                        button {
                            class: "btn-icon btn-edit",
                            r#type: "button",
                            title: "Editar",
                            onclick: move |_| on_edit.call(edit_row.clone()),
                            Icon { icon: FaPen, width: 12, height: 12 }
                        }
                    }
                    if let Some(on_delete) = on_delete {
                        button {
                            class: "btn-icon btn-delete",
                            r#type: "button",
                            title: "Excluir",
                            onclick: move |_| on_delete.call(delete_row.clone()),
                            Icon { icon: FaTrashCan, width: 12, height: 12 }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Fruta {
        id: u32,
        nome: &'static str,
    }

    impl TableRow for Fruta {
        fn row_key(&self) -> String {
            self.id.to_string()
        }
    }

    fn columns() -> Vec<Column<Fruta>> {
        vec![
            Column::new("ID", |f| f.id.to_string()),
            Column::new("Nome", |f| f.nome.to_string()),
        ]
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_empty_table_shows_placeholder_across_all_columns() {
        fn app() -> Element {
            rsx! {
                CrudTable::<Fruta> {
                    title: "Frutas",
                    columns: columns(),
                    rows: vec![],
                    on_edit: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Nenhum registro encontrado."));
        assert!(html.contains("colspan=\"3\""));
        assert!(html.contains("Opções"));
        assert!(!html.contains("Adicionar"));
        assert!(!html.contains("Página"));
    }

    #[test]
    fn test_rows_and_footer() {
        fn app() -> Element {
            rsx! {
                CrudTable::<Fruta> {
                    title: "Frutas",
                    columns: columns(),
                    rows: vec![Fruta { id: 7, nome: "Caju" }, Fruta { id: 8, nome: "Pitanga" }],
                    page: PageInfo { page_number: 2, page_size: 2, total_pages: 3, total_records: 6 },
                    on_page_change: move |_| {},
                    on_create: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(html.contains("Caju"));
        assert!(html.contains("Pitanga"));
        assert!(html.contains("Adicionar"));
        assert!(html.contains("Página 2 de 3 — Total: 6 registros"));
        assert!(!html.contains("Opções"));
        assert!(!html.contains("Nenhum registro encontrado."));
    }

    #[test]
    fn test_columns_compare_header_and_renderer() {
        let cols = columns();
        let (id, nome) = (cols[0], cols[1]);
        let renamed = Column::new("ID", nome.cell);

        assert!(id == columns()[0]);
        assert!(id != nome);
        assert!(id != renamed);
        assert!(renamed == Column::new("ID", nome.cell));
    }

    /// Whether the pager button titled `title` carries a `disabled` attribute.
    fn pager_disabled(html: &str, title: &str) -> bool {
        let at = html.find(&format!("title=\"{title}\"")).unwrap();
        let start = html[..at].rfind("<button").unwrap();
        let end = at + html[at..].find('>').unwrap();
        let tag = &html[start..end];
        tag.contains("disabled") && !tag.contains("disabled=false") && !tag.contains("disabled=\"false\"")
    }

    #[test]
    fn test_previous_disabled_on_first_page() {
        fn app() -> Element {
            rsx! {
                CrudTable::<Fruta> {
                    title: "Frutas",
                    columns: columns(),
                    rows: vec![Fruta { id: 1, nome: "Caju" }],
                    page: PageInfo { page_number: 1, page_size: 1, total_pages: 3, total_records: 3 },
                    on_page_change: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(pager_disabled(&html, "Página anterior"));
        assert!(!pager_disabled(&html, "Próxima página"));
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        fn app() -> Element {
            rsx! {
                CrudTable::<Fruta> {
                    title: "Frutas",
                    columns: columns(),
                    rows: vec![Fruta { id: 3, nome: "Umbu" }],
                    page: PageInfo { page_number: 3, page_size: 1, total_pages: 3, total_records: 3 },
                    on_page_change: move |_| {},
                }
            }
        }

        let html = render(app);
        assert!(!pager_disabled(&html, "Página anterior"));
        assert!(pager_disabled(&html, "Próxima página"));
    }
}
