use dioxus::prelude::*;

/// Shown for any path no page claims. `home` is the link back to `/`.
#[component]
pub fn NotFoundView(path: String, home: Element) -> Element {
    rsx! {
        div {
            class: "not-found",
            h2 { "Página não encontrada" }
            p { "O endereço /{path} não existe." }
            {home}
        }
    }
}
