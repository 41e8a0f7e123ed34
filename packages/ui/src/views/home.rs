use dioxus::prelude::*;

/// Landing page.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        div {
            class: "home",
            h1 { class: "home-title", "Home Control" }
            p { class: "home-subtitle", "Gerencie seus gastos residenciais com mais facilidade!" }
        }
    }
}
