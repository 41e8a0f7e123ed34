use dioxus::prelude::*;

/// A full-screen overlay that centers a titled card.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                role: "dialog",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        r#type: "button",
                        title: "Fechar",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}
