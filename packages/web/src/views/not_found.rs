use dioxus::prelude::*;
use ui::views::NotFoundView;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundView {
            path: segments.join("/"),
            home: rsx! {
                Link { to: Route::Home {}, "Voltar para o início" }
            },
        }
    }
}
