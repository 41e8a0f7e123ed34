use dioxus::prelude::*;
use ui::Header;

use crate::Route;

/// Shared shell: the header with the navigation links above the page.
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        Header {
            Link { to: Route::Home {}, active_class: "active", "Início" }
            Link { to: Route::Categorias {}, active_class: "active", "Categorias" }
            Link { to: Route::Usuarios {}, active_class: "active", "Usuários" }
            Link { to: Route::Transacoes {}, active_class: "active", "Transações" }
            Link { to: Route::Relatorios {}, active_class: "active", "Relatórios" }
        }
        main {
            class: "app-main",
            Outlet::<Route> {}
        }
    }
}
