use api::HomeControlConfig;
use dioxus::prelude::*;

use ui::ApiProvider;
use views::{AppLayout, Categorias, Home, NotFound, Relatorios, Transacoes, Usuarios};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/categorias")]
        Categorias {},
        #[route("/usuarios")]
        Usuarios {},
        #[route("/transacoes")]
        Transacoes {},
        #[route("/relatorios")]
        Relatorios {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// `homecontrol.toml`, baked into the bundle at build time.
const CONFIG_TOML: &str = include_str!("../homecontrol.toml");

fn main() {
    dioxus::launch(App);
}

/// Parse the embedded config, falling back to defaults if it is invalid.
fn load_config(raw: &str) -> HomeControlConfig {
    match HomeControlConfig::from_toml(raw) {
        Ok(config) => config.with_env_overrides(),
        Err(e) => {
            tracing::warn!(
                "invalid {}, using defaults: {e}",
                HomeControlConfig::filename()
            );
            HomeControlConfig::default().with_env_overrides()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| load_config(CONFIG_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::HOME_CONTROL_CSS }

        ApiProvider {
            config,
            Router::<Route> {}
        }
    }
}
