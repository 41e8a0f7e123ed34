//! API client and configuration contexts for the UI.

use api::{ApiClient, HomeControlConfig};
use dioxus::prelude::*;

/// The shared API client.
pub fn use_api() -> Signal<ApiClient> {
    use_context::<Signal<ApiClient>>()
}

/// The configuration the app was started with.
pub fn use_config() -> Signal<HomeControlConfig> {
    use_context::<Signal<HomeControlConfig>>()
}

/// Provider component that builds the API client from `config`.
/// Wrap your app with this component before rendering any page.
#[component]
pub fn ApiProvider(config: HomeControlConfig, children: Element) -> Element {
    tracing::debug!("API base URL: {}", config.api.base_url);
    use_context_provider(|| Signal::new(ApiClient::new(&config.api)));
    use_context_provider(|| Signal::new(config.clone()));

    rsx! {
        {children}
    }
}
