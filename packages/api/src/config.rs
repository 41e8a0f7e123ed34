//! # Client configuration: `homecontrol.toml`
//!
//! The web crate embeds a `homecontrol.toml` file and parses it at startup.
//! Every section and key is optional; a missing or empty file is equivalent
//! to [`HomeControlConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "https://localhost:7212/api/v1"
//!
//! [pagination]
//! page_size = 5            # rows per table page
//! lookup_page_size = 1000  # rows fetched to fill select options
//!
//! [search]
//! debounce_ms = 300        # quiet time before a search fires
//! min_chars = 3            # shorter filters never hit the search endpoint
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`HomeControlConfig`] | Top-level file. TOML (de)serialisation, canonical filename, environment override. |
//! | [`ApiConfig`] | Base URL of the remote API. |
//! | [`PaginationConfig`] | Table page size and lookup page size. |
//! | [`SearchConfig`] | Debounce delay and minimum search length. |

use serde::{Deserialize, Serialize};

/// Environment variable that replaces `api.base_url` when set.
pub const BASE_URL_ENV: &str = "HOME_CONTROL_API_URL";

/// Top-level configuration stored in `homecontrol.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeControlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Remote API location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Versioned base path every endpoint is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://localhost:7212/api/v1".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Page sizes requested from the paginated endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Used when a whole collection is needed to fill a select field.
    #[serde(default = "default_lookup_page_size")]
    pub lookup_page_size: u32,
}

fn default_page_size() -> u32 {
    5
}

fn default_lookup_page_size() -> u32 {
    1000
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            lookup_page_size: default_lookup_page_size(),
        }
    }
}

/// Search-as-you-type behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u32,
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

fn default_debounce_ms() -> u32 {
    300
}

fn default_min_chars() -> usize {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_chars: default_min_chars(),
        }
    }
}

impl HomeControlConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "homecontrol.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Apply [`BASE_URL_ENV`] if it is set and non-empty.
    ///
    /// On `wasm32` there is no process environment and this is a no-op.
    pub fn with_env_overrides(self) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }
}
