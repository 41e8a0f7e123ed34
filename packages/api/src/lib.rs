//! # API crate: typed HTTP client for the Home Control REST API
//!
//! Every page of the Home Control front-end talks to the remote finance API
//! through this crate. It owns the wire contract: the JSON shapes, the
//! pagination headers, the error bodies, and the endpoint paths.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`], a thin `reqwest` wrapper that joins paths onto the configured base URL and maps non-2xx responses to [`ApiError`] |
//! | [`config`] | [`HomeControlConfig`], the `homecontrol.toml` file (base URL, page sizes, search debounce) |
//! | [`error`] | [`ApiError`] and server message extraction |
//! | [`models`] | Request/response DTOs, the `Finalidade` / `TipoTransacao` enums and report totals |
//! | [`pagination`] | [`PaginationResult`] rebuilt from a JSON array body plus the `x-*` headers |
//! | [`categorias`], [`usuarios`], [`transacoes`], [`relatorios`] | One `impl ApiClient` block per resource, one method per endpoint |
//!
//! The crate compiles for both native targets and `wasm32-unknown-unknown`;
//! on the web `reqwest` drives the browser's `fetch`.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;

pub mod categorias;
pub mod relatorios;
pub mod transacoes;
pub mod usuarios;

pub use client::ApiClient;
pub use config::{ApiConfig, HomeControlConfig, PaginationConfig, SearchConfig};
pub use error::ApiError;
pub use models::{
    CategoriaCreateDto, CategoriaResponseDto, CategoriaUpdateDto, Finalidade, TipoTransacao,
    TotalPorCategoriaDto, TotalPorUsuarioDto, TransacaoCreateDto, TransacaoResponseDto,
    UsuarioCreateDto, UsuarioResponseDto, UsuarioUpdateDto,
};
pub use pagination::{PageInfo, PaginationResult};

/// Re-exported so downstream crates share one decimal type with the DTOs.
pub use rust_decimal::{Decimal, RoundingStrategy};
