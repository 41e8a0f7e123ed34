//! Request and response shapes of the remote API.
//!
//! Field names follow the API's camelCase JSON; every struct renames its
//! fields accordingly so the Rust side keeps snake_case.

mod categoria;
mod enums;
mod relatorio;
mod transacao;
mod usuario;

pub use categoria::{CategoriaCreateDto, CategoriaResponseDto, CategoriaUpdateDto};
pub use enums::{Finalidade, TipoTransacao, UnknownVariant};
pub use relatorio::{TotalPorCategoriaDto, TotalPorUsuarioDto, TOTAL_GERAL};
pub use transacao::{TransacaoCreateDto, TransacaoResponseDto};
pub use usuario::{UsuarioCreateDto, UsuarioResponseDto, UsuarioUpdateDto};
