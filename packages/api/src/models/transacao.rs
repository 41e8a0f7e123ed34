use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategoriaResponseDto, TipoTransacao, UsuarioResponseDto};

/// Payload of `POST /transacoes/nova`.
///
/// `valor` is sent as a JSON number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoCreateDto {
    pub valor: Decimal,
    pub descricao: String,
    pub categoria_id: String,
    pub tipo: TipoTransacao,
    pub usuario_id: String,
}

/// A transaction as returned by the API, with snapshots of its category and
/// user embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransacaoResponseDto {
    pub id: String,
    /// Sequential code assigned by the server; shown as the row "ID".
    pub codigo_transacao: i64,
    pub valor: Decimal,
    pub descricao: String,
    pub categoria_id: String,
    pub tipo: TipoTransacao,
    pub usuario_id: String,
    pub categoria: CategoriaResponseDto,
    pub usuario: UsuarioResponseDto,
    /// Creation timestamp, already formatted by the server.
    #[serde(default)]
    pub data_criacao_dto: String,
}
