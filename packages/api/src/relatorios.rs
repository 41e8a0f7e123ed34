//! Aggregate totals and their PDF exports.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{TotalPorCategoriaDto, TotalPorUsuarioDto};

impl ApiClient {
    /// `GET /totais/totais-por-usuario`
    pub async fn totais_por_usuario(&self) -> Result<Vec<TotalPorUsuarioDto>, ApiError> {
        self.get_json("totais/totais-por-usuario").await
    }

    /// `GET /totais/totais-por-categoria`
    pub async fn totais_por_categoria(&self) -> Result<Vec<TotalPorCategoriaDto>, ApiError> {
        self.get_json("totais/totais-por-categoria").await
    }

    /// `GET /relatorios/totais-por-usuario`: PDF bytes.
    pub async fn exportar_totais_por_usuario_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes("relatorios/totais-por-usuario").await
    }

    /// `GET /relatorios/totais-por-categoria`: PDF bytes.
    pub async fn exportar_totais_por_categoria_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.get_bytes("relatorios/totais-por-categoria").await
    }
}
