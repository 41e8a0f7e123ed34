//! Transaction endpoints. Transactions are immutable once created.

use crate::client::{page_query, segment, ApiClient};
use crate::error::ApiError;
use crate::models::{TransacaoCreateDto, TransacaoResponseDto};
use crate::pagination::PaginationResult;

impl ApiClient {
    /// `GET /transacoes`
    pub async fn listar_transacoes(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<TransacaoResponseDto>, ApiError> {
        self.get_page("transacoes", &page_query(None, page_number, page_size))
            .await
    }

    /// `GET /transacoes/{id}`
    pub async fn obter_transacao(&self, id: &str) -> Result<TransacaoResponseDto, ApiError> {
        self.get_json(&format!("transacoes/{}", segment(id))).await
    }

    /// `GET /transacoes/buscar`: matches description or transaction code.
    pub async fn buscar_transacoes(
        &self,
        filtro: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<TransacaoResponseDto>, ApiError> {
        self.get_page(
            "transacoes/buscar",
            &page_query(Some(("filtro", filtro)), page_number, page_size),
        )
        .await
    }

    /// `POST /transacoes/nova`
    pub async fn criar_transacao(
        &self,
        dto: &TransacaoCreateDto,
    ) -> Result<TransacaoResponseDto, ApiError> {
        self.post_json("transacoes/nova", dto).await
    }
}
