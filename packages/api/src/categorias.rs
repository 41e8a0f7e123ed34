//! Category endpoints.

use crate::client::{page_query, segment, ApiClient};
use crate::error::ApiError;
use crate::models::{CategoriaCreateDto, CategoriaResponseDto, CategoriaUpdateDto};
use crate::pagination::PaginationResult;

impl ApiClient {
    /// `GET /categorias`: one page of every category.
    pub async fn listar_categorias(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<CategoriaResponseDto>, ApiError> {
        self.get_page("categorias", &page_query(None, page_number, page_size))
            .await
    }

    /// `GET /categorias/{id}`
    pub async fn obter_categoria(&self, id: &str) -> Result<CategoriaResponseDto, ApiError> {
        self.get_json(&format!("categorias/{}", segment(id))).await
    }

    /// `GET /categorias/buscar`: categories whose description matches `descricao`.
    pub async fn buscar_categorias(
        &self,
        descricao: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<CategoriaResponseDto>, ApiError> {
        self.get_page(
            "categorias/buscar",
            &page_query(Some(("descricao", descricao)), page_number, page_size),
        )
        .await
    }

    /// `POST /categorias/criar`
    pub async fn criar_categoria(
        &self,
        dto: &CategoriaCreateDto,
    ) -> Result<CategoriaResponseDto, ApiError> {
        self.post_json("categorias/criar", dto).await
    }

    /// `PUT /categorias/atualizar/{id}`
    pub async fn atualizar_categoria(
        &self,
        id: &str,
        dto: &CategoriaUpdateDto,
    ) -> Result<CategoriaResponseDto, ApiError> {
        self.put_json(&format!("categorias/atualizar/{}", segment(id)), dto)
            .await
    }

    /// `DELETE /categorias/excluir/{id}`
    pub async fn excluir_categoria(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("categorias/excluir/{}", segment(id)))
            .await
    }
}
