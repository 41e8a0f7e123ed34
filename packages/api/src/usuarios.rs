//! User endpoints.
//!
//! Deleting a user also deletes that user's transactions on the server.

use crate::client::{page_query, segment, ApiClient};
use crate::error::ApiError;
use crate::models::{UsuarioCreateDto, UsuarioResponseDto, UsuarioUpdateDto};
use crate::pagination::PaginationResult;

impl ApiClient {
    /// `GET /usuarios`
    pub async fn listar_usuarios(
        &self,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<UsuarioResponseDto>, ApiError> {
        self.get_page("usuarios", &page_query(None, page_number, page_size))
            .await
    }

    /// `GET /usuarios/{id}`
    pub async fn obter_usuario(&self, id: &str) -> Result<UsuarioResponseDto, ApiError> {
        self.get_json(&format!("usuarios/{}", segment(id))).await
    }

    /// `GET /usuarios/buscar`: users matching `termo`.
    pub async fn buscar_usuarios(
        &self,
        termo: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<PaginationResult<UsuarioResponseDto>, ApiError> {
        self.get_page(
            "usuarios/buscar",
            &page_query(Some(("termo", termo)), page_number, page_size),
        )
        .await
    }

    /// `POST /usuarios`
    pub async fn criar_usuario(
        &self,
        dto: &UsuarioCreateDto,
    ) -> Result<UsuarioResponseDto, ApiError> {
        self.post_json("usuarios", dto).await
    }

    /// `PUT /usuarios/{id}`
    pub async fn atualizar_usuario(
        &self,
        id: &str,
        dto: &UsuarioUpdateDto,
    ) -> Result<UsuarioResponseDto, ApiError> {
        self.put_json(&format!("usuarios/{}", segment(id)), dto).await
    }

    /// `DELETE /usuarios/{id}`
    pub async fn excluir_usuario(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("usuarios/{}", segment(id))).await
    }
}
