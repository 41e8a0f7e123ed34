use serde::{Deserialize, Serialize};

use super::Finalidade;

/// Payload of `POST /categorias/criar`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoriaCreateDto {
    pub descricao: String,
    pub finalidade: Finalidade,
}

/// Payload of `PUT /categorias/atualizar/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoriaUpdateDto {
    pub descricao: String,
    pub finalidade: Finalidade,
}

/// A category as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoriaResponseDto {
    pub id: String,
    pub descricao: String,
    pub finalidade: Finalidade,
}
