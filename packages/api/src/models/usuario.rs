use serde::{Deserialize, Serialize};

/// A user as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsuarioResponseDto {
    pub id: String,
    pub nome: String,
    pub idade: u32,
}

/// Payload of `POST /usuarios`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsuarioCreateDto {
    pub nome: String,
    pub idade: u32,
}

/// Payload of `PUT /usuarios/{id}`. Absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsuarioUpdateDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idade: Option<u32>,
}
