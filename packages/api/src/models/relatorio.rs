use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Name the API gives the synthetic grand-total row.
pub const TOTAL_GERAL: &str = "Total Geral";

/// Income, expense and balance of one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPorUsuarioDto {
    #[serde(default)]
    pub usuario_id: Option<String>,
    pub nome: String,
    #[serde(default, deserialize_with = "nullable_amount")]
    pub total_receita: Decimal,
    #[serde(default, deserialize_with = "nullable_amount")]
    pub total_despesa: Decimal,
    #[serde(default, deserialize_with = "nullable_amount")]
    pub saldo: Decimal,
}

/// Income, expense and balance of one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPorCategoriaDto {
    #[serde(default)]
    pub categoria_id: Option<String>,
    pub nome: String,
    #[serde(default, deserialize_with = "nullable_amount")]
    pub total_receita: Decimal,
    #[serde(default, deserialize_with = "nullable_amount")]
    pub total_despesa: Decimal,
    #[serde(default, deserialize_with = "nullable_amount")]
    pub saldo: Decimal,
}

impl TotalPorUsuarioDto {
    pub fn is_total_geral(&self) -> bool {
        self.nome == TOTAL_GERAL
    }
}

impl TotalPorCategoriaDto {
    pub fn is_total_geral(&self) -> bool {
        self.nome == TOTAL_GERAL
    }
}

fn nullable_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}
