//! The two-valued enums shared by categories and transactions.
//!
//! Both travel over the wire as the integers `1` (Despesa) and `2` (Receita)
//! and are shown to the user through [`Finalidade::label`] /
//! [`TipoTransacao::label`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raised when an integer or form value names no known variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

/// What a category is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Finalidade {
    Despesa = 1,
    Receita = 2,
}

/// Direction of a single transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TipoTransacao {
    Despesa = 1,
    Receita = 2,
}

macro_rules! despesa_receita {
    ($ty:ident) => {
        impl $ty {
            pub const ALL: [$ty; 2] = [$ty::Despesa, $ty::Receita];

            pub fn label(&self) -> &'static str {
                match self {
                    $ty::Despesa => "Despesa",
                    $ty::Receita => "Receita",
                }
            }

            /// Wire value, also used as the `<option>` value in forms.
            pub fn code(&self) -> u8 {
                *self as u8
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = UnknownVariant;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    1 => Ok($ty::Despesa),
                    2 => Ok($ty::Receita),
                    other => Err(UnknownVariant(other.to_string())),
                }
            }
        }

        impl From<$ty> for u8 {
            fn from(value: $ty) -> u8 {
                value.code()
            }
        }

        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u8>()
                    .map_err(|_| UnknownVariant(s.to_string()))
                    .and_then($ty::try_from)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

despesa_receita!(Finalidade);
despesa_receita!(TipoTransacao);
