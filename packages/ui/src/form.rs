//! Field descriptions and validation for [`crate::FormModal`].
//!
//! A form is a list of [`Field`]s plus a [`FormValues`] map from field name
//! to the raw text the user typed (or the selected option value). Values
//! stay as text until a page converts them into a request DTO.

use std::collections::BTreeMap;
use std::str::FromStr;

use api::Decimal;

/// Raw input keyed by [`Field::name`].
pub type FormValues = BTreeMap<String, String>;

/// Validation message keyed by [`Field::name`].
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldKind {
    Text { max_length: Option<usize> },
    Number,
    Select { options: Vec<SelectOption> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text { max_length: None })
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        Self::new(name, label, FieldKind::Select { options })
    }

    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Cap a text field at `limit` characters. No effect on other kinds.
    pub fn max_length(mut self, limit: usize) -> Self {
        if let FieldKind::Text { max_length } = &mut self.kind {
            *max_length = Some(limit);
        }
        self
    }

    /// Check one raw value against this field's rules.
    pub fn check(&self, raw: &str) -> Option<String> {
        let label = &self.label;
        if raw.trim().is_empty() {
            return self
                .required
                .then(|| format!("O campo \"{label}\" é obrigatório."));
        }
        match &self.kind {
            FieldKind::Text {
                max_length: Some(limit),
            } if raw.chars().count() > *limit => Some(format!(
                "O campo \"{label}\" não pode ter mais que {limit} caracteres."
            )),
            FieldKind::Number if parse_number(raw).is_none() => {
                Some(format!("O campo \"{label}\" deve ser um número."))
            }
            _ => None,
        }
    }
}

/// Validate every field. An empty result means the form can be submitted.
pub fn validate(fields: &[Field], values: &FormValues) -> FieldErrors {
    fields
        .iter()
        .filter_map(|field| {
            field
                .check(value(values, &field.name))
                .map(|message| (field.name.clone(), message))
        })
        .collect()
}

/// Decide a submit: the values to hand on, or the errors to show.
pub fn submit(fields: &[Field], values: FormValues) -> Result<FormValues, FieldErrors> {
    let errors = validate(fields, &values);
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(errors)
    }
}

/// The raw value of `name`, or `""` when the user never touched it.
pub fn value<'a>(values: &'a FormValues, name: &str) -> &'a str {
    values.get(name).map(String::as_str).unwrap_or_default()
}

/// Parse a number typed into a numeric input. Browsers may hand back
/// exponent notation, so that is accepted too.
pub fn parse_number(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Build a [`FormValues`] map from name/value pairs.
pub fn form_values<const N: usize>(pairs: [(&str, String); N]) -> FormValues {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}
