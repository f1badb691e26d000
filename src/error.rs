use crate::models::FieldKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Validation error: missing {}", join_keys(.missing))]
    Validation { missing: Vec<FieldKey> },

    #[error("Unknown form field: {0}")]
    InvalidField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: FieldKey, value: String },
}

impl FormError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FormError::Validation { missing } => {
                let labels: Vec<&str> = missing.iter().map(|key| key.label()).collect();
                format!("Please fill in: {}", labels.join(", "))
            }
            FormError::InvalidValue { field, .. } => {
                format!("Please choose a valid {}.", field.label().to_lowercase())
            }
            _ => self.to_string(),
        }
    }
}

fn join_keys(keys: &[FieldKey]) -> String {
    keys.iter()
        .map(FieldKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
