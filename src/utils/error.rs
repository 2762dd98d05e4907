use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Schema violation at '{field}': {reason}")]
    SchemaViolation { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ContractError {
    pub fn violation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ContractError::SchemaViolation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field path of the violation, e.g. `places[0].category`.
    pub fn field(&self) -> Option<&str> {
        match self {
            ContractError::SchemaViolation { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContractError>;
