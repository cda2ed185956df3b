use serde_json::Value;
use thiserror::Error;

/// A present field whose shape does not match the guidance result schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{path}: expected {expected}, found {found}")]
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{path}: required field is missing")]
    Missing { path: String },

    #[error("{path}: {reason}")]
    InvalidValue { path: String, reason: String },
}

impl ValidationError {
    /// Dotted/indexed path of the offending field, e.g. `market_data[2].open_positions`.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::WrongType { path, .. }
            | ValidationError::Missing { path }
            | ValidationError::InvalidValue { path, .. } => path,
        }
    }

    pub(crate) fn wrong_type(path: &str, expected: &'static str, found: &Value) -> Self {
        ValidationError::WrongType {
            path: path.to_string(),
            expected,
            found: describe(found),
        }
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_u64() => "integer",
        Value::Number(n) if n.is_i64() => "negative integer",
        Value::Number(_) => "non-integer number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
