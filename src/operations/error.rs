//! Error types for the price operations.

use super::OperationKind;
use serde_json::{json, Value};
use std::fmt;
use thiserror::Error;

/// Input field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Price,
    Sku,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Price => "price",
            Field::Sku => "sku",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by the four price operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PriceError {
    /// A field failed validation. Raised before the store is touched.
    #[error("{}", invalid_input_message(*field))]
    InvalidInput { field: Field, raw_value: String },

    /// The store call failed while connecting, executing or committing.
    #[error("{}", mutation_failed_message(*operation))]
    MutationFailed {
        operation: OperationKind,
        detail: String,
    },
}

impl PriceError {
    pub fn invalid_input(field: Field, raw_value: impl Into<String>) -> Self {
        PriceError::InvalidInput {
            field,
            raw_value: raw_value.into(),
        }
    }

    pub fn mutation_failed(operation: OperationKind, detail: impl ToString) -> Self {
        PriceError::MutationFailed {
            operation,
            detail: detail.to_string(),
        }
    }

    /// Stable tag callers can branch on.
    pub fn kind(&self) -> &'static str {
        match self {
            PriceError::InvalidInput { .. } => "InvalidInput",
            PriceError::MutationFailed { .. } => "MutationFailed",
        }
    }

    /// Structured payload accompanying the message.
    ///
    /// `{"price": raw}` or `{"sku": raw}` for invalid input, `{"error": detail}`
    /// for a failed mutation.
    pub fn detail(&self) -> Value {
        match self {
            PriceError::InvalidInput { field, raw_value } => json!({ field.as_str(): raw_value }),
            PriceError::MutationFailed { detail, .. } => json!({ "error": detail }),
        }
    }
}

fn invalid_input_message(field: Field) -> &'static str {
    match field {
        Field::Price => "Invalid price: must be a numeric value.",
        Field::Sku => "Invalid SKU: must be a numeric value.",
    }
}

fn mutation_failed_message(operation: OperationKind) -> &'static str {
    match operation {
        OperationKind::Update => "Failed to update price records.",
        OperationKind::Insert => "Failed to insert price record.",
        OperationKind::Delete => "Failed to delete price records.",
        OperationKind::Reactivate => "Failed to reactivate price records.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_surface() {
        let err = PriceError::invalid_input(Field::Price, "abc");
        assert_eq!(err.to_string(), "Invalid price: must be a numeric value.");
        assert_eq!(err.kind(), "InvalidInput");
        assert_eq!(err.detail(), json!({"price": "abc"}));

        let err = PriceError::invalid_input(Field::Sku, "12a");
        assert_eq!(err.to_string(), "Invalid SKU: must be a numeric value.");
        assert_eq!(err.detail(), json!({"sku": "12a"}));
    }

    #[test]
    fn test_mutation_failed_surface() {
        let err = PriceError::mutation_failed(OperationKind::Reactivate, "deadlock victim");
        assert_eq!(err.to_string(), "Failed to reactivate price records.");
        assert_eq!(err.kind(), "MutationFailed");
        assert_eq!(err.detail(), json!({"error": "deadlock victim"}));
    }
}
