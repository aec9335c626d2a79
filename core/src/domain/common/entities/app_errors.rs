use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single constraint violation on a named field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

pub fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(FieldError::to_string)
        .collect::<Vec<String>>()
        .join("; ")
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error("Product not found")]
    NotFound,

    #[error("Invalid product id: {0}")]
    InvalidIdentifier(String),

    #[error("Validation failed: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Internal server error")]
    InternalServerError,
}
