use validator::{Validate, ValidationErrors};

use crate::domain::{common::entities::app_errors::FieldError, product::entities::Product};

/// Checks every constraint a stored product must satisfy. Runs before each
/// create and on the merged record of each update.
pub fn validate_product(product: &Product) -> Result<(), Vec<FieldError>> {
    let mut errors = match product.validate() {
        Ok(()) => Vec::new(),
        Err(e) => collect_field_errors(&e),
    };

    if !product.price.is_finite() && !errors.iter().any(|e| e.field == "price") {
        errors.push(FieldError::new("price", "price must be a finite number"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        errors.sort_by(|a, b| a.field.cmp(&b.field));
        Err(errors)
    }
}

/// Flattens `validator` output into field errors, ordered by field name.
pub fn collect_field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut collected: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                FieldError::new(field.to_string(), message)
            })
        })
        .collect();

    collected.sort_by(|a, b| a.field.cmp(&b.field));
    collected
}
