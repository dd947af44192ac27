//! Validation Utilities

use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use super::error::{FieldError, SchemaError};

/// Flatten validation errors into field errors, sorted by field name.
///
/// Errors of nested structs and lists are reported under a dotted path
/// (`caption.caption`, `media[1].caption`).
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors = Vec::new();
    collect(errors, "", &mut field_errors);
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError {
                    field: path.clone(),
                    message: e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{}[{}]", path, index), out);
                }
            }
        }
    }
}

/// Convert validation errors to SchemaError
pub fn validation_error(errors: ValidationErrors) -> SchemaError {
    let message = field_errors(&errors)
        .first()
        .map(|e| format!("{}: {}", e.field, e.message))
        .unwrap_or_else(|| "Validation failed".into());

    SchemaError::Validation(message)
}

/// Run `validator` checks and map the failure into the schema vocabulary.
pub fn validate<T: Validate>(value: &T) -> Result<(), SchemaError> {
    value.validate().map_err(validation_error)
}
