//! Schema Error Types
//!
//! Caller-side error vocabulary: every way a value or a call can fail to match
//! the declared contract before (or instead of) reaching the remote side.

use serde::Serialize;

/// Schema error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Duplicate field `{field}` in {owner}")]
    DuplicateField { owner: String, field: String },

    #[error("Duplicate variant `{kind}` in family {family}")]
    DuplicateVariant { family: String, kind: String },

    #[error("Variant `{kind}` of {family} would swallow variant `{other}`")]
    OverlappingVariants {
        family: String,
        kind: String,
        other: String,
    },

    #[error("Discriminant field `{field}` is declared by a fragment of {family}::{kind}")]
    DiscriminantInFragment {
        family: String,
        kind: String,
        field: String,
    },

    #[error("Variant `{kind}` of {family} does not require its own payload key")]
    MissingDiscriminant { family: String, kind: String },

    #[error("Value matches no variant of {family}: {reason}")]
    NoMatchingVariant { family: String, reason: String },

    #[error("Value is an instance of several variants of {family}: {}", .kinds.join(", "))]
    AmbiguousVariant { family: String, kinds: Vec<String> },

    #[error("Unknown variant `{kind}` for family {family}")]
    UnknownVariant { family: String, kind: String },

    #[error("Extended family {family} has no detail for variant `{kind}`")]
    MissingDetail { family: String, kind: String },

    #[error("Result of {operation} mentions the attachment representation")]
    AttachmentInResult { operation: String },

    #[error("Unknown operation `{0}`")]
    UnknownOperation(String),

    #[error("Missing required parameter `{parameter}` for {operation}")]
    MissingParameter {
        operation: String,
        parameter: String,
    },

    #[error("Unknown parameter `{parameter}` for {operation}")]
    UnknownParameter {
        operation: String,
        parameter: String,
    },

    #[error("Parameter `{parameter}` of {operation} expects {expected}")]
    TypeMismatch {
        operation: String,
        parameter: String,
        expected: String,
    },

    #[error("{operation} needs exactly one message target: {reason}")]
    AmbiguousTarget { operation: String, reason: String },

    #[error("{operation} returned the `{actual}` branch but its input selects `{expected}`")]
    UnexpectedBranch {
        operation: String,
        expected: String,
        actual: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),
}

impl SchemaError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateField { .. } => "duplicate_field",
            Self::DuplicateVariant { .. } => "duplicate_variant",
            Self::OverlappingVariants { .. } => "overlapping_variants",
            Self::DiscriminantInFragment { .. } => "discriminant_in_fragment",
            Self::MissingDiscriminant { .. } => "missing_discriminant",
            Self::NoMatchingVariant { .. } => "no_matching_variant",
            Self::AmbiguousVariant { .. } => "ambiguous_variant",
            Self::UnknownVariant { .. } => "unknown_variant",
            Self::MissingDetail { .. } => "missing_detail",
            Self::AttachmentInResult { .. } => "attachment_in_result",
            Self::UnknownOperation(_) => "unknown_operation",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::UnknownParameter { .. } => "unknown_parameter",
            Self::TypeMismatch { .. } => "type_mismatch",
            Self::AmbiguousTarget { .. } => "ambiguous_target",
            Self::UnexpectedBranch { .. } => "unexpected_branch",
            Self::Validation(_) => "validation",
        }
    }

    /// Whether the error describes a malformed declaration rather than a
    /// malformed value or call.
    pub fn is_declaration_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateField { .. }
                | Self::DuplicateVariant { .. }
                | Self::OverlappingVariants { .. }
                | Self::DiscriminantInFragment { .. }
                | Self::MissingDiscriminant { .. }
                | Self::MissingDetail { .. }
                | Self::AttachmentInResult { .. }
        )
    }
}

/// Error report body, as printed by the catalog tool
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub kind: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<&SchemaError> for ErrorReport {
    fn from(error: &SchemaError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            errors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = SchemaError::MissingParameter {
            operation: "sendMessage".into(),
            parameter: "text".into(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required parameter `text` for sendMessage"
        );
        assert_eq!(err.kind(), "missing_parameter");
        assert!(!err.is_declaration_error());
    }

    #[test]
    fn test_declaration_errors() {
        let err = SchemaError::DuplicateField {
            owner: "SupergroupChat".into(),
            field: "title".into(),
        };
        assert!(err.is_declaration_error());
    }

    #[test]
    fn test_error_report_from_schema_error() {
        let err = SchemaError::UnknownOperation("sendTelepathy".into());
        let report = ErrorReport::from(&err);
        assert_eq!(report.kind, "unknown_operation");
        assert!(report.message.contains("sendTelepathy"));
        assert!(report.errors.is_none());
    }
}
