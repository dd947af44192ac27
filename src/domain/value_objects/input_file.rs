//! Attachment positions.
//!
//! `F` is the caller's representation of a fresh upload (a path, an
//! in-memory buffer, an `attach://` handle, ...). It is chosen once, when the
//! API is instantiated, and flows into every attachment position.

use serde::{Deserialize, Serialize};

use crate::domain::schema::{FieldType, Shape};

/// A file given either as a fresh upload or as a remote reference
/// (`file_id` already on the servers, or an HTTP URL).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputFile<F> {
    Remote(String),
    Upload(F),
}

impl<F> InputFile<F> {
    pub fn remote(reference: impl Into<String>) -> Self {
        Self::Remote(reference.into())
    }

    pub fn upload(file: F) -> Self {
        Self::Upload(file)
    }

    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload(_))
    }

    pub fn as_upload(&self) -> Option<&F> {
        match self {
            Self::Upload(file) => Some(file),
            Self::Remote(_) => None,
        }
    }

    /// Change the upload representation, keeping remote references.
    pub fn map<G>(self, f: impl FnOnce(F) -> G) -> InputFile<G> {
        match self {
            Self::Remote(reference) => InputFile::Remote(reference),
            Self::Upload(file) => InputFile::Upload(f(file)),
        }
    }
}

impl<F> Shape for InputFile<F> {
    fn shape() -> FieldType {
        FieldType::Attachment
    }
}

/// A position that only accepts a fresh upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Upload<F>(pub F);

impl<F> Shape for Upload<F> {
    fn shape() -> FieldType {
        FieldType::Upload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Handle(u32);

    #[test]
    fn test_input_file_serializes_either_side() {
        let remote: InputFile<Handle> = InputFile::remote("AgAD");
        assert_eq!(serde_json::to_string(&remote).unwrap(), "\"AgAD\"");

        let upload = InputFile::upload(Handle(7));
        assert!(upload.is_upload());
        assert_eq!(serde_json::to_string(&upload).unwrap(), "7");
        assert_eq!(upload.map(|h| h.0 + 1).as_upload(), Some(&8));
    }

    #[test]
    fn test_shapes() {
        assert_eq!(InputFile::<Handle>::shape(), FieldType::Attachment);
        assert_eq!(Upload::<Handle>::shape(), FieldType::Upload);
    }
}
