//! Success/failure envelope.
//!
//! On the wire a response is `{"ok": true, "result": ...}` or
//! `{"ok": false, "error_code": ..., "description": ..., "parameters": ...}`.
//! The failure branch is shared by every operation; only the success payload
//! varies.

use std::time::Duration;

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::error::SchemaError;

/// Hints attached to a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

/// Failure branch of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error_code}: {description}")]
pub struct ApiError {
    pub error_code: i32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    pub fn new(error_code: i32, description: impl Into<String>) -> Self {
        Self {
            error_code,
            description: description.into(),
            parameters: None,
        }
    }

    /// A request rejected before it left the caller.
    pub fn bad_request(reason: impl std::fmt::Display) -> Self {
        Self::new(400, format!("Bad Request: {}", reason))
    }

    /// A flood-control failure asking to wait `seconds`.
    pub fn too_many_requests(seconds: u64) -> Self {
        Self {
            error_code: 429,
            description: format!("Too Many Requests: retry after {}", seconds),
            parameters: Some(ResponseParameters {
                retry_after: Some(seconds),
                ..Default::default()
            }),
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        self.parameters
            .as_ref()
            .and_then(|p| p.retry_after)
            .map(Duration::from_secs)
    }

    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.migrate_to_chat_id)
    }
}

impl From<SchemaError> for ApiError {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::UnexpectedBranch { .. } => Self::new(500, error.to_string()),
            other => Self::bad_request(other),
        }
    }
}

/// Envelope around the result of one call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Ok(T),
    Err(ApiError),
}

impl<T> ApiResponse<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn ok(&self) -> Option<&T> {
        match self {
            Self::Ok(result) => Some(result),
            Self::Err(_) => None,
        }
    }

    pub fn err(&self) -> Option<&ApiError> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Ok(result) => Ok(result),
            Self::Err(error) => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Ok(result) => ApiResponse::Ok(f(result)),
            Self::Err(error) => ApiResponse::Err(error),
        }
    }

    pub fn retry_after(&self) -> Option<Duration> {
        self.err().and_then(ApiError::retry_after)
    }
}

impl<T> From<Result<T, ApiError>> for ApiResponse<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T> From<ApiResponse<T>> for Result<T, ApiError> {
    fn from(response: ApiResponse<T>) -> Self {
        response.into_result()
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ok(result) => {
                let mut state = serializer.serialize_struct("ApiResponse", 2)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("result", result)?;
                state.end()
            }
            Self::Err(error) => {
                let mut state = serializer.serialize_struct("ApiResponse", 4)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("error_code", &error.error_code)?;
                state.serialize_field("description", &error.description)?;
                match &error.parameters {
                    Some(parameters) => state.serialize_field("parameters", parameters)?,
                    None => state.skip_field("parameters")?,
                }
                state.end()
            }
        }
    }
}

/// Wire form before the `ok` flag is checked.
#[derive(Deserialize)]
struct RawResponse<T> {
    ok: bool,
    #[serde(default = "Option::default")]
    result: Option<T>,
    #[serde(default)]
    error_code: Option<i32>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Option<ResponseParameters>,
}

impl<T> TryFrom<RawResponse<T>> for ApiResponse<T> {
    type Error = &'static str;

    fn try_from(raw: RawResponse<T>) -> Result<Self, Self::Error> {
        if raw.ok {
            let result = raw.result.ok_or("successful response without `result`")?;
            return Ok(Self::Ok(result));
        }
        let error_code = raw
            .error_code
            .ok_or("failed response without `error_code`")?;
        Ok(Self::Err(ApiError {
            error_code,
            description: raw.description.unwrap_or_default(),
            parameters: raw.parameters,
        }))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawResponse::<T>::deserialize(deserializer)?;
        Self::try_from(raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::True;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_wire_form() {
        let response: ApiResponse<True> = ApiResponse::Ok(True);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"ok": true, "result": true})
        );
    }

    #[test]
    fn test_failure_wire_form() {
        let response: ApiResponse<True> = ApiResponse::Err(ApiError::too_many_requests(3));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "ok": false,
                "error_code": 429,
                "description": "Too Many Requests: retry after 3",
                "parameters": {"retry_after": 3}
            })
        );
        let back: ApiResponse<True> = serde_json::from_value(value).unwrap();
        assert_eq!(back.retry_after(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_failure_without_parameters() {
        let response: ApiResponse<i64> = serde_json::from_value(json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        }))
        .unwrap();
        let error = response.into_result().unwrap_err();
        assert_eq!(error.to_string(), "400: Bad Request: chat not found");
        assert_eq!(error.retry_after(), None);
    }

    #[test]
    fn test_success_requires_result() {
        let err = serde_json::from_value::<ApiResponse<i64>>(json!({"ok": true})).unwrap_err();
        assert!(err.to_string().contains("without `result`"));
    }

    #[test]
    fn test_schema_errors_map_to_codes() {
        let rejected = ApiError::from(SchemaError::Validation("text: too long".into()));
        assert_eq!(rejected.error_code, 400);
        assert!(rejected.description.starts_with("Bad Request: "));

        let mismatch = ApiError::from(SchemaError::UnexpectedBranch {
            operation: "editMessageText".into(),
            expected: "true".into(),
            actual: "message".into(),
        });
        assert_eq!(mismatch.error_code, 500);
    }

    #[test]
    fn test_migration_hint() {
        let error = ApiError {
            error_code: 400,
            description: "Bad Request: group chat was upgraded to a supergroup chat".into(),
            parameters: Some(ResponseParameters {
                migrate_to_chat_id: Some(-1001234),
                retry_after: None,
            }),
        };
        assert_eq!(error.migrate_to_chat_id(), Some(-1001234));
    }
}
