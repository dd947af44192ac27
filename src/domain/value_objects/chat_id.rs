//! Chat identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::schema::{FieldType, Shape};

/// Unique identifier of the target chat or username of the target channel
/// (in the format `@channelusername`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl ChatId {
    pub fn is_username(&self) -> bool {
        matches!(self, Self::Username(_))
    }

    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Username(_) => None,
        }
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatId {
    fn from(username: &str) -> Self {
        Self::Username(username.to_string())
    }
}

impl From<String> for ChatId {
    fn from(username: String) -> Self {
        Self::Username(username)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Username(username) => write!(f, "{}", username),
        }
    }
}

impl Shape for ChatId {
    fn shape() -> FieldType {
        FieldType::union([FieldType::Integer, FieldType::String])
    }
}
