//! The literal `true` result.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::schema::{FieldType, Shape};

/// Success flag carrying no data. Only the JSON literal `true` deserializes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct True;

impl Serialize for True {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for True {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(True)
        } else {
            Err(de::Error::invalid_value(Unexpected::Bool(false), &"true"))
        }
    }
}

impl Shape for True {
    fn shape() -> FieldType {
        FieldType::True
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_true_deserializes() {
        assert_eq!(serde_json::from_str::<True>("true").unwrap(), True);
        assert!(serde_json::from_str::<True>("false").is_err());
        assert!(serde_json::from_str::<True>("{}").is_err());
        assert_eq!(serde_json::to_string(&True).unwrap(), "true");
    }
}
