//! Message targets and conditional edit results.
//!
//! Edit operations address a message either by chat and message id or by an
//! inline message handle. The form of the target decides the form of the
//! success result: the edited message for the former, the literal `true`
//! for the latter.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Edited;
use crate::domain::schema::{Describe, FieldSet, FieldSpec, FieldType, Shape};
use crate::domain::value_objects::{ChatId, True};
use crate::shared::error::SchemaError;

/// Which success branch of a conditional result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultBranch {
    /// The updated entity.
    Message,
    /// The literal `true`.
    True,
}

impl ResultBranch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::True => "true",
        }
    }
}

impl fmt::Display for ResultBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The message an edit applies to. Exactly one form is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageTarget {
    Chat { chat_id: ChatId, message_id: i64 },
    Inline { inline_message_id: String },
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self::Chat {
            chat_id: chat_id.into(),
            message_id,
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        Self::Inline {
            inline_message_id: inline_message_id.into(),
        }
    }

    /// The success branch this target selects.
    pub fn expected_branch(&self) -> ResultBranch {
        match self {
            Self::Chat { .. } => ResultBranch::Message,
            Self::Inline { .. } => ResultBranch::True,
        }
    }
}

impl Describe for MessageTarget {
    const NAME: &'static str = "MessageTarget";

    /// Every target field is optional on its own; the pairing rule is checked
    /// separately.
    fn fields() -> Result<FieldSet, SchemaError> {
        let mut fields = FieldSet::new();
        fields.insert(FieldSpec::optional("chat_id", ChatId::shape()), Self::NAME)?;
        fields.insert(FieldSpec::optional("message_id", FieldType::Integer), Self::NAME)?;
        fields.insert(
            FieldSpec::optional("inline_message_id", FieldType::String),
            Self::NAME,
        )?;
        Ok(fields)
    }
}

/// Parameter names that make up the two target forms.
pub const CHAT_TARGET: [&str; 2] = ["chat_id", "message_id"];
pub const INLINE_TARGET: &str = "inline_message_id";

/// Result of an edit: the edited message, or `true` for inline messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditResult<M> {
    Message(Edited<M>),
    True(True),
}

impl<M> EditResult<M> {
    pub fn branch(&self) -> ResultBranch {
        match self {
            Self::Message(_) => ResultBranch::Message,
            Self::True(_) => ResultBranch::True,
        }
    }

    pub fn as_message(&self) -> Option<&Edited<M>> {
        match self {
            Self::Message(message) => Some(message),
            Self::True(_) => None,
        }
    }

    pub fn into_message(self) -> Option<Edited<M>> {
        match self {
            Self::Message(message) => Some(message),
            Self::True(_) => None,
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Self::True(_))
    }
}

impl<M: Shape> Shape for EditResult<M> {
    fn shape() -> FieldType {
        FieldType::union([Edited::<M>::shape(), FieldType::True])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::TextMessage;
    use serde_json::json;

    #[test]
    fn test_target_selects_branch() {
        assert_eq!(
            MessageTarget::chat(42, 7).expected_branch(),
            ResultBranch::Message
        );
        assert_eq!(
            MessageTarget::inline("abc").expected_branch(),
            ResultBranch::True
        );
    }

    #[test]
    fn test_target_wire_forms() {
        assert_eq!(
            serde_json::to_value(MessageTarget::chat(42, 7)).unwrap(),
            json!({"chat_id": 42, "message_id": 7})
        );
        let target: MessageTarget =
            serde_json::from_value(json!({"inline_message_id": "abc"})).unwrap();
        assert_eq!(target, MessageTarget::inline("abc"));
    }

    #[test]
    fn test_target_fields_are_optional() {
        let fields = MessageTarget::fields().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields.required().count(), 0);
    }

    #[test]
    fn test_edit_result_true_branch() {
        let result: EditResult<TextMessage> = serde_json::from_value(json!(true)).unwrap();
        assert!(result.is_true());
        assert_eq!(result.branch(), ResultBranch::True);
        assert!(serde_json::from_value::<EditResult<TextMessage>>(json!(false)).is_err());
    }

    #[test]
    fn test_edit_result_shape_is_a_union() {
        assert_eq!(
            EditResult::<TextMessage>::shape().to_string(),
            "Edited<TextMessage> | true"
        );
    }
}
