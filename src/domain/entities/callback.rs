//! Callback queries from inline keyboard buttons.

use super::message::Message;
use super::user::User;
use crate::schema_struct;

schema_struct! {
    /// A press of a callback button in an inline keyboard.
    pub struct CallbackQuery [] {
        pub id: String,
        pub from: User,
        /// Absent if the message is too old or was sent via inline mode.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub message: Option<Box<Message>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub inline_message_id: Option<String>,
        /// Global identifier of the chat the message was sent to.
        pub chat_instance: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub data: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub game_short_name: Option<String>,
    }
}

impl CallbackQuery {
    /// Whether the button belongs to a message sent via inline mode.
    pub fn is_inline(&self) -> bool {
        self.inline_message_id.is_some()
    }
}
