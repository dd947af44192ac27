//! Keyboards and reply markup.

use crate::domain::value_objects::{PollType, True};
use crate::{keyed_family, schema_struct};

schema_struct! {
    /// One button of an inline keyboard. Exactly one optional field must be
    /// set.
    #[derive(Default)]
    pub struct InlineKeyboardButton [] {
        pub text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub url: Option<String>,
        /// 1-64 bytes.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub callback_data: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub switch_inline_query: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub switch_inline_query_current_chat: Option<String>,
        /// Must be the first button in the first row.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pay: Option<bool>,
    }
}

impl InlineKeyboardButton {
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: Some(data.into()),
            ..Default::default()
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }
}

schema_struct! {
    pub struct InlineKeyboardMarkup [] {
        pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
    }
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }
}

schema_struct! {
    pub struct KeyboardButtonPollType [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub r#type: Option<PollType>,
    }
}

schema_struct! {
    #[derive(Default)]
    pub struct KeyboardButton [] {
        pub text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub request_contact: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub request_location: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub request_poll: Option<KeyboardButtonPollType>,
    }
}

schema_struct! {
    /// Custom keyboard with reply options.
    pub struct ReplyKeyboardMarkup [] {
        pub keyboard: Vec<Vec<KeyboardButton>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub resize_keyboard: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub one_time_keyboard: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub selective: Option<bool>,
    }
}

schema_struct! {
    pub struct ReplyKeyboardRemove [] {
        pub remove_keyboard: True,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub selective: Option<bool>,
    }
}

schema_struct! {
    /// Shows a reply interface to the user, as if they had selected
    /// "Reply" on the bot's message.
    pub struct ForceReply [] {
        pub force_reply: True,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub selective: Option<bool>,
    }
}

keyed_family! {
    /// Any markup attachable to a sent message.
    pub enum ReplyMarkup {
        "inline_keyboard" => InlineKeyboard(InlineKeyboardMarkup),
        "keyboard" => Keyboard(ReplyKeyboardMarkup),
        "remove_keyboard" => RemoveKeyboard(ReplyKeyboardRemove),
        "force_reply" => ForceReply(ForceReply),
    }
}

impl ReplyMarkup {
    pub fn remove() -> Self {
        Self::RemoveKeyboard(ReplyKeyboardRemove {
            remove_keyboard: True,
            selective: None,
        })
    }

    pub fn force_reply() -> Self {
        Self::ForceReply(ForceReply {
            force_reply: True,
            selective: None,
        })
    }
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(markup: InlineKeyboardMarkup) -> Self {
        Self::InlineKeyboard(markup)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(markup: ReplyKeyboardMarkup) -> Self {
        Self::Keyboard(markup)
    }
}
