//! Parameters of the operations that change or remove sent messages.
//!
//! Every edit addresses its message through a [`MessageTarget`]; see
//! [`target`](crate::application::methods::target) for how the target form
//! selects the result.

use validator::Validate;

use crate::application::methods::target::MessageTarget;
use crate::domain::entities::{InlineKeyboardMarkup, InputMedia, MessageEntity};
use crate::domain::value_objects::{ChatId, ParseMode};
use crate::schema_struct;

schema_struct! {
    #[derive(Validate)]
    pub struct EditMessageText [target: MessageTarget] {
        #[validate(length(min = 1, max = 4096, message = "Text must be 1-4096 characters"))]
        pub text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub entities: Option<Vec<MessageEntity>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_web_page_preview: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

impl EditMessageText {
    pub fn new(target: MessageTarget, text: impl Into<String>) -> Self {
        Self {
            target,
            text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct EditMessageCaption [target: MessageTarget] {
        #[validate(length(max = 1024, message = "Caption must be at most 1024 characters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption_entities: Option<Vec<MessageEntity>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

impl EditMessageCaption {
    pub fn new(target: MessageTarget, caption: Option<String>) -> Self {
        Self {
            target,
            caption,
            parse_mode: None,
            caption_entities: None,
            reply_markup: None,
        }
    }
}

schema_struct! {
    /// Replace the media of an animation, audio, document, photo or video
    /// message. Inline messages cannot take a fresh upload.
    #[derive(Validate)]
    pub struct EditMessageMedia<F> [target: MessageTarget] {
        pub media: InputMedia<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

impl<F> EditMessageMedia<F> {
    pub fn new(target: MessageTarget, media: InputMedia<F>) -> Self {
        Self {
            target,
            media,
            reply_markup: None,
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct EditMessageReplyMarkup [target: MessageTarget] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct EditMessageLiveLocation [target: MessageTarget] {
        pub latitude: f64,
        pub longitude: f64,
        #[validate(range(min = 0.0, max = 1500.0, message = "Horizontal accuracy must be 0-1500 meters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub horizontal_accuracy: Option<f64>,
        #[validate(range(min = 1, max = 360, message = "Heading must be 1-360 degrees"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heading: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub proximity_alert_radius: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct StopMessageLiveLocation [target: MessageTarget] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

schema_struct! {
    /// Stop a poll sent by the bot.
    #[derive(Validate)]
    pub struct StopPoll [] {
        pub chat_id: ChatId,
        pub message_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

schema_struct! {
    /// Delete a message, including service messages. Only messages younger
    /// than 48 hours can be deleted.
    #[derive(Validate)]
    pub struct DeleteMessage [] {
        pub chat_id: ChatId,
        pub message_id: i64,
    }
}

impl DeleteMessage {
    pub fn new(chat_id: impl Into<ChatId>, message_id: i64) -> Self {
        Self {
            chat_id: chat_id.into(),
            message_id,
        }
    }
}
