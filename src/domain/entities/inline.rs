//! Inline mode: queries, chosen results and the results a bot answers with.

use super::markup::InlineKeyboardMarkup;
use super::media::Location;
use super::message::MessageEntity;
use super::user::User;
use crate::domain::value_objects::ParseMode;
use crate::{schema_struct, tagged_family};

schema_struct! {
    /// An incoming inline query.
    pub struct InlineQuery [] {
        pub id: String,
        pub from: User,
        /// Up to 256 characters.
        pub query: String,
        /// Offset of the results to be returned, controlled by the bot.
        pub offset: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub chat_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<Location>,
    }
}

schema_struct! {
    /// A result of an inline query that was chosen by the user.
    pub struct ChosenInlineResult [] {
        pub result_id: String,
        pub from: User,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<Location>,
        /// Only set when the message has an inline keyboard attached.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub inline_message_id: Option<String>,
        pub query: String,
    }
}

schema_struct! {
    /// Content of a text message sent as the result of an inline query.
    pub struct InputTextMessageContent [] {
        /// 1-4096 characters.
        pub message_text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub entities: Option<Vec<MessageEntity>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_web_page_preview: Option<bool>,
    }
}

impl InputTextMessageContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            message_text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
        }
    }
}

schema_struct! {
    /// Fields of every inline query result.
    pub struct InlineResultBase [] {
        /// Unique identifier of the result, 1-64 bytes.
        pub id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

schema_struct! {
    pub struct InlineResultCaption [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption_entities: Option<Vec<MessageEntity>>,
    }
}

schema_struct! {
    pub struct InlineQueryResultArticle [base: InlineResultBase] {
        pub title: String,
        pub input_message_content: InputTextMessageContent,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub hide_url: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb_url: Option<String>,
    }
}

schema_struct! {
    pub struct InlineQueryResultPhoto [base: InlineResultBase, caption: InlineResultCaption] {
        /// JPEG, at most 5MB.
        pub photo_url: String,
        pub thumb_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo_width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo_height: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub input_message_content: Option<InputTextMessageContent>,
    }
}

schema_struct! {
    pub struct InlineQueryResultDocument [base: InlineResultBase, caption: InlineResultCaption] {
        pub title: String,
        pub document_url: String,
        /// Either `application/pdf` or `application/zip`.
        pub mime_type: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub input_message_content: Option<InputTextMessageContent>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb_url: Option<String>,
    }
}

schema_struct! {
    pub struct InlineQueryResultLocation [base: InlineResultBase] {
        pub latitude: f64,
        pub longitude: f64,
        pub title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub horizontal_accuracy: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub live_period: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub input_message_content: Option<InputTextMessageContent>,
    }
}

tagged_family! {
    /// One result of an inline query.
    pub enum InlineQueryResult: tag "type" {
        "article" => Article(InlineQueryResultArticle),
        "photo" => Photo(InlineQueryResultPhoto),
        "document" => Document(InlineQueryResultDocument),
        "location" => Location(InlineQueryResultLocation),
    }
}

impl InlineQueryResult {
    pub fn article(
        id: impl Into<String>,
        title: impl Into<String>,
        content: InputTextMessageContent,
    ) -> Self {
        Self::Article(InlineQueryResultArticle {
            base: InlineResultBase {
                id: id.into(),
                reply_markup: None,
            },
            title: title.into(),
            input_message_content: content,
            url: None,
            hide_url: None,
            description: None,
            thumb_url: None,
        })
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Article(r) => &r.base.id,
            Self::Photo(r) => &r.base.id,
            Self::Document(r) => &r.base.id,
            Self::Location(r) => &r.base.id,
        }
    }
}
