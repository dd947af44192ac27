//! Parameters of the operations that send messages.

use validator::{Validate, ValidationError};

use crate::domain::entities::{InlineKeyboardMarkup, MediaGroupInput, MessageEntity, ReplyMarkup};
use crate::domain::value_objects::{ChatAction, ChatId, InputFile, ParseMode, PollType};
use crate::schema_struct;

schema_struct! {
    /// Delivery options shared by the send operations.
    #[derive(Default)]
    pub struct SendOptions [] {
        /// Send silently; users receive a notification with no sound.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_notification: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_to_message_id: Option<i64>,
        /// Send even if the replied-to message is not found.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub allow_sending_without_reply: Option<bool>,
    }
}

impl SendOptions {
    pub fn reply_to(message_id: i64) -> Self {
        Self {
            reply_to_message_id: Some(message_id),
            ..Default::default()
        }
    }

    pub fn silent() -> Self {
        Self {
            disable_notification: Some(true),
            ..Default::default()
        }
    }
}

schema_struct! {
    /// Caption, its parse mode and its entities.
    #[derive(Default, Validate)]
    pub struct CaptionOptions [] {
        #[validate(length(max = 1024, message = "Caption must be at most 1024 characters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption_entities: Option<Vec<MessageEntity>>,
    }
}

impl CaptionOptions {
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..Default::default()
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendMessage [options: SendOptions] {
        pub chat_id: ChatId,
        #[validate(length(min = 1, max = 4096, message = "Text must be 1-4096 characters"))]
        pub text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub entities: Option<Vec<MessageEntity>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_web_page_preview: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

impl SendMessage {
    pub fn new(chat_id: impl Into<ChatId>, text: impl Into<String>) -> Self {
        Self {
            options: SendOptions::default(),
            chat_id: chat_id.into(),
            text: text.into(),
            parse_mode: None,
            entities: None,
            disable_web_page_preview: None,
            reply_markup: None,
        }
    }

    pub fn parse_mode(mut self, parse_mode: ParseMode) -> Self {
        self.parse_mode = Some(parse_mode);
        self
    }

    pub fn reply_markup(mut self, markup: impl Into<ReplyMarkup>) -> Self {
        self.reply_markup = Some(markup.into());
        self
    }

    pub fn options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct ForwardMessage [] {
        pub chat_id: ChatId,
        pub from_chat_id: ChatId,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_notification: Option<bool>,
        pub message_id: i64,
    }
}

schema_struct! {
    /// Copy a message without a link to the original.
    #[derive(Validate)]
    pub struct CopyMessage [options: SendOptions] {
        pub chat_id: ChatId,
        pub from_chat_id: ChatId,
        pub message_id: i64,
        #[validate(length(max = 1024, message = "Caption must be at most 1024 characters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption_entities: Option<Vec<MessageEntity>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendPhoto<F> [#[validate(nested)] caption: CaptionOptions, options: SendOptions] {
        pub chat_id: ChatId,
        pub photo: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

impl<F> SendPhoto<F> {
    pub fn new(chat_id: impl Into<ChatId>, photo: InputFile<F>) -> Self {
        Self {
            caption: CaptionOptions::default(),
            options: SendOptions::default(),
            chat_id: chat_id.into(),
            photo,
            reply_markup: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption.caption = Some(caption.into());
        self
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendAudio<F> [#[validate(nested)] caption: CaptionOptions, options: SendOptions] {
        pub chat_id: ChatId,
        pub audio: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub performer: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        /// JPEG, at most 200 kB and 320x320.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendDocument<F> [#[validate(nested)] caption: CaptionOptions, options: SendOptions] {
        pub chat_id: ChatId,
        pub document: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_content_type_detection: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendVideo<F> [#[validate(nested)] caption: CaptionOptions, options: SendOptions] {
        pub chat_id: ChatId,
        pub video: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub height: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub supports_streaming: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendAnimation<F> [#[validate(nested)] caption: CaptionOptions, options: SendOptions] {
        pub chat_id: ChatId,
        pub animation: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub height: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    /// Voice note; OGG encoded with OPUS.
    #[derive(Validate)]
    pub struct SendVoice<F> [#[validate(nested)] caption: CaptionOptions, options: SendOptions] {
        pub chat_id: ChatId,
        pub voice: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendVideoNote<F> [options: SendOptions] {
        pub chat_id: ChatId,
        pub video_note: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        /// Video width and height, i.e. diameter of the circle.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub length: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    /// Album of photos, videos, documents or audios.
    pub struct SendMediaGroup<F> [options: SendOptions] {
        pub chat_id: ChatId,
        pub media: Vec<MediaGroupInput<F>>,
    }
}

// Expansion of `#[derive(Validate)]` with `#[validate(custom(function = "album_size"))]`
// on `media`, written out because the failure branch attaches the field as a
// param and so needs `F: Serialize`, which `schema_struct!` cannot express.
impl<F: serde::Serialize> Validate for SendMediaGroup<F> {
    fn validate(&self) -> Result<(), validator::ValidationErrors> {
        use validator::ValidateArgs;
        self.validate_with_args(())
    }
}

impl<'v_a, F: serde::Serialize> validator::ValidateArgs<'v_a> for SendMediaGroup<F> {
    type Args = ();

    fn validate_with_args(&self, _args: Self::Args) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();
        match album_size(&self.media) {
            Ok(()) => {}
            Err(mut err) => {
                err.add_param(std::borrow::Cow::from("value"), &self.media);
                errors.add("media", err);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn album_size<F>(media: &[MediaGroupInput<F>]) -> Result<(), ValidationError> {
    if !(2..=10).contains(&media.len()) {
        let mut error = ValidationError::new("album_size");
        error.message = Some("Media group must contain 2-10 items".into());
        return Err(error);
    }
    Ok(())
}

impl<F> SendMediaGroup<F> {
    pub fn new(chat_id: impl Into<ChatId>, media: Vec<MediaGroupInput<F>>) -> Self {
        Self {
            options: SendOptions::default(),
            chat_id: chat_id.into(),
            media,
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendLocation [options: SendOptions] {
        pub chat_id: ChatId,
        pub latitude: f64,
        pub longitude: f64,
        #[validate(range(min = 0.0, max = 1500.0, message = "Horizontal accuracy must be 0-1500 meters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub horizontal_accuracy: Option<f64>,
        /// Seconds the location is updated; 60-86400.
        #[validate(range(min = 60, max = 86400, message = "Live period must be 60-86400 seconds"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub live_period: Option<i64>,
        #[validate(range(min = 1, max = 360, message = "Heading must be 1-360 degrees"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub heading: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub proximity_alert_radius: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendVenue [options: SendOptions] {
        pub chat_id: ChatId,
        pub latitude: f64,
        pub longitude: f64,
        pub title: String,
        pub address: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub foursquare_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub foursquare_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub google_place_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub google_place_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendContact [options: SendOptions] {
        pub chat_id: ChatId,
        pub phone_number: String,
        pub first_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
        /// 0-2048 bytes.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub vcard: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendPoll [send: SendOptions] {
        pub chat_id: ChatId,
        #[validate(length(min = 1, max = 300, message = "Question must be 1-300 characters"))]
        pub question: String,
        #[validate(length(min = 2, max = 10, message = "Poll must have 2-10 options"))]
        pub options: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_anonymous: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub r#type: Option<PollType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub allows_multiple_answers: Option<bool>,
        /// Required for quizzes.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub correct_option_id: Option<i64>,
        #[validate(length(max = 200, message = "Explanation must be at most 200 characters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub explanation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub explanation_parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub explanation_entities: Option<Vec<MessageEntity>>,
        #[validate(range(min = 5, max = 600, message = "Open period must be 5-600 seconds"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub open_period: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub close_date: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_closed: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

impl SendPoll {
    pub fn new(chat_id: impl Into<ChatId>, question: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            send: SendOptions::default(),
            chat_id: chat_id.into(),
            question: question.into(),
            options,
            is_anonymous: None,
            r#type: None,
            allows_multiple_answers: None,
            correct_option_id: None,
            explanation: None,
            explanation_parse_mode: None,
            explanation_entities: None,
            open_period: None,
            close_date: None,
            is_closed: None,
            reply_markup: None,
        }
    }
}

schema_struct! {
    /// Animated emoji with a random value.
    #[derive(Validate)]
    pub struct SendDice [options: SendOptions] {
        pub chat_id: ChatId,
        /// One of 🎲 🎯 🏀 ⚽ 🎰; defaults to 🎲.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub emoji: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendChatAction [] {
        pub chat_id: ChatId,
        pub action: ChatAction,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendSticker<F> [options: SendOptions] {
        pub chat_id: ChatId,
        /// WEBP file, or a `file_id`/URL.
        pub sticker: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<ReplyMarkup>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SendGame [options: SendOptions] {
        /// Games cannot be sent to channels.
        pub chat_id: i64,
        pub game_short_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::Describe;
    use crate::shared::validation::validate;
    use serde_json::json;

    #[test]
    fn test_send_message_wire_form() {
        let params = SendMessage::new(42, "hi")
            .parse_mode(ParseMode::Html)
            .options(SendOptions::reply_to(7));
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"chat_id": 42, "text": "hi", "parse_mode": "HTML", "reply_to_message_id": 7})
        );
    }

    #[test]
    fn test_send_message_text_bounds() {
        assert!(validate(&SendMessage::new(42, "")).is_err());
        assert!(validate(&SendMessage::new(42, "x".repeat(4096))).is_ok());
        assert!(validate(&SendMessage::new(42, "x".repeat(4097))).is_err());
    }

    #[test]
    fn test_send_photo_fields() {
        let fields = SendPhoto::<String>::fields().unwrap();
        assert_eq!(fields.required_names(), vec!["chat_id", "photo"]);
        assert!(fields.contains("caption"));
        assert!(fields.contains("allow_sending_without_reply"));
    }

    #[test]
    fn test_media_group_size() {
        use crate::domain::value_objects::InputFile;

        let one: SendMediaGroup<String> =
            SendMediaGroup::new(1, vec![MediaGroupInput::photo(InputFile::remote("a"), None)]);
        let err = validate(&one).unwrap_err();
        assert!(err.to_string().contains("media: Media group must contain 2-10 items"));

        let eleven: SendMediaGroup<String> = SendMediaGroup::new(
            1,
            (0..11)
                .map(|i| MediaGroupInput::photo(InputFile::remote(format!("f{}", i)), None))
                .collect(),
        );
        assert!(validate(&eleven).is_err());

        let two: SendMediaGroup<String> = SendMediaGroup::new(
            1,
            vec![
                MediaGroupInput::photo(InputFile::remote("a"), None),
                MediaGroupInput::photo(InputFile::remote("b"), None),
            ],
        );
        assert!(validate(&two).is_ok());
    }

    #[test]
    fn test_poll_options_bounds() {
        let poll = SendPoll::new(1, "Tea?", vec!["yes".into()]);
        assert!(validate(&poll).is_err());
        let poll = SendPoll::new(1, "Tea?", vec!["yes".into(), "no".into()]);
        assert!(validate(&poll).is_ok());
    }
}
