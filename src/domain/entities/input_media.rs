//! Media to be sent, generic in the attachment representation `F`.

use super::message::MessageEntity;
use crate::domain::value_objects::{InputFile, ParseMode};
use crate::{schema_struct, tagged_family};

schema_struct! {
    #[derive(Default)]
    pub struct InputMediaCaption [] {
        /// 0-1024 characters after entity parsing.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub parse_mode: Option<ParseMode>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption_entities: Option<Vec<MessageEntity>>,
    }
}

schema_struct! {
    pub struct InputMediaPhoto<F> [caption: InputMediaCaption] {
        pub media: InputFile<F>,
    }
}

schema_struct! {
    pub struct InputMediaVideo<F> [caption: InputMediaCaption] {
        pub media: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub height: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub supports_streaming: Option<bool>,
    }
}

schema_struct! {
    pub struct InputMediaAnimation<F> [caption: InputMediaCaption] {
        pub media: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub width: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub height: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
    }
}

schema_struct! {
    pub struct InputMediaAudio<F> [caption: InputMediaCaption] {
        pub media: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub duration: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub performer: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
    }
}

schema_struct! {
    pub struct InputMediaDocument<F> [caption: InputMediaCaption] {
        pub media: InputFile<F>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub thumb: Option<InputFile<F>>,
        /// Disables automatic content type detection for uploaded files.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_content_type_detection: Option<bool>,
    }
}

tagged_family! {
    /// Replacement media for `editMessageMedia`.
    pub enum InputMedia<F>: tag "type" {
        "animation" => Animation(InputMediaAnimation<F>),
        "document" => Document(InputMediaDocument<F>),
        "audio" => Audio(InputMediaAudio<F>),
        "photo" => Photo(InputMediaPhoto<F>),
        "video" => Video(InputMediaVideo<F>),
    }
}

tagged_family! {
    /// Media that can be grouped into an album by `sendMediaGroup`.
    pub enum MediaGroupInput<F>: tag "type" {
        "audio" => Audio(InputMediaAudio<F>),
        "document" => Document(InputMediaDocument<F>),
        "photo" => Photo(InputMediaPhoto<F>),
        "video" => Video(InputMediaVideo<F>),
    }
}

impl<F> InputMedia<F> {
    pub fn photo(media: InputFile<F>) -> Self {
        Self::Photo(InputMediaPhoto {
            caption: InputMediaCaption::default(),
            media,
        })
    }

    /// The primary file of the media.
    pub fn media(&self) -> &InputFile<F> {
        match self {
            Self::Animation(m) => &m.media,
            Self::Document(m) => &m.media,
            Self::Audio(m) => &m.media,
            Self::Photo(m) => &m.media,
            Self::Video(m) => &m.media,
        }
    }
}

impl<F> MediaGroupInput<F> {
    pub fn photo(media: InputFile<F>, caption: Option<String>) -> Self {
        Self::Photo(InputMediaPhoto {
            caption: InputMediaCaption {
                caption,
                ..Default::default()
            },
            media,
        })
    }

    pub fn media(&self) -> &InputFile<F> {
        match self {
            Self::Audio(m) => &m.media,
            Self::Document(m) => &m.media,
            Self::Photo(m) => &m.media,
            Self::Video(m) => &m.media,
        }
    }

    /// Number of files the item uploads, counting the thumbnail.
    pub fn upload_count(&self) -> usize {
        let thumb = match self {
            Self::Audio(m) => m.thumb.as_ref(),
            Self::Document(m) => m.thumb.as_ref(),
            Self::Photo(_) => None,
            Self::Video(m) => m.thumb.as_ref(),
        };
        [Some(self.media()), thumb]
            .into_iter()
            .flatten()
            .filter(|f| f.is_upload())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{Family, FieldType};
    use serde_json::json;

    #[test]
    fn test_input_media_families_are_disjoint() {
        InputMedia::<String>::spec().unwrap().check_disjoint().unwrap();
        MediaGroupInput::<String>::spec().unwrap().check_disjoint().unwrap();
    }

    #[test]
    fn test_media_positions_are_attachments() {
        let spec = InputMedia::<String>::spec().unwrap();
        let video = spec.resolved("video").unwrap();
        assert_eq!(video.get("media").unwrap().ty, FieldType::Attachment);
        assert_eq!(video.get("thumb").unwrap().ty, FieldType::Attachment);
        assert!(spec.mentions_attachment());
    }

    #[test]
    fn test_photo_wire_form() {
        let media: InputMedia<u32> = InputMedia::photo(InputFile::remote("AgAD"));
        assert_eq!(
            serde_json::to_value(&media).unwrap(),
            json!({"type": "photo", "media": "AgAD"})
        );
        assert_eq!(media.kind(), "photo");
    }

    #[test]
    fn test_upload_count() {
        let item: MediaGroupInput<u32> = MediaGroupInput::photo(InputFile::upload(1), None);
        assert_eq!(item.upload_count(), 1);
        let remote: MediaGroupInput<u32> = MediaGroupInput::photo(InputFile::remote("x"), None);
        assert_eq!(remote.upload_count(), 0);
    }
}
