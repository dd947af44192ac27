//! Messages.
//!
//! `Message` is a keyed family: a message's kind is the one content or
//! service key it carries (`text`, `photo`, `new_chat_title`, ...). Content
//! messages compose `CommonMessage`; media that may carry a caption also
//! compose `Captionable`. Sub-families name the subsets that operations
//! return, reusing the same variant structs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chat::Chat;
use super::game::Game;
use super::markup::InlineKeyboardMarkup;
use super::media::{
    Animation, Audio, Contact, Dice, Document, Location, PhotoSize, Sticker, Venue, Video,
    VideoNote, Voice,
};
use super::payment::{Invoice, SuccessfulPayment};
use super::poll::Poll;
use super::user::User;
use crate::domain::schema::{FieldType, Shape};
use crate::domain::value_objects::True;
use crate::shared::time::from_unix;
use crate::{keyed_family, literal_enum, schema_struct};

literal_enum! {
    pub enum MessageEntityType {
        "mention" => Mention,
        "hashtag" => Hashtag,
        "cashtag" => Cashtag,
        "bot_command" => BotCommand,
        "url" => Url,
        "email" => Email,
        "phone_number" => PhoneNumber,
        "bold" => Bold,
        "italic" => Italic,
        "underline" => Underline,
        "strikethrough" => Strikethrough,
        "code" => Code,
        "pre" => Pre,
        "text_link" => TextLink,
        "text_mention" => TextMention,
    }
}

schema_struct! {
    /// A special entity in a text message: hashtag, URL, bold span, ...
    pub struct MessageEntity [] {
        pub r#type: MessageEntityType,
        /// Offset in UTF-16 code units.
        pub offset: i64,
        /// Length in UTF-16 code units.
        pub length: i64,
        /// For `text_link` only.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub url: Option<String>,
        /// For `text_mention` only.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub user: Option<User>,
        /// For `pre` only.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub language: Option<String>,
    }
}

impl MessageEntity {
    /// Slice the entity out of the text it belongs to.
    pub fn extract(&self, text: &str) -> Option<String> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let start = usize::try_from(self.offset).ok()?;
        let end = start.checked_add(usize::try_from(self.length).ok()?)?;
        let slice = units.get(start..end)?;
        String::from_utf16(slice).ok()
    }
}

schema_struct! {
    /// Identifier of a copied message.
    pub struct MessageId [] {
        pub message_id: i64,
    }
}

schema_struct! {
    /// Fields every message has, including service messages.
    pub struct ServiceMessage [] {
        pub message_id: i64,
        /// Empty for messages sent to channels.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub from: Option<User>,
        /// Sender of messages sent on behalf of a chat.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sender_chat: Option<Chat>,
        pub date: i64,
        pub chat: Chat,
    }
}

schema_struct! {
    /// Fields of every content message.
    pub struct CommonMessage [service: ServiceMessage] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub forward_from: Option<User>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub forward_from_chat: Option<Chat>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub forward_from_message_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub forward_signature: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub forward_sender_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub forward_date: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_to_message: Option<Box<Message>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub via_bot: Option<User>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub author_signature: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub reply_markup: Option<InlineKeyboardMarkup>,
    }
}

schema_struct! {
    pub struct Captionable [] {
        /// 0-1024 characters.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub caption_entities: Option<Vec<MessageEntity>>,
    }
}

schema_struct! {
    /// Media that can be sent as part of an album.
    pub struct MediaGroupMember [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub media_group_id: Option<String>,
    }
}

schema_struct! {
    pub struct TextMessage [common: CommonMessage] {
        pub text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub entities: Option<Vec<MessageEntity>>,
    }
}

schema_struct! {
    /// Animation message. The wire form also repeats the file as `document`,
    /// which is not part of this variant.
    pub struct AnimationMessage [common: CommonMessage, caption: Captionable] {
        pub animation: Animation,
    }
}

schema_struct! {
    pub struct AudioMessage [common: CommonMessage, caption: Captionable, group: MediaGroupMember] {
        pub audio: Audio,
    }
}

schema_struct! {
    pub struct DocumentMessage [common: CommonMessage, caption: Captionable, group: MediaGroupMember] {
        pub document: Document,
    }
}

schema_struct! {
    pub struct PhotoMessage [common: CommonMessage, caption: Captionable, group: MediaGroupMember] {
        /// Available sizes of the photo.
        pub photo: Vec<PhotoSize>,
    }
}

schema_struct! {
    pub struct StickerMessage [common: CommonMessage] {
        pub sticker: Sticker,
    }
}

schema_struct! {
    pub struct VideoMessage [common: CommonMessage, caption: Captionable, group: MediaGroupMember] {
        pub video: Video,
    }
}

schema_struct! {
    pub struct VideoNoteMessage [common: CommonMessage] {
        pub video_note: VideoNote,
    }
}

schema_struct! {
    pub struct VoiceMessage [common: CommonMessage, caption: Captionable] {
        pub voice: Voice,
    }
}

schema_struct! {
    pub struct ContactMessage [common: CommonMessage] {
        pub contact: Contact,
    }
}

schema_struct! {
    pub struct DiceMessage [common: CommonMessage] {
        pub dice: Dice,
    }
}

schema_struct! {
    pub struct GameMessage [common: CommonMessage] {
        pub game: Game,
    }
}

schema_struct! {
    pub struct PollMessage [common: CommonMessage] {
        pub poll: Poll,
    }
}

schema_struct! {
    /// Venue message. The wire form also repeats the point as `location`,
    /// which is not part of this variant.
    pub struct VenueMessage [common: CommonMessage] {
        pub venue: Venue,
    }
}

schema_struct! {
    pub struct LocationMessage [common: CommonMessage] {
        pub location: Location,
    }
}

schema_struct! {
    pub struct InvoiceMessage [common: CommonMessage] {
        pub invoice: Invoice,
    }
}

schema_struct! {
    pub struct NewChatMembersMessage [service: ServiceMessage] {
        pub new_chat_members: Vec<User>,
    }
}

schema_struct! {
    pub struct LeftChatMemberMessage [service: ServiceMessage] {
        pub left_chat_member: User,
    }
}

schema_struct! {
    pub struct NewChatTitleMessage [service: ServiceMessage] {
        pub new_chat_title: String,
    }
}

schema_struct! {
    pub struct NewChatPhotoMessage [service: ServiceMessage] {
        pub new_chat_photo: Vec<PhotoSize>,
    }
}

schema_struct! {
    pub struct DeleteChatPhotoMessage [service: ServiceMessage] {
        pub delete_chat_photo: True,
    }
}

schema_struct! {
    pub struct PinnedMessageMessage [service: ServiceMessage] {
        /// Never carries a `reply_to_message` of its own.
        pub pinned_message: Box<Message>,
    }
}

schema_struct! {
    pub struct SuccessfulPaymentMessage [service: ServiceMessage] {
        pub successful_payment: SuccessfulPayment,
    }
}

keyed_family! {
    /// Any message. Animation messages repeat their file under `document`
    /// and venue messages repeat their point under `location`.
    pub enum Message {
        "text" => Text(TextMessage),
        "animation" => Animation(AnimationMessage) repeats ["document"],
        "audio" => Audio(AudioMessage),
        "document" => Document(DocumentMessage),
        "photo" => Photo(PhotoMessage),
        "sticker" => Sticker(StickerMessage),
        "video" => Video(VideoMessage),
        "video_note" => VideoNote(VideoNoteMessage),
        "voice" => Voice(VoiceMessage),
        "contact" => Contact(ContactMessage),
        "dice" => Dice(DiceMessage),
        "game" => Game(GameMessage),
        "poll" => Poll(PollMessage),
        "venue" => Venue(VenueMessage) repeats ["location"],
        "location" => Location(LocationMessage),
        "invoice" => Invoice(InvoiceMessage),
        "new_chat_members" => NewChatMembers(NewChatMembersMessage),
        "left_chat_member" => LeftChatMember(LeftChatMemberMessage),
        "new_chat_title" => NewChatTitle(NewChatTitleMessage),
        "new_chat_photo" => NewChatPhoto(NewChatPhotoMessage),
        "delete_chat_photo" => DeleteChatPhoto(DeleteChatPhotoMessage),
        "pinned_message" => PinnedMessage(PinnedMessageMessage),
        "successful_payment" => SuccessfulPayment(SuccessfulPaymentMessage),
    }
}

keyed_family! {
    /// Messages that may carry a caption.
    pub enum CaptionableMessage {
        "animation" => Animation(AnimationMessage) repeats ["document"],
        "audio" => Audio(AudioMessage),
        "document" => Document(DocumentMessage),
        "photo" => Photo(PhotoMessage),
        "video" => Video(VideoMessage),
        "voice" => Voice(VoiceMessage),
    }
}

keyed_family! {
    /// Messages whose media can be replaced by `editMessageMedia`.
    pub enum MediaMessage {
        "animation" => Animation(AnimationMessage) repeats ["document"],
        "audio" => Audio(AudioMessage),
        "document" => Document(DocumentMessage),
        "photo" => Photo(PhotoMessage),
        "video" => Video(VideoMessage),
    }
}

keyed_family! {
    /// Messages that can be part of an album.
    pub enum MediaGroupMessage {
        "audio" => Audio(AudioMessage),
        "document" => Document(DocumentMessage),
        "photo" => Photo(PhotoMessage),
        "video" => Video(VideoMessage),
    }
}

impl Message {
    /// Fields shared by every message kind.
    pub fn service(&self) -> &ServiceMessage {
        match self {
            Self::Text(m) => &m.common.service,
            Self::Animation(m) => &m.common.service,
            Self::Audio(m) => &m.common.service,
            Self::Document(m) => &m.common.service,
            Self::Photo(m) => &m.common.service,
            Self::Sticker(m) => &m.common.service,
            Self::Video(m) => &m.common.service,
            Self::VideoNote(m) => &m.common.service,
            Self::Voice(m) => &m.common.service,
            Self::Contact(m) => &m.common.service,
            Self::Dice(m) => &m.common.service,
            Self::Game(m) => &m.common.service,
            Self::Poll(m) => &m.common.service,
            Self::Venue(m) => &m.common.service,
            Self::Location(m) => &m.common.service,
            Self::Invoice(m) => &m.common.service,
            Self::NewChatMembers(m) => &m.service,
            Self::LeftChatMember(m) => &m.service,
            Self::NewChatTitle(m) => &m.service,
            Self::NewChatPhoto(m) => &m.service,
            Self::DeleteChatPhoto(m) => &m.service,
            Self::PinnedMessage(m) => &m.service,
            Self::SuccessfulPayment(m) => &m.service,
        }
    }

    pub fn message_id(&self) -> i64 {
        self.service().message_id
    }

    pub fn chat(&self) -> &Chat {
        &self.service().chat
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        from_unix(self.service().date)
    }

    /// Whether this is a service message rather than user content.
    pub fn is_service(&self) -> bool {
        matches!(
            self,
            Self::NewChatMembers(_)
                | Self::LeftChatMember(_)
                | Self::NewChatTitle(_)
                | Self::NewChatPhoto(_)
                | Self::DeleteChatPhoto(_)
                | Self::PinnedMessage(_)
                | Self::SuccessfulPayment(_)
        )
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(m) => Some(&m.text),
            _ => None,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        let caption = match self {
            Self::Animation(m) => &m.caption,
            Self::Audio(m) => &m.caption,
            Self::Document(m) => &m.caption,
            Self::Photo(m) => &m.caption,
            Self::Video(m) => &m.caption,
            Self::Voice(m) => &m.caption,
            _ => return None,
        };
        caption.caption.as_deref()
    }
}

impl From<CaptionableMessage> for Message {
    fn from(message: CaptionableMessage) -> Self {
        match message {
            CaptionableMessage::Animation(m) => Self::Animation(m),
            CaptionableMessage::Audio(m) => Self::Audio(m),
            CaptionableMessage::Document(m) => Self::Document(m),
            CaptionableMessage::Photo(m) => Self::Photo(m),
            CaptionableMessage::Video(m) => Self::Video(m),
            CaptionableMessage::Voice(m) => Self::Voice(m),
        }
    }
}

impl From<MediaMessage> for Message {
    fn from(message: MediaMessage) -> Self {
        match message {
            MediaMessage::Animation(m) => Self::Animation(m),
            MediaMessage::Audio(m) => Self::Audio(m),
            MediaMessage::Document(m) => Self::Document(m),
            MediaMessage::Photo(m) => Self::Photo(m),
            MediaMessage::Video(m) => Self::Video(m),
        }
    }
}

impl From<MediaGroupMessage> for Message {
    fn from(message: MediaGroupMessage) -> Self {
        match message {
            MediaGroupMessage::Audio(m) => Self::Audio(m),
            MediaGroupMessage::Document(m) => Self::Document(m),
            MediaGroupMessage::Photo(m) => Self::Photo(m),
            MediaGroupMessage::Video(m) => Self::Video(m),
        }
    }
}

/// A message variant as returned after an edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edited<M> {
    #[serde(flatten)]
    pub message: M,
    pub edit_date: i64,
}

impl<M> Edited<M> {
    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        from_unix(self.edit_date)
    }

    pub fn into_inner(self) -> M {
        self.message
    }
}

impl<M: Shape> Shape for Edited<M> {
    fn shape() -> FieldType {
        FieldType::entity(format!("Edited<{}>", M::shape()))
    }
}
