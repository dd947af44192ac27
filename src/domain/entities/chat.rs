//! Chats and the chats returned by `getChat`.
//!
//! Every chat kind is composed of capability fragments (`ChatBase`,
//! `UserNameChat`, `TitleChat`). The `getChat` family recomposes each kind
//! with one detail bundle, so no field is declared twice and there is exactly
//! one detailed variant per base variant.

use std::collections::BTreeMap;

use super::manage::{ChatLocation, ChatPermissions, ChatPhoto};
use super::message::Message;
use crate::domain::schema::{Detail, Detailed};
use crate::shared::error::SchemaError;
use crate::{schema_struct, tagged_family};

schema_struct! {
    /// Fields every chat has.
    pub struct ChatBase [] {
        /// Unique identifier; fits in 52 bits.
        pub id: i64,
    }
}

schema_struct! {
    pub struct UserNameChat [] {
        /// Username, for private chats, supergroups and channels if available.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub username: Option<String>,
    }
}

schema_struct! {
    pub struct TitleChat [] {
        pub title: String,
    }
}

schema_struct! {
    /// One-to-one conversation with a user.
    pub struct PrivateChat [base: ChatBase, username: UserNameChat] {
        pub first_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
    }
}

schema_struct! {
    pub struct GroupChat [base: ChatBase, title: TitleChat] {}
}

schema_struct! {
    pub struct SupergroupChat [base: ChatBase, username: UserNameChat, title: TitleChat] {}
}

schema_struct! {
    pub struct ChannelChat [base: ChatBase, username: UserNameChat, title: TitleChat] {}
}

tagged_family! {
    /// A chat as embedded in messages and updates.
    pub enum Chat: tag "type" {
        "private" => Private(PrivateChat),
        "group" => Group(GroupChat),
        "supergroup" => Supergroup(SupergroupChat),
        "channel" => Channel(ChannelChat),
    }
}

impl Chat {
    pub fn id(&self) -> i64 {
        match self {
            Self::Private(chat) => chat.base.id,
            Self::Group(chat) => chat.base.id,
            Self::Supergroup(chat) => chat.base.id,
            Self::Channel(chat) => chat.base.id,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Private(_) => None,
            Self::Group(chat) => Some(&chat.title.title),
            Self::Supergroup(chat) => Some(&chat.title.title),
            Self::Channel(chat) => Some(&chat.title.title),
        }
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Self::Private(chat) => chat.username.username.as_deref(),
            Self::Group(_) => None,
            Self::Supergroup(chat) => chat.username.username.as_deref(),
            Self::Channel(chat) => chat.username.username.as_deref(),
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self, Self::Private(_))
    }
}

schema_struct! {
    /// Returned only by `getChat`, for every chat kind.
    pub struct GetChatDetail [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub photo: Option<ChatPhoto>,
        /// The most recent pinned message, by sending date.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub pinned_message: Option<Box<Message>>,
        /// Seconds after which messages are deleted automatically.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub message_auto_delete_time: Option<i64>,
    }
}

schema_struct! {
    /// Returned only by `getChat`, for groups, supergroups and channels.
    pub struct NonPrivateDetail [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        /// Primary invite link.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub invite_link: Option<String>,
    }
}

schema_struct! {
    /// Returned only by `getChat`, for groups and supergroups.
    pub struct MultiUserDetail [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub permissions: Option<ChatPermissions>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_set_sticker_set: Option<bool>,
    }
}

schema_struct! {
    /// Returned only by `getChat`, for supergroups and channels.
    pub struct LargeChatDetail [] {
        /// Discussion group of a channel, or the channel of a discussion group.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub linked_chat_id: Option<i64>,
    }
}

schema_struct! {
    pub struct PrivateChatDetail [get: GetChatDetail] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub bio: Option<String>,
    }
}

schema_struct! {
    pub struct GroupChatDetail [get: GetChatDetail, non_private: NonPrivateDetail, multi_user: MultiUserDetail] {}
}

schema_struct! {
    pub struct SupergroupChatDetail [
        get: GetChatDetail,
        non_private: NonPrivateDetail,
        multi_user: MultiUserDetail,
        large: LargeChatDetail,
    ] {
        /// Minimum delay between consecutive messages of an unprivileged user.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub slow_mode_delay: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub sticker_set_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<ChatLocation>,
    }
}

schema_struct! {
    pub struct ChannelChatDetail [get: GetChatDetail, non_private: NonPrivateDetail, large: LargeChatDetail] {}
}

tagged_family! {
    /// A chat as returned by `getChat`.
    pub enum ChatFromGetChat: tag "type" {
        "private" => Private(Detailed<PrivateChat, PrivateChatDetail>),
        "group" => Group(Detailed<GroupChat, GroupChatDetail>),
        "supergroup" => Supergroup(Detailed<SupergroupChat, SupergroupChatDetail>),
        "channel" => Channel(Detailed<ChannelChat, ChannelChatDetail>),
    }
}

impl ChatFromGetChat {
    /// Drop the `getChat` details.
    pub fn into_chat(self) -> Chat {
        match self {
            Self::Private(chat) => Chat::Private(chat.base),
            Self::Group(chat) => Chat::Group(chat.base),
            Self::Supergroup(chat) => Chat::Supergroup(chat.base),
            Self::Channel(chat) => Chat::Channel(chat.base),
        }
    }

    pub fn pinned_message(&self) -> Option<&Message> {
        let get = match self {
            Self::Private(chat) => &chat.detail.get,
            Self::Group(chat) => &chat.detail.get,
            Self::Supergroup(chat) => &chat.detail.get,
            Self::Channel(chat) => &chat.detail.get,
        };
        get.pinned_message.as_deref()
    }
}

/// Detail bundle of each chat kind, keyed by discriminant.
pub fn get_chat_details() -> Result<BTreeMap<&'static str, Detail>, SchemaError> {
    let mut details = BTreeMap::new();
    details.insert("private", Detail::of::<PrivateChatDetail>()?);
    details.insert("group", Detail::of::<GroupChatDetail>()?);
    details.insert("supergroup", Detail::of::<SupergroupChatDetail>()?);
    details.insert("channel", Detail::of::<ChannelChatDetail>()?);
    Ok(details)
}
