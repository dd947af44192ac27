//! Incoming updates.

use super::callback::CallbackQuery;
use super::inline::{ChosenInlineResult, InlineQuery};
use super::manage::ChatMemberUpdated;
use super::message::{Edited, Message};
use super::payment::{PreCheckoutQuery, ShippingQuery};
use super::poll::{Poll, PollAnswer};
use crate::{keyed_family, schema_struct};

schema_struct! {
    pub struct UpdateBase [] {
        /// Sequential identifier, used as `offset` by `getUpdates`.
        pub update_id: i64,
    }
}

schema_struct! {
    pub struct MessageUpdate [base: UpdateBase] {
        pub message: Message,
    }
}

schema_struct! {
    pub struct EditedMessageUpdate [base: UpdateBase] {
        pub edited_message: Edited<Message>,
    }
}

schema_struct! {
    pub struct ChannelPostUpdate [base: UpdateBase] {
        pub channel_post: Message,
    }
}

schema_struct! {
    pub struct EditedChannelPostUpdate [base: UpdateBase] {
        pub edited_channel_post: Edited<Message>,
    }
}

schema_struct! {
    pub struct InlineQueryUpdate [base: UpdateBase] {
        pub inline_query: InlineQuery,
    }
}

schema_struct! {
    pub struct ChosenInlineResultUpdate [base: UpdateBase] {
        pub chosen_inline_result: ChosenInlineResult,
    }
}

schema_struct! {
    pub struct CallbackQueryUpdate [base: UpdateBase] {
        pub callback_query: CallbackQuery,
    }
}

schema_struct! {
    pub struct ShippingQueryUpdate [base: UpdateBase] {
        pub shipping_query: ShippingQuery,
    }
}

schema_struct! {
    pub struct PreCheckoutQueryUpdate [base: UpdateBase] {
        pub pre_checkout_query: PreCheckoutQuery,
    }
}

schema_struct! {
    /// New poll state; bots only receive updates about stopped polls and
    /// polls they sent.
    pub struct PollUpdate [base: UpdateBase] {
        pub poll: Poll,
    }
}

schema_struct! {
    pub struct PollAnswerUpdate [base: UpdateBase] {
        pub poll_answer: PollAnswer,
    }
}

schema_struct! {
    /// The bot's own member status changed.
    pub struct MyChatMemberUpdate [base: UpdateBase] {
        pub my_chat_member: ChatMemberUpdated,
    }
}

schema_struct! {
    /// Another member's status changed; must be requested via
    /// `allowed_updates`.
    pub struct ChatMemberUpdate [base: UpdateBase] {
        pub chat_member: ChatMemberUpdated,
    }
}

keyed_family! {
    /// An incoming update. At most one of the payload keys is present.
    pub enum Update {
        "message" => Message(MessageUpdate),
        "edited_message" => EditedMessage(EditedMessageUpdate),
        "channel_post" => ChannelPost(ChannelPostUpdate),
        "edited_channel_post" => EditedChannelPost(EditedChannelPostUpdate),
        "inline_query" => InlineQuery(InlineQueryUpdate),
        "chosen_inline_result" => ChosenInlineResult(ChosenInlineResultUpdate),
        "callback_query" => CallbackQuery(CallbackQueryUpdate),
        "shipping_query" => ShippingQuery(ShippingQueryUpdate),
        "pre_checkout_query" => PreCheckoutQuery(PreCheckoutQueryUpdate),
        "poll" => Poll(PollUpdate),
        "poll_answer" => PollAnswer(PollAnswerUpdate),
        "my_chat_member" => MyChatMember(MyChatMemberUpdate),
        "chat_member" => ChatMember(ChatMemberUpdate),
    }
}

impl Update {
    pub fn update_id(&self) -> i64 {
        let base = match self {
            Self::Message(u) => &u.base,
            Self::EditedMessage(u) => &u.base,
            Self::ChannelPost(u) => &u.base,
            Self::EditedChannelPost(u) => &u.base,
            Self::InlineQuery(u) => &u.base,
            Self::ChosenInlineResult(u) => &u.base,
            Self::CallbackQuery(u) => &u.base,
            Self::ShippingQuery(u) => &u.base,
            Self::PreCheckoutQuery(u) => &u.base,
            Self::Poll(u) => &u.base,
            Self::PollAnswer(u) => &u.base,
            Self::MyChatMember(u) => &u.base,
            Self::ChatMember(u) => &u.base,
        };
        base.update_id
    }

    /// The message carried by message and channel post updates, edited or not.
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Message(u) => Some(&u.message),
            Self::EditedMessage(u) => Some(&u.edited_message.message),
            Self::ChannelPost(u) => Some(&u.channel_post),
            Self::EditedChannelPost(u) => Some(&u.edited_channel_post.message),
            _ => None,
        }
    }
}

/// Offset that confirms every update in `updates`.
pub fn next_offset(updates: &[Update]) -> Option<i64> {
    updates.iter().map(Update::update_id).max().map(|id| id + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::Family;
    use serde_json::json;

    fn message() -> serde_json::Value {
        json!({
            "message_id": 1,
            "date": 1_600_000_000,
            "chat": {"type": "group", "id": -5, "title": "Team"},
            "text": "ping"
        })
    }

    #[test]
    fn test_update_family_is_disjoint() {
        Update::spec().unwrap().check_disjoint().unwrap();
    }

    #[test]
    fn test_message_update() {
        let update: Update =
            serde_json::from_value(json!({"update_id": 10, "message": message()})).unwrap();
        assert_eq!(update.kind(), "message");
        assert_eq!(update.update_id(), 10);
        assert_eq!(update.message().and_then(Message::text), Some("ping"));
    }

    #[test]
    fn test_edited_message_update() {
        let mut edited = message();
        edited["edit_date"] = json!(1_600_000_050);
        let update: Update =
            serde_json::from_value(json!({"update_id": 11, "edited_message": edited})).unwrap();
        assert_eq!(update.kind(), "edited_message");
        match &update {
            Update::EditedMessage(u) => assert_eq!(u.edited_message.edit_date, 1_600_000_050),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_next_offset() {
        let updates: Vec<Update> = serde_json::from_value(json!([
            {"update_id": 10, "message": message()},
            {"update_id": 12, "channel_post": message()},
        ]))
        .unwrap();
        assert_eq!(next_offset(&updates), Some(13));
        assert_eq!(next_offset(&[]), None);
    }
}
