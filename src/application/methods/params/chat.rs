//! Parameters of the chat administration and lookup operations.

use validator::Validate;

use crate::domain::entities::{BotCommand, ChatPermissions};
use crate::domain::value_objects::{ChatId, Upload};
use crate::schema_struct;

schema_struct! {
    #[derive(Validate)]
    pub struct GetUserProfilePhotos [] {
        pub user_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub offset: Option<i64>,
        #[validate(range(min = 1, max = 100, message = "Limit must be 1-100"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub limit: Option<i64>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct GetFile [] {
        pub file_id: String,
    }
}

impl GetFile {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

schema_struct! {
    /// Ban a user; in supergroups and channels the user cannot return by
    /// invite link until unbanned.
    #[derive(Validate)]
    pub struct KickChatMember [] {
        pub chat_id: ChatId,
        pub user_id: i64,
        /// Unix time; less than 30 seconds or more than 366 days is forever.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub until_date: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub revoke_messages: Option<bool>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct UnbanChatMember [] {
        pub chat_id: ChatId,
        pub user_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub only_if_banned: Option<bool>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct RestrictChatMember [] {
        pub chat_id: ChatId,
        pub user_id: i64,
        pub permissions: ChatPermissions,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub until_date: Option<i64>,
    }
}

schema_struct! {
    /// Promote or demote a user; every flag left out is revoked.
    #[derive(Validate)]
    pub struct PromoteChatMember [] {
        pub chat_id: ChatId,
        pub user_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_anonymous: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_manage_chat: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_post_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_edit_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_delete_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_manage_voice_chats: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_restrict_members: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_promote_members: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_change_info: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_invite_users: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_pin_messages: Option<bool>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetChatAdministratorCustomTitle [] {
        pub chat_id: ChatId,
        pub user_id: i64,
        #[validate(length(max = 16, message = "Custom title must be at most 16 characters"))]
        pub custom_title: String,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetChatPermissions [] {
        pub chat_id: ChatId,
        pub permissions: ChatPermissions,
    }
}

schema_struct! {
    /// Replace the primary invite link of a chat.
    #[derive(Validate)]
    pub struct ExportChatInviteLink [] {
        pub chat_id: ChatId,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct CreateChatInviteLink [] {
        pub chat_id: ChatId,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expire_date: Option<i64>,
        #[validate(range(min = 1, max = 99999, message = "Member limit must be 1-99999"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub member_limit: Option<i64>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct EditChatInviteLink [] {
        pub chat_id: ChatId,
        pub invite_link: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expire_date: Option<i64>,
        #[validate(range(min = 1, max = 99999, message = "Member limit must be 1-99999"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub member_limit: Option<i64>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct RevokeChatInviteLink [] {
        pub chat_id: ChatId,
        pub invite_link: String,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetChatPhoto<F> [] {
        pub chat_id: ChatId,
        pub photo: Upload<F>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct DeleteChatPhoto [] {
        pub chat_id: ChatId,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetChatTitle [] {
        pub chat_id: ChatId,
        #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
        pub title: String,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetChatDescription [] {
        pub chat_id: ChatId,
        #[validate(length(max = 255, message = "Description must be at most 255 characters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct PinChatMessage [] {
        pub chat_id: ChatId,
        pub message_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub disable_notification: Option<bool>,
    }
}

schema_struct! {
    /// Unpin one message, or the most recent pinned one when no id is given.
    #[derive(Validate)]
    pub struct UnpinChatMessage [] {
        pub chat_id: ChatId,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub message_id: Option<i64>,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct UnpinAllChatMessages [] {
        pub chat_id: ChatId,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct LeaveChat [] {
        pub chat_id: ChatId,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct GetChat [] {
        pub chat_id: ChatId,
    }
}

impl GetChat {
    pub fn new(chat_id: impl Into<ChatId>) -> Self {
        Self {
            chat_id: chat_id.into(),
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct GetChatAdministrators [] {
        pub chat_id: ChatId,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct GetChatMembersCount [] {
        pub chat_id: ChatId,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct GetChatMember [] {
        pub chat_id: ChatId,
        pub user_id: i64,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetChatStickerSet [] {
        pub chat_id: ChatId,
        pub sticker_set_name: String,
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct DeleteChatStickerSet [] {
        pub chat_id: ChatId,
    }
}

schema_struct! {
    #[derive(Default, Validate)]
    pub struct AnswerCallbackQuery [] {
        pub callback_query_id: String,
        #[validate(length(max = 200, message = "Notification text must be at most 200 characters"))]
        #[serde(skip_serializing_if = "Option::is_none")]
        pub text: Option<String>,
        /// Show an alert instead of a notification at the top of the screen.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub show_alert: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cache_time: Option<i64>,
    }
}

impl AnswerCallbackQuery {
    pub fn new(callback_query_id: impl Into<String>) -> Self {
        Self {
            callback_query_id: callback_query_id.into(),
            ..Default::default()
        }
    }
}

schema_struct! {
    #[derive(Validate)]
    pub struct SetMyCommands [] {
        #[validate(length(max = 100, message = "At most 100 commands can be set"))]
        pub commands: Vec<BotCommand>,
    }
}

schema_struct! {
    #[derive(Default, Validate)]
    pub struct GetMyCommands [] {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::{Describe, FieldType};
    use crate::shared::validation::validate;
    use serde_json::json;

    #[test]
    fn test_chat_id_accepts_username() {
        let params = GetChat::new("@botgram");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"chat_id": "@botgram"})
        );
        let field = GetChat::fields().unwrap();
        assert_eq!(
            field.get("chat_id").unwrap().ty,
            FieldType::union([FieldType::Integer, FieldType::String])
        );
    }

    #[test]
    fn test_custom_title_limit() {
        let params = SetChatAdministratorCustomTitle {
            chat_id: ChatId::from(-100),
            user_id: 1,
            custom_title: "x".repeat(17),
        };
        let err = validate(&params).unwrap_err();
        assert!(err.to_string().contains("custom_title"));
    }

    #[test]
    fn test_chat_photo_is_upload_only() {
        let fields = SetChatPhoto::<String>::fields().unwrap();
        assert_eq!(fields.get("photo").unwrap().ty, FieldType::Upload);
    }

    #[test]
    fn test_answer_callback_query_defaults() {
        let params = AnswerCallbackQuery::new("cb-1");
        assert!(validate(&params).is_ok());
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"callback_query_id": "cb-1"})
        );
    }
}
