//! Chat administration and bot management objects.

use chrono::{DateTime, Utc};

use super::chat::Chat;
use super::media::{Location, PhotoSize};
use super::user::User;
use crate::shared::time::from_unix;
use crate::{literal_enum, schema_struct};

schema_struct! {
    /// Current webhook status.
    pub struct WebhookInfo [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub url: Option<String>,
        pub has_custom_certificate: bool,
        pub pending_update_count: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub ip_address: Option<String>,
        pub last_error_date: i64,
        pub last_error_message: String,
        pub max_connections: i64,
        pub allowed_updates: Vec<String>,
    }
}

impl WebhookInfo {
    pub fn last_error_at(&self) -> Option<DateTime<Utc>> {
        if self.last_error_date == 0 {
            return None;
        }
        from_unix(self.last_error_date)
    }
}

schema_struct! {
    pub struct ChatPhoto [] {
        pub small_file_id: String,
        pub small_file_unique_id: String,
        pub big_file_id: String,
        pub big_file_unique_id: String,
    }
}

schema_struct! {
    pub struct ChatInviteLink [] {
        pub invite_link: String,
        pub creator: User,
        pub is_primary: bool,
        pub is_revoked: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub expire_date: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub member_limit: Option<i64>,
    }
}

impl ChatInviteLink {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expire_date.and_then(from_unix)
    }
}

literal_enum! {
    pub enum ChatMemberStatus {
        "creator" => Creator,
        "administrator" => Administrator,
        "member" => Member,
        "restricted" => Restricted,
        "left" => Left,
        "kicked" => Kicked,
    }
}

schema_struct! {
    /// Information about one member of a chat.
    pub struct ChatMember [] {
        pub user: User,
        pub status: ChatMemberStatus,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub custom_title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_anonymous: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_be_edited: Option<bool>,
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
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_member: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_media_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_polls: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_other_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_add_web_page_previews: Option<bool>,
        /// Unix time when restrictions or a ban are lifted; 0 means forever.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub until_date: Option<i64>,
    }
}

impl ChatMember {
    pub fn is_admin(&self) -> bool {
        matches!(
            self.status,
            ChatMemberStatus::Creator | ChatMemberStatus::Administrator
        )
    }

    /// Whether the user currently belongs to the chat.
    pub fn is_present(&self) -> bool {
        match self.status {
            ChatMemberStatus::Left | ChatMemberStatus::Kicked => false,
            ChatMemberStatus::Restricted => self.is_member.unwrap_or(false),
            _ => true,
        }
    }

    /// When restrictions end, or `None` if they are permanent or absent.
    pub fn restricted_until(&self) -> Option<DateTime<Utc>> {
        self.until_date.filter(|d| *d > 0).and_then(from_unix)
    }
}

schema_struct! {
    /// A change in the status of a chat member.
    pub struct ChatMemberUpdated [] {
        pub chat: Chat,
        pub from: User,
        pub date: i64,
        pub old_chat_member: ChatMember,
        pub new_chat_member: ChatMember,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub invite_link: Option<ChatInviteLink>,
    }
}

schema_struct! {
    /// Actions a non-administrator member is allowed to take.
    #[derive(Default)]
    pub struct ChatPermissions [] {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_media_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_polls: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_send_other_messages: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_add_web_page_previews: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_change_info: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_invite_users: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub can_pin_messages: Option<bool>,
    }
}

impl ChatPermissions {
    /// Permissions that only allow reading.
    pub fn read_only() -> Self {
        Self {
            can_send_messages: Some(false),
            can_send_media_messages: Some(false),
            can_send_polls: Some(false),
            can_send_other_messages: Some(false),
            can_add_web_page_previews: Some(false),
            ..Default::default()
        }
    }
}

schema_struct! {
    /// Location to which a supergroup is connected.
    pub struct ChatLocation [] {
        pub location: Location,
        pub address: String,
    }
}

schema_struct! {
    pub struct BotCommand [] {
        /// 1-32 characters: lowercase letters, digits and underscores.
        pub command: String,
        pub description: String,
    }
}

schema_struct! {
    /// A file ready to be downloaded from `file_path`.
    pub struct File [] {
        pub file_id: String,
        pub file_unique_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_size: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_path: Option<String>,
    }
}

schema_struct! {
    pub struct UserProfilePhotos [] {
        pub total_count: i64,
        /// Up to 4 sizes each.
        pub photos: Vec<Vec<PhotoSize>>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn member(status: &str, extra: serde_json::Value) -> ChatMember {
        let mut value = json!({
            "user": {"id": 5, "is_bot": false, "first_name": "Bo"},
            "status": status
        });
        if let (Some(map), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
            map.extend(extra.clone());
        }
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_member_status() {
        assert!(member("creator", json!({})).is_admin());
        assert!(!member("kicked", json!({})).is_present());
        assert!(member("restricted", json!({"is_member": true})).is_present());
        assert!(!member("restricted", json!({"is_member": false})).is_present());
    }

    #[test]
    fn test_restricted_until() {
        let forever = member("restricted", json!({"until_date": 0}));
        assert_eq!(forever.restricted_until(), None);

        let timed = member("restricted", json!({"until_date": 1_600_000_000}));
        assert_eq!(
            timed.restricted_until().map(|d| d.timestamp()),
            Some(1_600_000_000)
        );
    }

    #[test]
    fn test_read_only_permissions_skip_unset_fields() {
        let json = serde_json::to_value(ChatPermissions::read_only()).unwrap();
        assert_eq!(json["can_send_messages"], json!(false));
        assert!(json.get("can_pin_messages").is_none());
    }
}
