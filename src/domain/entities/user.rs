//! Users and bots.

use crate::schema_struct;

schema_struct! {
    /// A user or bot account.
    #[derive(Default)]
    pub struct User [] {
        /// Unique identifier; fits in 52 bits.
        pub id: i64,
        pub is_bot: bool,
        pub first_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub username: Option<String>,
        /// IETF language tag of the user's language.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub language_code: Option<String>,
    }
}

impl User {
    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }

    /// `@username`, if the user has one.
    pub fn mention(&self) -> Option<String> {
        self.username.as_ref().map(|u| format!("@{}", u))
    }
}

schema_struct! {
    /// The bot itself, as returned by `getMe`. The username is always set.
    pub struct UserFromGetMe [] {
        pub id: i64,
        pub is_bot: bool,
        pub first_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub last_name: Option<String>,
        pub username: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub language_code: Option<String>,
        pub can_join_groups: bool,
        pub can_read_all_group_messages: bool,
        pub supports_inline_queries: bool,
    }
}

impl From<UserFromGetMe> for User {
    fn from(me: UserFromGetMe) -> Self {
        Self {
            id: me.id,
            is_bot: me.is_bot,
            first_name: me.first_name,
            last_name: me.last_name,
            username: Some(me.username),
            language_code: me.language_code,
        }
    }
}
