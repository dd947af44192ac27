//! Games.

use super::media::{Animation, PhotoSize};
use super::message::MessageEntity;
use super::user::User;
use crate::schema_struct;

schema_struct! {
    pub struct Game [] {
        pub title: String,
        pub description: String,
        pub photo: Vec<PhotoSize>,
        /// Shown in the game message; may be edited by `setGameScore`.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub text_entities: Option<Vec<MessageEntity>>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub animation: Option<Animation>,
    }
}

schema_struct! {
    /// One row of a game's high score table.
    pub struct GameHighScore [] {
        pub position: i64,
        pub user: User,
        pub score: i64,
    }
}
