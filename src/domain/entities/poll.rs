//! Polls and quizzes.

use chrono::{DateTime, Utc};

use super::message::MessageEntity;
use super::user::User;
use crate::domain::value_objects::PollType;
use crate::schema_struct;
use crate::shared::time::from_unix;

schema_struct! {
    pub struct PollOption [] {
        /// 1-100 characters.
        pub text: String,
        pub voter_count: i64,
    }
}

schema_struct! {
    /// A user's answer in a non-anonymous poll.
    pub struct PollAnswer [] {
        pub poll_id: String,
        pub user: User,
        /// Empty if the user retracted their vote.
        pub option_ids: Vec<i64>,
    }
}

schema_struct! {
    pub struct Poll [] {
        pub id: String,
        /// 1-300 characters.
        pub question: String,
        pub options: Vec<PollOption>,
        pub total_voter_count: i64,
        pub is_closed: bool,
        pub is_anonymous: bool,
        pub r#type: PollType,
        pub allows_multiple_answers: bool,
        /// Only for quizzes, and only once closed or when the bot sent it.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub correct_option_id: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub explanation: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub explanation_entities: Option<Vec<MessageEntity>>,
        /// Seconds the poll stays active after creation.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub open_period: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub close_date: Option<i64>,
    }
}

impl Poll {
    pub fn closes_at(&self) -> Option<DateTime<Utc>> {
        self.close_date.and_then(from_unix)
    }

    /// Option with the most votes; ties go to the earliest option.
    pub fn leading_option(&self) -> Option<&PollOption> {
        self.options
            .iter()
            .rev()
            .max_by_key(|option| option.voter_count)
    }
}

impl PollAnswer {
    pub fn is_retraction(&self) -> bool {
        self.option_ids.is_empty()
    }
}
