//! # Domain Entities
//!
//! Every object of the messaging-bot API, declared once as composable
//! fragments, variants and families.

pub mod callback;
pub mod chat;
pub mod game;
pub mod inline;
pub mod input_media;
pub mod manage;
pub mod markup;
pub mod media;
pub mod message;
pub mod payment;
pub mod poll;
pub mod update;
pub mod user;

pub use callback::*;
pub use chat::*;
pub use game::*;
pub use inline::*;
pub use input_media::*;
pub use manage::*;
pub use markup::*;
pub use media::*;
pub use message::*;
pub use payment::*;
pub use poll::*;
pub use update::*;
pub use user::*;
