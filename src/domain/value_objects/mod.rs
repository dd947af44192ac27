//! # Domain Value Objects
//!
//! Small immutable values shared by entities and operation parameters.
//!
//! ## Value Objects
//!
//! - **ChatId**: integer chat identifier or `@username`
//! - **True**: the literal success flag returned by side-effect operations
//! - **InputFile / Upload**: attachment positions generic in the representation `F`
//! - **ParseMode, ChatAction, PollType**: closed string literal sets

mod chat_id;
mod flag;
mod input_file;
mod literals;

pub use chat_id::*;
pub use flag::*;
pub use input_file::*;
pub use literals::*;
