//! Parameter structs of every operation, grouped by area.

pub mod chat;
pub mod edit;
pub mod interactive;
pub mod send;
pub mod sticker;
pub mod updates;

pub use chat::*;
pub use edit::*;
pub use interactive::*;
pub use send::*;
pub use sticker::*;
pub use updates::*;
