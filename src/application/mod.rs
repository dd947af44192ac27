//! Application Layer
//!
//! The operation table and its projections. This layer turns the entity
//! model of the domain layer into callable operations and descriptor views.

pub mod methods;
pub mod projection;

pub use methods::{Attachment, EditResult, Method, MessageTarget, ResultBranch, Telegram};
pub use projection::{
    Api, ApiError, ApiResponse, AsyncTransport, Catalog, TelegramD, TelegramP, TelegramPR,
    TelegramR, Transport, View,
};
