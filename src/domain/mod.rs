//! # Domain Layer
//!
//! The domain layer declares every entity of the messaging-bot API and the
//! descriptor machinery that lets each declaration describe itself.
//!
//! ## Structure
//!
//! - **schema**: field types, capability fragments, families and their checks
//! - **entities**: users, chats, messages, media, updates, ...
//! - **value_objects**: small values shared by entities and parameters
//!
//! ## Design Principles
//!
//! - Each entity is declared once; its descriptor is derived from the type
//! - Families are closed: a value is an instance of exactly one variant
//! - Attachment positions are generic in the representation `F`

pub mod entities;
pub mod schema;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
