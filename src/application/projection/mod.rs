//! # Schema Projection Engine
//!
//! Derives the calling conventions of the operation table:
//!
//! - **view**: the four callable projections and their shared call steps
//! - **api**: a client binding a transport to one projection
//! - **envelope**: the success/failure envelope
//! - **transport**: blocking and non-blocking transport seams
//! - **catalog**: the same projections at descriptor level, plus the
//!   options view and caller-side validation of dynamic calls

pub mod api;
pub mod catalog;
pub mod envelope;
pub mod transport;
pub mod view;

pub use api::{Api, TelegramD, TelegramP, TelegramPR, TelegramR};
pub use catalog::{AttachmentField, Catalog, OperationSpec, View, ViewSignature};
pub use envelope::{ApiError, ApiResponse, ResponseParameters};
pub use transport::{AsyncTransport, Transport};
pub use view::{
    Direct, Project, Projection, PromiseResponsified, Promisified, Responsified, Wrap,
};
