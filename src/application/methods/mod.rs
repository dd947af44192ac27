//! # Canonical operation table
//!
//! Every remote operation is declared exactly once, in [`table`]. A
//! declaration binds the wire name to its parameter struct and its result
//! type; everything else (the [`Method`] impls, the callable views and the
//! descriptors) is generated from it.

pub mod params;
pub mod table;
pub mod target;

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::domain::schema::{Describe, Shape};

pub use params::*;
pub use table::{describe_operations, Telegram, Unbound, OPERATIONS};
pub use target::{EditResult, MessageTarget, ResultBranch, CHAT_TARGET, INLINE_TARGET};

/// Attachment representation `F`: whatever the transport uses for a fresh
/// upload (a path, an in-memory buffer, a multipart field handle).
pub trait Attachment: Serialize + Send + 'static {}

impl<T: Serialize + Send + 'static> Attachment for T {}

/// One entry of the canonical table, implemented by its parameter struct.
pub trait Method<F: Attachment>: Describe + Serialize + Validate + Send + 'static {
    /// Wire name of the operation.
    const NAME: &'static str;

    /// Whether the result is a union whose branch is selected by the input.
    const CONDITIONAL: bool = false;

    type Output: DeserializeOwned + Shape + Send + 'static;

    /// Branch the input selects, for conditional operations.
    fn expected_branch(&self) -> Option<ResultBranch> {
        None
    }

    /// Branch a received result belongs to, for conditional operations.
    fn branch_of(_output: &Self::Output) -> Option<ResultBranch> {
        None
    }
}
