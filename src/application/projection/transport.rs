//! Transport seams.
//!
//! A transport owns the network: it serializes the parameters, performs the
//! request and deserializes the envelope. Blocking and non-blocking
//! transports are separate traits; a transport may implement both.

use async_trait::async_trait;

use super::envelope::ApiResponse;
use crate::application::methods::{Attachment, Method};

/// Blocking transport.
pub trait Transport<F: Attachment>: Send + Sync + 'static {
    fn call<M: Method<F>>(&self, method: M) -> ApiResponse<M::Output>;
}

/// Non-blocking transport.
#[async_trait]
pub trait AsyncTransport<F: Attachment>: Send + Sync + 'static {
    async fn call_async<M: Method<F>>(&self, method: M) -> ApiResponse<M::Output>;
}
