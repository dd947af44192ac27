//! Bot API client bound to one projection.

use std::marker::PhantomData;
use std::sync::Arc;

use super::view::{Direct, Project, PromiseResponsified, Promisified, Responsified, Wrap};
use crate::application::methods::{Attachment, Method, Telegram};

/// The operation table over transport `T`, seen through projection `P`,
/// with attachment representation `F`.
///
/// `F` is fixed here and nowhere else: every operation of the table takes
/// its attachments as `F`.
pub struct Api<F, P, T> {
    transport: Arc<T>,
    _marker: PhantomData<fn() -> (F, P)>,
}

impl<F, P, T> Api<F, P, T> {
    pub fn new(transport: T) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    pub fn from_arc(transport: Arc<T>) -> Self {
        Self {
            transport,
            _marker: PhantomData,
        }
    }

    pub fn transport(&self) -> &Arc<T> {
        &self.transport
    }

    /// The same transport seen through another projection.
    pub fn view<Q>(&self) -> Api<F, Q, T> {
        Api::from_arc(Arc::clone(&self.transport))
    }
}

impl<F, P, T> Clone for Api<F, P, T> {
    fn clone(&self) -> Self {
        Self::from_arc(Arc::clone(&self.transport))
    }
}

impl<F: Attachment, P: Project<F, T>, T> Telegram<F> for Api<F, P, T> {
    type View = P;

    fn invoke<M: Method<F>>(&self, method: M) -> Wrap<P, M::Output> {
        <P as Project<F, T>>::project(&self.transport, method)
    }
}

/// Values, faults as errors.
pub type TelegramD<F, T> = Api<F, Direct, T>;
/// Envelopes.
pub type TelegramR<F, T> = Api<F, Responsified, T>;
/// Futures of values.
pub type TelegramP<F, T> = Api<F, Promisified, T>;
/// Futures of envelopes.
pub type TelegramPR<F, T> = Api<F, PromiseResponsified, T>;
