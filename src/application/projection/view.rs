//! Callable projections of the operation table.
//!
//! A projection decides what a call returns. Every projection shares the
//! same preparation and settlement steps, so the views differ only in how
//! the envelope is wrapped:
//!
//! | view                  | returns                                      |
//! |-----------------------|----------------------------------------------|
//! | [`Direct`]            | `Result<T, ApiError>`                        |
//! | [`Responsified`]      | `ApiResponse<T>`                             |
//! | [`Promisified`]       | `BoxFuture<'static, Result<T, ApiError>>`    |
//! | [`PromiseResponsified`] | `BoxFuture<'static, ApiResponse<T>>`       |

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use super::catalog::View;
use super::envelope::{ApiError, ApiResponse};
use super::transport::{AsyncTransport, Transport};
use crate::application::methods::{Attachment, Method, ResultBranch};
use crate::shared::error::SchemaError;
use crate::shared::validation::validate;

/// A way of presenting the result of a call.
pub trait Projection: Send + Sync + 'static {
    type Wrap<T: Send + 'static>;

    /// Descriptor-level counterpart of this projection.
    const VIEW: View;
}

/// Result of `T` as seen through projection `P`.
pub type Wrap<P, T> = <P as Projection>::Wrap<T>;

/// Projections that can be carried out over a transport `T`.
pub trait Project<F: Attachment, T>: Projection {
    fn project<M: Method<F>>(transport: &Arc<T>, method: M) -> Self::Wrap<M::Output>;
}

/// Returns the value, or the failure as an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct;

/// Returns the envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct Responsified;

/// Returns a future of the value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Promisified;

/// Returns a future of the envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromiseResponsified;

impl Projection for Direct {
    type Wrap<T: Send + 'static> = Result<T, ApiError>;
    const VIEW: View = View::Direct;
}

impl Projection for Responsified {
    type Wrap<T: Send + 'static> = ApiResponse<T>;
    const VIEW: View = View::Response;
}

impl Projection for Promisified {
    type Wrap<T: Send + 'static> = BoxFuture<'static, Result<T, ApiError>>;
    const VIEW: View = View::Promise;
}

impl Projection for PromiseResponsified {
    type Wrap<T: Send + 'static> = BoxFuture<'static, ApiResponse<T>>;
    const VIEW: View = View::PromiseResponse;
}

impl<F: Attachment, T: Transport<F>> Project<F, T> for Responsified {
    fn project<M: Method<F>>(transport: &Arc<T>, method: M) -> ApiResponse<M::Output> {
        let expected = match prepare::<F, M>(&method) {
            Ok(expected) => expected,
            Err(error) => return ApiResponse::Err(error),
        };
        settle::<F, M>(expected, transport.call(method))
    }
}

impl<F: Attachment, T: Transport<F>> Project<F, T> for Direct {
    fn project<M: Method<F>>(transport: &Arc<T>, method: M) -> Result<M::Output, ApiError> {
        <Responsified as Project<F, T>>::project(transport, method).into_result()
    }
}

impl<F: Attachment, T: AsyncTransport<F>> Project<F, T> for PromiseResponsified {
    fn project<M: Method<F>>(
        transport: &Arc<T>,
        method: M,
    ) -> BoxFuture<'static, ApiResponse<M::Output>> {
        let transport = Arc::clone(transport);
        async move {
            let expected = match prepare::<F, M>(&method) {
                Ok(expected) => expected,
                Err(error) => return ApiResponse::Err(error),
            };
            let response = transport.call_async(method).await;
            settle::<F, M>(expected, response)
        }
        .boxed()
    }
}

impl<F: Attachment, T: AsyncTransport<F>> Project<F, T> for Promisified {
    fn project<M: Method<F>>(
        transport: &Arc<T>,
        method: M,
    ) -> BoxFuture<'static, Result<M::Output, ApiError>> {
        <PromiseResponsified as Project<F, T>>::project(transport, method)
            .map(ApiResponse::into_result)
            .boxed()
    }
}

/// Validate the parameters and read off the branch they select.
///
/// A rejected call never reaches the transport.
fn prepare<F: Attachment, M: Method<F>>(method: &M) -> Result<Option<ResultBranch>, ApiError> {
    let operation = <M as Method<F>>::NAME;
    validate(method).map_err(|error| {
        tracing::debug!(operation, error = %error, "Rejected before sending");
        ApiError::from(error)
    })?;
    Ok(method.expected_branch())
}

/// Check a conditional result against the branch its input selected.
fn settle<F: Attachment, M: Method<F>>(
    expected: Option<ResultBranch>,
    response: ApiResponse<M::Output>,
) -> ApiResponse<M::Output> {
    let ApiResponse::Ok(result) = response else {
        return response;
    };
    match (expected, M::branch_of(&result)) {
        (Some(expected), Some(actual)) if expected != actual => {
            let error = SchemaError::UnexpectedBranch {
                operation: <M as Method<F>>::NAME.to_string(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            };
            tracing::debug!(error = %error, "Conditional result mismatch");
            ApiResponse::Err(error.into())
        }
        _ => ApiResponse::Ok(result),
    }
}
