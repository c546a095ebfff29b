//! Request transports.

use crate::request::RequestTarget;
use async_trait::async_trait;
use futures_util::future::BoxFuture;

/// Represents the ability to execute a request against its effective target.
///
/// The resolution layer invokes [`dispatch`](Transport::dispatch) exactly
/// once per request and forwards whatever it produces to the caller
/// verbatim; responses and errors are never inspected on the way through.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Response representation produced by the transport.
    type Response;

    /// Errors encountered during dispatch.
    type Error: std::error::Error + 'static;

    /// Executes the request described by `target`.
    async fn dispatch(&self, target: RequestTarget) -> Result<Self::Response, Self::Error>;
}

/// Adapter turning a future-producing closure into a [`Transport`].
///
/// Lets an existing request-executing function pick up SRV resolution
/// without implementing [`Transport`] by hand.
pub struct TransportFn<F>(F);

impl<F> TransportFn<F> {
    /// Wraps `func` as a [`Transport`].
    pub fn new(func: F) -> Self {
        Self(func)
    }
}

impl<F> std::fmt::Debug for TransportFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransportFn").finish()
    }
}

#[async_trait]
impl<F, Response, Error> Transport for TransportFn<F>
where
    F: Fn(RequestTarget) -> BoxFuture<'static, Result<Response, Error>> + Send + Sync,
    Response: Send,
    Error: std::error::Error + Send + 'static,
{
    type Response = Response;
    type Error = Error;

    async fn dispatch(&self, target: RequestTarget) -> Result<Response, Error> {
        (self.0)(target).await
    }
}
