//! Clients dispatching requests through SRV discovery.

use crate::{
    record,
    record::SrvRecord,
    request::{RequestOptions, RequestTarget, TargetError},
    resolver::SrvResolver,
    transport,
};
use std::fmt::Debug;

/// Errors encountered by a [`SrvClient`].
///
/// DNS-layer failures never show up here. A lookup that errors or comes back
/// empty downgrades to dispatching the original target, so the only errors a
/// caller can observe are its own invalid input and whatever the transport
/// reports.
#[derive(Debug, thiserror::Error)]
pub enum Error<Dispatch: Debug> {
    /// The request description was rejected before any I/O took place.
    #[error("invalid request target: {0}")]
    Target(#[from] TargetError),
    /// Transport dispatch errors, forwarded untouched.
    #[error("transport dispatch error")]
    Dispatch(Dispatch),
}

/// How a request target fared against SRV discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A record was found and the target now points at it.
    Rewritten {
        /// Host taken from the chosen record's target.
        host: String,
        /// Port taken from the chosen record.
        port: u16,
    },
    /// No usable record; the target is exactly as the caller supplied it.
    Unchanged,
}

/// Client for dispatching requests to services located by SRV records.
///
/// # Usage
///
/// A client pairs a [`SrvResolver`] with a [`Transport`]. Each call to
/// [`execute`] validates the request description, queries SRV records for the
/// target host, and hands the effective target to the transport exactly
/// once:
///
/// - when the lookup yields records, one is chosen uniformly at random and
///   the request's host and port are rewritten to the chosen record's target
///   and port;
/// - when the lookup fails or yields nothing, the request proceeds to its
///   original host and port, and the caller cannot tell the difference.
///
/// Nothing is cached between calls and nothing is retried; one request means
/// one lookup and one dispatch.
///
/// [`execute`]: SrvClient::execute()
/// [`Transport`]: transport::Transport
#[derive(Debug)]
pub struct SrvClient<Resolver, Transport> {
    resolver: Resolver,
    transport: Transport,
}

impl<Resolver, Transport> SrvClient<Resolver, Transport> {
    /// Creates a new client resolving targets with `resolver` and dispatching
    /// through `transport`.
    pub fn new(resolver: Resolver, transport: Transport) -> Self {
        Self {
            resolver,
            transport,
        }
    }

    /// Sets the resolver of the client.
    pub fn resolver<R>(self, resolver: R) -> SrvClient<R, Transport> {
        SrvClient {
            resolver,
            transport: self.transport,
        }
    }

    /// Sets the transport of the client.
    pub fn transport<T>(self, transport: T) -> SrvClient<Resolver, T> {
        SrvClient {
            resolver: self.resolver,
            transport,
        }
    }
}

impl<Resolver, Transport> SrvClient<Resolver, Transport>
where
    Resolver: SrvResolver,
    Transport: transport::Transport,
{
    /// Dispatches the request described by `options`.
    ///
    /// The description is validated synchronously, so a missing or
    /// unsupported target fails before any lookup is issued. The transport's
    /// response or error comes back verbatim.
    pub async fn execute(
        &self,
        options: RequestOptions,
    ) -> Result<Transport::Response, Error<Transport::Error>> {
        self.execute_target(options.into_target()?).await
    }

    /// Dispatches a request whose target the caller has already built.
    pub async fn execute_target(
        &self,
        target: RequestTarget,
    ) -> Result<Transport::Response, Error<Transport::Error>> {
        let (target, _) = self.resolve(target).await;
        self.transport
            .dispatch(target)
            .await
            .map_err(Error::Dispatch)
    }

    /// Runs SRV discovery for `target`, rewriting its host and port when a
    /// record is available.
    ///
    /// This is the whole decision layer on its own, usable as a resolution
    /// step in front of any transport. It cannot fail: lookup errors and
    /// empty answers both leave the target untouched, reported as
    /// [`Resolution::Unchanged`].
    pub async fn resolve(&self, mut target: RequestTarget) -> (RequestTarget, Resolution) {
        let records = match self.resolver.resolve_srv(target.host()).await {
            Ok(records) => records,
            Err(_e) => {
                #[cfg(feature = "log")]
                tracing::debug!(host = %target.host(), error = %_e, "SRV lookup failed, dispatching to original target");
                return (target, Resolution::Unchanged);
            }
        };

        let Some(record) = record::choose(&records, rand::rng()) else {
            #[cfg(feature = "log")]
            tracing::debug!(host = %target.host(), "no SRV records, dispatching to original target");
            return (target, Resolution::Unchanged);
        };

        let host = record.target().to_string();
        let port = record.port();
        if let Err(_e) = target.rewrite(&host, port) {
            #[cfg(feature = "log")]
            tracing::trace!(record = %host, error = %_e, "SRV target unusable as a host, dispatching to original target");
            return (target, Resolution::Unchanged);
        }

        #[cfg(feature = "log")]
        tracing::debug!(host = %target.host(), port, "rewrote request target from SRV record");
        (target, Resolution::Rewritten { host, port })
    }
}
