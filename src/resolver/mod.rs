//! SRV resolvers.

use crate::record::SrvRecord;
use async_trait::async_trait;

#[cfg(feature = "hickory-dns")]
pub mod hickory;

/// Represents the ability to act as a SRV resolver.
#[async_trait]
pub trait SrvResolver: Send + Sync {
    /// SRV record representation produced by the resolver.
    type Record: SrvRecord;

    /// Errors encountered during SRV resolution.
    type Error: std::error::Error + 'static;

    /// Gets the records corresponding to `host`, in whatever order the
    /// backend produced them.
    async fn resolve_srv(&self, host: &str) -> Result<Vec<Self::Record>, Self::Error>;
}
