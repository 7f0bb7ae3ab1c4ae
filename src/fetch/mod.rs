use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::document::{FetchStrategy, RawDocument};

pub mod http;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build fetcher: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("fetch strategy {0} is not supported by this fetcher")]
    Unsupported(FetchStrategy),
}

pub type FetchResult<T> = Result<T, FetchError>;

/// Which fetch strategies a fetcher can actually serve.
///
/// Passed to the pipeline at construction so the strategy order is an
/// explicit value rather than a process-wide flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetcherCapability {
    /// Browser-backed fetcher: try `rendered` first, fall back to `static`.
    Full,
    /// Plain HTTP fetcher: `static` only.
    StaticOnly,
}

impl FetcherCapability {
    /// Fetch strategies in the order the pipeline attempts them.
    pub fn strategy_order(self) -> &'static [FetchStrategy] {
        match self {
            FetcherCapability::Full => &[FetchStrategy::Rendered, FetchStrategy::Static],
            FetcherCapability::StaticOnly => &[FetchStrategy::Static],
        }
    }
}

/// An abstraction over fetchers that obtain search-results documents.
///
/// The pipeline never constructs network requests or browser sessions
/// itself; it only consumes this interface. Implementations must enforce
/// their own request timeout so no fetch blocks indefinitely.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the search-results page for `query` using `strategy`.
    async fn fetch(&self, query: &str, strategy: FetchStrategy) -> FetchResult<RawDocument>;
}

pub(crate) fn build_reqwest_client(timeout: Duration) -> FetchResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent("Mozilla/5.0")
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Build(e.to_string()))
}
