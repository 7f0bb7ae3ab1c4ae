use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::domain::document::{FetchStrategy, RawDocument};
use crate::fetch::{FetchError, FetchResult, PageFetcher, build_reqwest_client};
use crate::models::config::MatcherConfig;

/// Plain-HTTP fetcher serving the `static` strategy.
///
/// Returns markup exactly as the server sent it; JavaScript-driven content
/// is absent, which is why its documents stay eligible for the text-level
/// price harvest. Rendered fetches need a browser-backed [`PageFetcher`]
/// supplied by the caller.
pub struct HttpFetcher {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(config: &MatcherConfig) -> FetchResult<Self> {
        Ok(Self {
            base_url: Url::parse(&config.search_base_url)
                .map_err(|e| FetchError::Build(e.to_string()))?,
            client: build_reqwest_client(Duration::from_secs(config.fetch_timeout_secs))?,
        })
    }

    fn search_url(&self, query: &str) -> FetchResult<Url> {
        let mut url = self
            .base_url
            .join("search")
            .map_err(|e| FetchError::Build(e.to_string()))?;
        url.query_pairs_mut().append_pair("stext", query);
        Ok(url)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, query: &str, strategy: FetchStrategy) -> FetchResult<RawDocument> {
        if strategy != FetchStrategy::Static {
            return Err(FetchError::Unsupported(strategy));
        }

        let url = self.search_url(query)?;
        let res = self.client.get(url.clone()).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;
        if !res.status().is_success() {
            log::warn!("Failed to get URL {}: {}", url, res.status());
            return Err(FetchError::Status(res.status().as_u16()));
        }
        let body = res
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(RawDocument {
            body,
            strategy,
            search_url: url.to_string(),
        })
    }
}
