//! Pipeline orchestration: fetch, extract, select, cache.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::domain::outcome::MatchResult;
use crate::extract;
use crate::fetch::{FetcherCapability, PageFetcher};
use crate::matching;
use crate::models::config::MatcherConfig;

pub mod batch;

struct CacheEntry {
    result: MatchResult,
    stored_at: Instant,
}

/// Per-query matching pipeline.
///
/// One value serves many queries, sequentially or concurrently; every
/// `process` call is self-contained. Resolved results are cached for
/// [`MatcherConfig::cache_ttl_secs`], keyed by the exact query string.
pub struct MatchPipeline<F> {
    fetcher: F,
    capability: FetcherCapability,
    config: MatcherConfig,
    cache: Mutex<HashMap<String, CacheEntry>>,
}

impl<F: PageFetcher> MatchPipeline<F> {
    pub fn new(fetcher: F, capability: FetcherCapability, config: MatcherConfig) -> Self {
        Self {
            fetcher,
            capability,
            config,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves one product name to a [`MatchResult`].
    ///
    /// Never fails: blank queries, exhausted fetch strategies and pages
    /// without an acceptable candidate all resolve to
    /// [`MatchResult::NoMatch`]. A successful fetch is final even when it
    /// selects nothing; the fallback strategy only runs after a fetch
    /// failure.
    pub async fn process(&self, query: &str) -> MatchResult {
        if query.trim().is_empty() {
            log::debug!("Blank query, skipping fetch");
            return MatchResult::NoMatch;
        }

        if let Some(cached) = self.cached(query) {
            log::debug!("Cache hit for {query:?}");
            return cached;
        }

        let result = self.resolve(query).await;
        self.store(query, result.clone());
        result
    }

    async fn resolve(&self, query: &str) -> MatchResult {
        for &strategy in self.capability.strategy_order() {
            match self.fetcher.fetch(query, strategy).await {
                Ok(doc) => {
                    let candidates = extract::extract(&doc);
                    log::info!(
                        "Extracted {} candidate(s) for {query:?} via {strategy} fetch",
                        candidates.len()
                    );
                    return matching::select_best(
                        query,
                        &candidates,
                        self.config.similarity_threshold,
                    );
                }
                Err(e) => {
                    log::warn!("Fetch ({strategy}) failed for {query:?}: {e}");
                }
            }
        }

        log::warn!("All fetch strategies exhausted for {query:?}");
        MatchResult::NoMatch
    }

    fn cached(&self, query: &str) -> Option<MatchResult> {
        let ttl = Duration::from_secs(self.config.cache_ttl_secs);
        let cache = self.cache.lock().ok()?;
        let entry = cache.get(query)?;
        (entry.stored_at.elapsed() < ttl).then(|| entry.result.clone())
    }

    fn store(&self, query: &str, result: MatchResult) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(
                query.to_string(),
                CacheEntry {
                    result,
                    stored_at: Instant::now(),
                },
            );
        }
    }
}
