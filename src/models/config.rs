//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::SIMILARITY_THRESHOLD;

/// Matcher settings shared by the pipeline and the bundled HTTP fetcher.
///
/// The similarity threshold and cache expiry are tunables, not domain
/// invariants; defaults reproduce the observed production behavior.
#[derive(Clone, Debug, Deserialize)]
pub struct MatcherConfig {
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_search_base_url() -> String {
    "https://uk.webuy.com/".to_string()
}

fn default_similarity_threshold() -> f64 {
    SIMILARITY_THRESHOLD
}

fn default_fetch_timeout_secs() -> u64 {
    12
}

fn default_cache_ttl_secs() -> u64 {
    300
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            search_base_url: default_search_base_url(),
            similarity_threshold: default_similarity_threshold(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl MatcherConfig {
    /// Loads configuration from an optional `matcher.yaml` in the working
    /// directory, overridable through `MATCHER_`-prefixed environment
    /// variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("matcher").required(false))
            .add_source(config::Environment::with_prefix("MATCHER"))
            .build()?
            .try_deserialize()
    }
}
