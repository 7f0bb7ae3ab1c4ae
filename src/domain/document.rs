use std::fmt;

/// How a search-results page was obtained.
///
/// `Rendered` documents went through a JavaScript-capable fetcher and are
/// expected to contain dynamically injected markup. `Static` documents are
/// server markup only, so text-level fallbacks remain worthwhile on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStrategy {
    Rendered,
    Static,
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchStrategy::Rendered => write!(f, "rendered"),
            FetchStrategy::Static => write!(f, "static"),
        }
    }
}

/// A fetched search-results page, owned by a single pipeline invocation.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub body: String,
    pub strategy: FetchStrategy,
    /// URL the page was fetched from. Resolves relative listing links and
    /// stands in as the URL of synthetic harvest candidates.
    pub search_url: String,
}
