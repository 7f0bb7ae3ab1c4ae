//! Helpers for integration tests.

use std::sync::Mutex;

use async_trait::async_trait;

use buyback_matcher::domain::document::{FetchStrategy, RawDocument};
use buyback_matcher::fetch::{FetchError, FetchResult, PageFetcher};

pub const SEARCH_URL: &str = "https://uk.webuy.com/search?stext=test";

pub const PLAYSTATION_PAGE: &str = r#"
    <div class="productSearch">
      <div class="row">
        <div class="desc">
          <a class="prodLink" href="/product-detail?id=55">Sony PlayStation 5 Console 825GB</a>
        </div>
        <div class="price-wrap"><div class="text-red"><strong>£289.00</strong></div></div>
      </div>
    </div>
"#;

/// Fetcher returning canned bodies per strategy; `None` scripts a failure.
/// Every call is recorded so tests can assert on the fallback sequence.
pub struct ScriptedFetcher {
    rendered: Option<String>,
    static_body: Option<String>,
    calls: Mutex<Vec<FetchStrategy>>,
}

impl ScriptedFetcher {
    pub fn new(rendered: Option<&str>, static_body: Option<&str>) -> Self {
        Self {
            rendered: rendered.map(str::to_string),
            static_body: static_body.map(str::to_string),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<FetchStrategy> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for &ScriptedFetcher {
    async fn fetch(&self, _query: &str, strategy: FetchStrategy) -> FetchResult<RawDocument> {
        self.calls.lock().unwrap().push(strategy);
        let body = match strategy {
            FetchStrategy::Rendered => self.rendered.clone(),
            FetchStrategy::Static => self.static_body.clone(),
        };
        match body {
            Some(body) => Ok(RawDocument {
                body,
                strategy,
                search_url: SEARCH_URL.to_string(),
            }),
            None => Err(FetchError::Transport("scripted failure".to_string())),
        }
    }
}
