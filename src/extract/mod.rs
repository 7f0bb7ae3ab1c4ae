//! Candidate extraction over raw search-results documents.
//!
//! Strategies run in priority order and the first one to produce at least
//! one candidate wins; later strategies never run. Parse failures inside a
//! strategy are logged and fall through to the next strategy instead of
//! surfacing.

use scraper::Html;
use url::Url;

use crate::domain::candidate::Candidate;
use crate::domain::document::RawDocument;

pub mod anchor;
pub mod embedded;
pub mod harvest;

pub use anchor::ANCESTOR_WALK_LIMIT;
pub use harvest::HARVESTED_TITLE;

/// Extracts candidate listings from `doc`.
///
/// Order: direct product anchors, embedded JSON, relaxed anchor patterns,
/// then (static documents only) the regex price harvest. Returns an empty
/// vector when every strategy comes up dry; the document is never mutated,
/// so re-invoking with the same document restarts the same sequence.
pub fn extract(doc: &RawDocument) -> Vec<Candidate> {
    let html = Html::parse_document(&doc.body);
    let base_url = Url::parse(&doc.search_url).ok();
    let base_url = base_url.as_ref();

    let candidates = anchor::direct_candidates(&html, base_url);
    if !candidates.is_empty() {
        return candidates;
    }

    let candidates = embedded::embedded_candidates(&html, base_url);
    if !candidates.is_empty() {
        return candidates;
    }

    let candidates = anchor::relaxed_candidates(&html, base_url);
    if !candidates.is_empty() {
        return candidates;
    }

    log::debug!(
        "No structured candidates in {} document for {}",
        doc.strategy,
        doc.search_url
    );
    harvest::harvest_candidate(doc).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::FetchStrategy;

    fn doc(body: &str, strategy: FetchStrategy) -> RawDocument {
        RawDocument {
            body: body.to_string(),
            strategy,
            search_url: "https://uk.webuy.com/search?stext=test".to_string(),
        }
    }

    const ANCHOR_AND_JSON: &str = r#"
        <div class="productSearch">
          <div class="row">
            <a class="prodLink" href="/product-detail?id=1">Anchor Title</a>
            <div class="text-red"><strong>£10.00</strong></div>
          </div>
        </div>
        <script>
          window.__STATE__ = {"results": [
            {"name": "JSON Title", "url": "/item/2", "sellPrice": "20.00"}
          ]};
        </script>
    "#;

    #[test]
    fn direct_anchors_take_priority_over_embedded_json() {
        let candidates = extract(&doc(ANCHOR_AND_JSON, FetchStrategy::Rendered));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Anchor Title");
        assert_eq!(candidates[0].price_text, "£10.00");
    }

    #[test]
    fn embedded_json_used_when_no_anchors_match() {
        let body = r#"
            <script>
              window.__STATE__ = {"results": [
                {"name": "JSON Title", "url": "/item/2", "sellPrice": "20.00"}
              ]};
            </script>
        "#;
        let candidates = extract(&doc(body, FetchStrategy::Rendered));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "JSON Title");
        assert_eq!(candidates[0].price_text, "20.00");
        assert_eq!(candidates[0].url, "https://uk.webuy.com/item/2");
    }

    #[test]
    fn relaxed_anchors_used_when_structured_strategies_fail() {
        let body = r#"
            <div>
              <a href="/sell/console-42">Loose Listing</a>
              <span class="sell-price">£55.00</span>
            </div>
        "#;
        let candidates = extract(&doc(body, FetchStrategy::Rendered));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Loose Listing");
        assert_eq!(candidates[0].price_text, "£55.00");
    }

    #[test]
    fn static_documents_fall_back_to_price_harvest() {
        let body = "<p>Prices range from £49.99 to £59.99 today.</p>";
        let candidates = extract(&doc(body, FetchStrategy::Static));
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, HARVESTED_TITLE);
        assert_eq!(candidates[0].price_text, "49.99");
    }

    #[test]
    fn rendered_documents_never_harvest_raw_prices() {
        let body = "<p>Prices range from £49.99 to £59.99 today.</p>";
        let candidates = extract(&doc(body, FetchStrategy::Rendered));
        assert!(candidates.is_empty());
    }
}
