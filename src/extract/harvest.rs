use regex::Regex;

use crate::domain::candidate::Candidate;
use crate::domain::document::{FetchStrategy, RawDocument};

/// Title attached to a synthetic harvest candidate. Signals that the price
/// was pulled from raw text without a matching listing title.
pub const HARVESTED_TITLE: &str = "(unmatched price found on page)";

/// Regex price-harvest strategy, the last resort for static documents.
///
/// Emits one synthetic candidate from the first currency-prefixed amount in
/// the raw markup, so callers can see the page carried pricing data even
/// though no listing structure was parseable. Rendered documents skip this:
/// their structure was already fully available, so loose text is noise.
pub(crate) fn harvest_candidate(doc: &RawDocument) -> Option<Candidate> {
    if doc.strategy != FetchStrategy::Static {
        return None;
    }
    let pattern = Regex::new(r"[£$€]\s*([0-9]+(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)").unwrap();
    let captures = pattern.captures(&doc.body)?;
    Some(Candidate {
        title: HARVESTED_TITLE.to_string(),
        price_text: captures[1].to_string(),
        url: doc.search_url.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str, strategy: FetchStrategy) -> RawDocument {
        RawDocument {
            body: body.to_string(),
            strategy,
            search_url: "https://uk.webuy.com/search?stext=x".to_string(),
        }
    }

    #[test]
    fn first_currency_amount_wins() {
        let candidate =
            harvest_candidate(&doc("from £49.99 to £59.99", FetchStrategy::Static)).unwrap();
        assert_eq!(candidate.title, HARVESTED_TITLE);
        assert_eq!(candidate.price_text, "49.99");
        assert_eq!(candidate.url, "https://uk.webuy.com/search?stext=x");
    }

    #[test]
    fn thousands_separators_are_captured() {
        let candidate =
            harvest_candidate(&doc("was £1,234.50 new", FetchStrategy::Static)).unwrap();
        assert_eq!(candidate.price_text, "1,234.50");
    }

    #[test]
    fn rendered_documents_are_never_harvested() {
        assert!(harvest_candidate(&doc("only £49.99", FetchStrategy::Rendered)).is_none());
    }

    #[test]
    fn pages_without_currency_amounts_yield_nothing() {
        assert!(harvest_candidate(&doc("no prices here", FetchStrategy::Static)).is_none());
    }
}
