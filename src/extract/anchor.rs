use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::domain::candidate::Candidate;

/// How many ancestor containers to climb from a product link while looking
/// for its price element. Tunable; matches observed result-card depth.
pub const ANCESTOR_WALK_LIMIT: usize = 5;

/// Product-detail link patterns, tightest first.
const PRODUCT_ANCHOR_SELECTOR: &str = r#"a.prodLink, a[href*="product-detail"]"#;

/// Price elements as they appear inside result cards.
const PRICE_SELECTOR: &str = r#"div.text-red strong, [class*="price"]"#;

/// Looser link patterns for pages that do not use the standard product
/// markup: by path keyword first, then by class name.
const RELAXED_ANCHOR_SELECTORS: &[&str] = &[
    r#"a[href*="product"]"#,
    r#"a[href*="buy"]"#,
    r#"a[href*="sell"]"#,
    r#"a[href*="item"]"#,
    r#"a[href*="detail"]"#,
    r#"a[class*="product"]"#,
    r#"a[class*="item"]"#,
];

/// Direct anchor strategy: pair each product-detail link with the nearest
/// price element found by walking up its ancestor containers.
pub(crate) fn direct_candidates(html: &Html, base_url: Option<&Url>) -> Vec<Candidate> {
    let selector = Selector::parse(PRODUCT_ANCHOR_SELECTOR).unwrap();
    candidates_for(html, &selector, base_url)
}

/// Pattern-relaxation strategy: the first relaxed pattern matching any
/// links at all is used; its links still require a paired price element.
pub(crate) fn relaxed_candidates(html: &Html, base_url: Option<&Url>) -> Vec<Candidate> {
    for pattern in RELAXED_ANCHOR_SELECTORS {
        let selector = Selector::parse(pattern).unwrap();
        if html.select(&selector).next().is_none() {
            continue;
        }
        return candidates_for(html, &selector, base_url);
    }
    vec![]
}

fn candidates_for(html: &Html, selector: &Selector, base_url: Option<&Url>) -> Vec<Candidate> {
    html.select(selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            let title = element_text(&anchor);
            if title.is_empty() {
                return None;
            }
            let price_text = price_near(&anchor)?;
            Some(Candidate {
                title,
                price_text,
                url: resolve_href(href, base_url),
            })
        })
        .collect()
}

/// Walks up from `anchor` through at most [`ANCESTOR_WALK_LIMIT`] ancestor
/// containers, returning the text of the first descendant price element
/// that carries a digit.
fn price_near(anchor: &ElementRef) -> Option<String> {
    let selector = Selector::parse(PRICE_SELECTOR).unwrap();
    let mut node = anchor.parent()?;
    for _ in 0..ANCESTOR_WALK_LIMIT {
        if let Some(container) = ElementRef::wrap(node) {
            for element in container.select(&selector) {
                let text = element_text(&element);
                if text.chars().any(|c| c.is_ascii_digit()) {
                    return Some(first_amount(&text));
                }
            }
        }
        node = node.parent()?;
    }
    None
}

/// First currency amount in `text`. Wrapper elements matched by class can
/// collapse several amounts into one string ("£289.00 £259.00"), which a
/// second decimal point would make unparseable downstream.
fn first_amount(text: &str) -> String {
    let pattern = Regex::new(r"[£$€]?\s*[0-9][0-9,]*(?:\.[0-9]{1,2})?").unwrap();
    match pattern.find(text) {
        Some(amount) => amount.as_str().trim().to_string(),
        None => text.to_string(),
    }
}

/// Visible text of an element with internal whitespace collapsed.
fn element_text(element: &ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn resolve_href(href: &str, base_url: Option<&Url>) -> String {
    match base_url.and_then(|base| base.join(href).ok()) {
        Some(url) => url.to_string(),
        None => href.to_string(),
    }
}
