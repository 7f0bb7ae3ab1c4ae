use html_escape::decode_html_entities;
use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

use crate::domain::candidate::Candidate;
use crate::extract::anchor::resolve_href;

/// Depth bound for the JSON walk; stops runaway recursion on pathological
/// payloads.
const MAX_WALK_DEPTH: usize = 32;

const TITLE_KEYS: &[&str] = &["title", "name"];
const URL_KEYS: &[&str] = &["url", "href"];
const PRICE_KEYS: &[&str] = &["price", "sellPrice", "weSellFor"];

/// Embedded-data strategy: mine JSON blobs carried by the page for arrays
/// of priced listings.
///
/// Sources are script bodies and HTML-encoded `data-product-json`
/// attributes. Malformed blobs are logged and skipped, never fatal.
pub(crate) fn embedded_candidates(html: &Html, base_url: Option<&Url>) -> Vec<Candidate> {
    let mut candidates = vec![];

    let script_selector = Selector::parse("script").unwrap();
    for script in html.select(&script_selector) {
        let text = script.text().collect::<String>();
        if let Some(value) = parse_embedded_json(&text) {
            candidates.extend(listing_candidates(&value, base_url));
        }
    }

    let attr_selector = Selector::parse("[data-product-json]").unwrap();
    for element in html.select(&attr_selector) {
        let Some(raw) = element.value().attr("data-product-json") else {
            continue;
        };
        // Convert the HTML-encoded attribute into valid JSON first.
        let decoded = decode_html_entities(raw).to_string();
        if let Some(value) = parse_embedded_json(&decoded) {
            candidates.extend(listing_candidates(&value, base_url));
        }
    }

    candidates
}

/// Extracts a JSON object from a text block: the whole block if it parses,
/// otherwise the outermost brace-delimited slice, which covers
/// `window.X = {...};` style assignments.
pub(crate) fn parse_embedded_json(text: &str) -> Option<Value> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Some(value);
    }
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str(&trimmed[start..=end]) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Failed to parse embedded JSON: {e}");
            None
        }
    }
}

fn listing_candidates(value: &Value, base_url: Option<&Url>) -> Vec<Candidate> {
    let mut lists = vec![];
    collect_priced_lists(value, 0, &mut lists);
    lists
        .into_iter()
        .flatten()
        .filter_map(|item| candidate_from_item(item, base_url))
        .collect()
}

/// Bounded depth-first search for lists whose first element is an object
/// carrying a price-like key (case-insensitive substring match). Matched
/// lists are taken whole and not descended into.
fn collect_priced_lists<'a>(value: &'a Value, depth: usize, out: &mut Vec<&'a [Value]>) {
    if depth > MAX_WALK_DEPTH {
        return;
    }
    match value {
        Value::Array(items) => {
            if let Some(Value::Object(first)) = items.first()
                && first.keys().any(|k| k.to_lowercase().contains("price"))
            {
                out.push(items);
                return;
            }
            for item in items {
                collect_priced_lists(item, depth + 1, out);
            }
        }
        Value::Object(map) => {
            for child in map.values() {
                collect_priced_lists(child, depth + 1, out);
            }
        }
        _ => {}
    }
}

/// Builds a candidate from one listing object. Elements missing a title or
/// url are skipped; a missing price yields empty price text, which the
/// selector discards later.
fn candidate_from_item(item: &Value, base_url: Option<&Url>) -> Option<Candidate> {
    let object = item.as_object()?;
    let title = string_field(object, TITLE_KEYS)?;
    let href = string_field(object, URL_KEYS)?;
    let price_text = PRICE_KEYS
        .iter()
        .find_map(|key| object.get(*key))
        .map(price_value_text)
        .unwrap_or_default();
    Some(Candidate {
        title,
        price_text,
        url: resolve_href(&href, base_url),
    })
}

fn string_field(object: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| object.get(*key))
        .and_then(|value| value.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn price_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
