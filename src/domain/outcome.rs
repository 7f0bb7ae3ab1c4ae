use chrono::{DateTime, Utc};
use serde::Serialize;

/// Final resolution for one query.
///
/// This is the only value that crosses the pipeline boundary: a query
/// either matched a listing with a valid positive price, or it did not.
/// Fetch failures, unparsable prices and below-threshold candidates all
/// collapse into [`MatchResult::NoMatch`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MatchResult {
    Matched {
        title: String,
        price: f64,
        url: String,
        scraped_at: DateTime<Utc>,
    },
    NoMatch,
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }
}
