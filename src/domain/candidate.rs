/// A single (title, price, url) listing scraped from a results page, not
/// yet scored against the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub title: String,
    /// Price text as it appeared on the page, currency symbols included.
    pub price_text: String,
    pub url: String,
}
