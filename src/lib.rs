pub mod domain;
pub mod extract;
pub mod fetch;
pub mod matching;
pub mod models;
pub mod processing;

/// Shared similarity threshold for promoting a candidate to a final match.
pub const SIMILARITY_THRESHOLD: f64 = 0.30;
