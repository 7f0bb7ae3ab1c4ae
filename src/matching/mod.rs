use chrono::Utc;

use crate::domain::candidate::Candidate;
use crate::domain::outcome::MatchResult;

pub mod price;
pub mod similarity;

/// A candidate annotated with its query similarity and parsed price.
/// Transient: only the running best survives the scan.
struct ScoredCandidate<'a> {
    candidate: &'a Candidate,
    similarity: f64,
    price: f64,
}

/// Picks the best-scoring candidate with a valid price, in a single pass.
///
/// Candidates whose price fails to normalize are skipped, never fatal.
/// Ties on similarity keep the first-seen candidate, so extraction order is
/// the tie-break. Returns [`MatchResult::NoMatch`] when no surviving
/// candidate reaches `threshold`.
pub fn select_best(query: &str, candidates: &[Candidate], threshold: f64) -> MatchResult {
    let mut best: Option<ScoredCandidate> = None;

    for candidate in candidates {
        let price = match price::normalize(&candidate.price_text) {
            Ok(price) => price,
            Err(e) => {
                log::debug!("Skipping candidate {:?}: {e}", candidate.title);
                continue;
            }
        };
        let similarity = similarity::score(query, &candidate.title);
        if best.as_ref().is_none_or(|b| similarity > b.similarity) {
            best = Some(ScoredCandidate {
                candidate,
                similarity,
                price,
            });
        }
    }

    match best {
        Some(best) if best.similarity >= threshold => MatchResult::Matched {
            title: best.candidate.title.clone(),
            price: best.price,
            url: best.candidate.url.clone(),
            scraped_at: Utc::now(),
        },
        _ => MatchResult::NoMatch,
    }
}
