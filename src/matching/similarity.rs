/// Case-insensitive textual closeness between a query and a listing title.
///
/// Computed as a longest-common-subsequence ratio over lowercased
/// characters: `2 * lcs(a, b) / (|a| + |b|)`. Identical strings score 1.0,
/// strings with disjoint character sets score 0.0, and either input being
/// empty scores 0.0. Pure and deterministic.
pub fn score(query: &str, title: &str) -> f64 {
    let a: Vec<char> = query.to_lowercase().chars().collect();
    let b: Vec<char> = title.to_lowercase().chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    2.0 * lcs_len(&a, &b) as f64 / (a.len() + b.len()) as f64
}

/// Longest-common-subsequence length, two-row dynamic programming.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
