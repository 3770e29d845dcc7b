//! Fuzzy "did you mean" suggestions for unmatched district names.

use crate::districts::DistrictSet;

/// Minimum similarity a candidate must reach to be suggested at all.
const SIMILARITY_FLOOR: f64 = 0.5;

/// Score a prefix match is raised to, so that a user typing the first few
/// letters of a district still sees it suggested.
const PREFIX_BOOST: f64 = 0.95;

/// Lower-case and strip everything outside `[a-z0-9]`. Used only for
/// similarity scoring, never for exact matching.
fn normalize(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Classic Levenshtein edit distance (insert/delete/substitute, unit cost).
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut cur = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        cur[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            cur[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(cur[j] + 1);
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Similarity ratio between the normalized forms of two strings:
/// `1 - distance / max(len)`. 1.0 means identical, 0.0 means maximally
/// different. If either normalized form is empty the ratio is 0.0, so an
/// all-punctuation input never matches anything.
pub(crate) fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let longest = a.chars().count().max(b.chars().count());
    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

/// Find the up-to-`count` canonical names closest to `input`, best first.
///
/// Candidates below the similarity floor are dropped. A canonical name
/// whose lower-cased form starts with the lower-cased, trimmed input is
/// boosted to at least 0.95; an exact (case-insensitive) equality is
/// forced to 1.0. Ties keep the canonical list's original order, which the
/// stable sort guarantees.
pub(crate) fn best_suggestions(districts: &DistrictSet, input: &str, count: usize) -> Vec<String> {
    let trimmed_input = input.trim().to_lowercase();
    if trimmed_input.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&str, f64)> = districts
        .iter()
        .map(|official| {
            let mut score = similarity(input, official);
            let official_lower = official.to_lowercase();
            if official_lower == trimmed_input {
                score = 1.0;
            } else if official_lower.starts_with(&trimmed_input) {
                score = score.max(PREFIX_BOOST);
            }
            (official, score)
        })
        .filter(|(_, score)| *score >= SIMILARITY_FLOOR)
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(count)
        .map(|(name, _)| name.to_string())
        .collect()
}
