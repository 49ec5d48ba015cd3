//! "Did you mean" suggestions for unknown commands.
//!
//! Candidates are rated with the Sørensen–Dice coefficient over character
//! bigrams: `2 * |common| / (|bigrams(a)| + |bigrams(b)|)`. Comparison
//! ignores case and whitespace. Repeated bigrams are matched at most as many
//! times as they occur in both strings. Strings shorter than two characters
//! rate 1.0 when equal and 0.0 otherwise.

use std::collections::HashMap;

/// A candidate name and its similarity to the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub target: String,
    /// Similarity in `0.0..=1.0`.
    pub rating: f64,
}

fn normalize(s: &str) -> Vec<char> {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Similarity of two strings in `0.0..=1.0`.
pub fn compare(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::with_capacity(a.len() - 1);
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    let mut common = 0usize;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1]))
            && *count > 0
        {
            *count -= 1;
            common += 1;
        }
    }

    (2 * common) as f64 / (a.len() - 1 + b.len() - 1) as f64
}

/// Rate every candidate against `input`, best first.
///
/// Equal ratings keep the candidates' original order.
pub fn rank<I, S>(input: &str, candidates: I) -> Vec<Rating>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ratings: Vec<Rating> = candidates
        .into_iter()
        .map(|candidate| {
            let target = candidate.as_ref();
            Rating {
                rating: compare(input, target),
                target: target.to_string(),
            }
        })
        .collect();

    ratings.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ratings
}

/// Candidates rated at or above `threshold`, best first.
pub fn suggest<I, S>(input: &str, candidates: I, threshold: f64) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    rank(input, candidates)
        .into_iter()
        .filter(|r| r.rating >= threshold)
        .map(|r| r.target)
        .collect()
}
