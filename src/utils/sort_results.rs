use crate::types::{RankedWord, WordFrequencyMap};
use std::cmp::Ordering;

/// Ranking order of `(word, count)` pairs.
///
/// - **Primary:** frequency in descending order (higher frequency first).
/// - **Secondary:** word in ascending lexicographical order.
///
/// Words are unique keys of a frequency map, so no two distinct entries
/// compare `Equal`.
pub fn rank_order(a: &RankedWord, b: &RankedWord) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Sorts a mapping of words to their frequencies into ranking order.
///
/// ### Example:
/// ```rust
/// use std::collections::HashMap;
/// use tag_cloud::types::WordFrequencyMap;
/// use tag_cloud::sort_results;
///
/// let mut results: WordFrequencyMap = HashMap::new();
/// results.insert("apple".to_string(), 10);
/// results.insert("tesla".to_string(), 15);
/// results.insert("google".to_string(), 10);
///
/// let sorted = sort_results(&results);
/// assert_eq!(sorted, vec![
///     ("tesla".to_string(), 15),
///     ("apple".to_string(), 10),
///     ("google".to_string(), 10)
/// ]);
/// ```
pub fn sort_results(results: &WordFrequencyMap) -> Vec<RankedWord> {
    let mut sorted_results: Vec<RankedWord> = results
        .iter()
        .map(|(word, frequency)| (word.to_owned(), *frequency))
        .collect();

    sorted_results.sort_by(rank_order);

    sorted_results
}
