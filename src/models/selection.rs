use crate::types::{RankedWord, WordFrequency, WordFrequencyMap};
use crate::utils::sort_results;
use log::debug;

/// The top words chosen for rendering, in alphabetical order, together with
/// the count bounds of the chosen subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<RankedWord>,
    min_count: WordFrequency,
    max_count: WordFrequency,
}

impl Selection {
    /// Selects the `max_tags` highest-ranked words of a completed frequency map.
    pub fn select_top(frequencies: &WordFrequencyMap, max_tags: usize) -> Self {
        Self::from_ranked(sort_results(frequencies), max_tags)
    }

    /// Builds a selection from entries already sorted in ranking order.
    pub fn from_ranked(ranked: Vec<RankedWord>, max_tags: usize) -> Self {
        let mut entries = extract_top(ranked, max_tags);
        let (min_count, max_count) = count_bounds(&entries);

        entries.sort_by(|a, b| a.0.cmp(&b.0));

        debug!(
            "Selected {} words with counts in [{}, {}]",
            entries.len(),
            min_count,
            max_count
        );

        Self {
            entries,
            min_count,
            max_count,
        }
    }

    /// Selected `(word, count)` pairs, ascending by word.
    pub fn entries(&self) -> &[RankedWord] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedWord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest count among the selected words; 0 when nothing was selected.
    pub fn min_count(&self) -> WordFrequency {
        self.min_count
    }

    /// Largest count among the selected words; 0 when nothing was selected.
    pub fn max_count(&self) -> WordFrequency {
        self.max_count
    }
}

/// Keeps the first `max_tags` entries of a ranked list.
pub fn extract_top(mut ranked: Vec<RankedWord>, max_tags: usize) -> Vec<RankedWord> {
    ranked.truncate(max_tags);
    ranked
}

/// Minimum and maximum counts of `entries`, or `(0, 0)` if there are none.
pub fn count_bounds(entries: &[RankedWord]) -> (WordFrequency, WordFrequency) {
    entries
        .iter()
        .map(|(_, count)| *count)
        .fold(None, |bounds, count| match bounds {
            None => Some((count, count)),
            Some((min, max)) => Some((min.min(count), max.max(count))),
        })
        .unwrap_or((0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count_word_frequencies;

    fn words(selection: &Selection) -> Vec<&str> {
        selection.iter().map(|(word, _)| word.as_str()).collect()
    }

    #[test]
    fn test_select_top_breaks_ties_alphabetically() {
        let frequencies = count_word_frequencies(["the cat sat on the mat", "the cat ran"]);
        let selection = Selection::select_top(&frequencies, 3);

        assert_eq!(words(&selection), vec!["cat", "mat", "the"]);
        assert_eq!(selection.min_count(), 1);
        assert_eq!(selection.max_count(), 3);
    }

    #[test]
    fn test_select_zero() {
        let frequencies = count_word_frequencies(["a b c"]);
        let selection = Selection::select_top(&frequencies, 0);

        assert!(selection.is_empty());
        assert_eq!(selection.min_count(), 0);
        assert_eq!(selection.max_count(), 0);
    }

    #[test]
    fn test_select_more_than_available() {
        let frequencies = count_word_frequencies(["b a a"]);
        let selection = Selection::select_top(&frequencies, 10);

        assert_eq!(
            selection.entries().to_vec(),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
        assert_eq!(selection.min_count(), 1);
        assert_eq!(selection.max_count(), 2);
    }

    #[test]
    fn test_select_from_empty_map() {
        let selection = Selection::select_top(&WordFrequencyMap::new(), 5);

        assert!(selection.is_empty());
        assert_eq!((selection.min_count(), selection.max_count()), (0, 0));
    }

    #[test]
    fn test_bounds_cover_selection_only() {
        let frequencies = count_word_frequencies(["x x x x y y y z z w"]);
        let selection = Selection::select_top(&frequencies, 2);

        assert_eq!(words(&selection), vec!["x", "y"]);
        assert_eq!(selection.min_count(), 3);
        assert_eq!(selection.max_count(), 4);
    }

    #[test]
    fn test_selected_words_outrank_the_rest() {
        let frequencies =
            count_word_frequencies(["one two two three three three four four four four five"]);
        let selection = Selection::select_top(&frequencies, 3);

        let lowest_selected = selection.min_count();
        for (word, count) in &frequencies {
            if !selection.iter().any(|(selected, _)| selected == word) {
                assert!(*count <= lowest_selected);
            }
        }
    }

    #[test]
    fn test_count_bounds_of_unsorted_entries() {
        let entries = vec![
            ("b".to_string(), 4),
            ("a".to_string(), 9),
            ("c".to_string(), 2),
        ];
        assert_eq!(count_bounds(&entries), (2, 9));
    }
}
