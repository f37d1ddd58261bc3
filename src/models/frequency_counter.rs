use crate::models::Tokenizer;
use crate::types::{WordFrequency, WordFrequencyMap, WordRef};
use log::debug;

/// Folds the words of successive lines into a case-insensitive frequency map.
#[derive(Debug, Default)]
pub struct FrequencyCounter {
    tokenizer: Tokenizer,
    frequencies: WordFrequencyMap,
}

impl FrequencyCounter {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self {
            tokenizer,
            frequencies: WordFrequencyMap::new(),
        }
    }

    /// Counts every word of `line`. Separator runs are discarded.
    pub fn accumulate(&mut self, line: &str) {
        for word in self.tokenizer.words(line) {
            *self.frequencies.entry(word).or_insert(0) += 1;
        }
    }

    pub fn accumulate_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut total_lines = 0;

        for line in lines {
            self.accumulate(line.as_ref());
            total_lines += 1;
        }

        debug!(
            "Counted {} lines, {} distinct words so far",
            total_lines,
            self.frequencies.len()
        );
    }

    /// Current count of `word`, which is expected to be lower-cased already.
    pub fn frequency(&self, word: &WordRef) -> WordFrequency {
        self.frequencies.get(word).copied().unwrap_or(0)
    }

    pub fn frequencies(&self) -> &WordFrequencyMap {
        &self.frequencies
    }

    /// Ends aggregation and hands the completed map to the ranking phase.
    pub fn into_frequencies(self) -> WordFrequencyMap {
        self.frequencies
    }
}

/// Counts the word frequencies of all `lines` combined.
///
/// # Example
/// ```
/// use tag_cloud::count_word_frequencies;
///
/// let frequencies = count_word_frequencies(["The cat", "the hat"]);
/// assert_eq!(frequencies.get("the"), Some(&2));
/// assert_eq!(frequencies.get("cat"), Some(&1));
/// ```
pub fn count_word_frequencies<I, S>(lines: I) -> WordFrequencyMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counter = FrequencyCounter::default();
    counter.accumulate_lines(lines);
    counter.into_frequencies()
}
