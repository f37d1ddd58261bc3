use crate::types::WordFrequency;

/// Statistics reported after a tag cloud file has been written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagCloudSummary {
    pub total_lines: usize,
    pub distinct_words: usize,
    pub selected_words: usize,
    pub min_count: WordFrequency,
    pub max_count: WordFrequency,
}
