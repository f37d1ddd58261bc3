use crate::constants::SEPARATORS;
use std::collections::HashSet;

/// Fixed set of characters that act as word boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    separators: HashSet<char>,
}

impl SeparatorSet {
    /// Builds a set from the unique characters of `chars`.
    pub fn from_chars(chars: &str) -> Self {
        Self {
            separators: chars.chars().collect(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.separators.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.separators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.separators.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(SEPARATORS)
    }
}
