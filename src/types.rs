use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a counted word as an owned, lower-cased `String`.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// Represents a map of words to their frequency counts within a text document.
/// The key is the lower-cased `Word`, and the value is the `WordFrequency`.
pub type WordFrequencyMap = HashMap<Word, WordFrequency>;

/// A `(word, count)` pair as produced by ranking.
pub type RankedWord = (Word, WordFrequency);

/// CSS font size (in the `f{size}` class naming scheme) of a rendered tag.
pub type FontSize = u32;
