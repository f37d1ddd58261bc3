use crate::models::SeparatorSet;
use crate::types::{Word, WordRef};

/// A maximal run of characters sharing the same separator classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a WordRef,
    pub is_separator: bool,
}

impl<'a> Token<'a> {
    /// Byte length of the token, used to advance through a line.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    separators: SeparatorSet,
}

impl Tokenizer {
    pub fn new(separators: SeparatorSet) -> Self {
        Self { separators }
    }

    pub fn separators(&self) -> &SeparatorSet {
        &self.separators
    }

    /// Returns the word or separator run starting at byte offset `position`.
    ///
    /// The run extends rightward while characters keep the classification of
    /// the character at `position`, so it ends either at the end of `text` or
    /// right before the first character classified differently.
    ///
    /// `position` must lie on a character boundary. A `position` equal to
    /// `text.len()` yields an empty token; anything past that panics.
    pub fn next_token<'a>(&self, text: &'a str, position: usize) -> Token<'a> {
        let rest = &text[position..];
        let mut chars = rest.char_indices();

        let is_separator = match chars.next() {
            Some((_, c)) => self.separators.contains(c),
            None => {
                return Token {
                    text: rest,
                    is_separator: false,
                }
            }
        };

        let end = chars
            .find(|&(_, c)| self.separators.contains(c) != is_separator)
            .map_or(rest.len(), |(idx, _)| idx);

        Token {
            text: &rest[..end],
            is_separator,
        }
    }

    /// Iterates every token of `text`, from left to right.
    pub fn tokens<'a>(&self, text: &'a str) -> Tokens<'_, 'a> {
        Tokens {
            tokenizer: self,
            text,
            position: 0,
        }
    }

    /// Tokenizer function to split the text into alternating word and separator runs.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        self.tokens(text).collect()
    }

    /// Lower-cased words of `text`, with separator runs discarded.
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Word> + 'a {
        self.tokens(text)
            .filter(|token| !token.is_separator)
            .map(|token| token.text.to_lowercase())
    }
}

pub struct Tokens<'t, 'a> {
    tokenizer: &'t Tokenizer,
    text: &'a str,
    position: usize,
}

impl<'t, 'a> Iterator for Tokens<'t, 'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }

        let token = self.tokenizer.next_token(self.text, self.position);
        self.position += token.len();

        Some(token)
    }
}
