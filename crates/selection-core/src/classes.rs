//! Character classes for scanning predicates.
//!
//! Word/object seek commands express themselves as [`skip_while`]
//! (crate::Cursor::skip_while) calls over these predicates. Classification is
//! per-`char`; grapheme clustering stays a host concern.

/// Coarse class of one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCategory {
    /// Whitespace, including line breaks.
    Blank,
    /// Anything that is neither blank nor a word character.
    Punctuation,
    /// Letters, digits, and configured extra word characters.
    Word,
}

/// Configurable character classifier.
///
/// The extra word characters default to `'_'`, matching the usual
/// identifier-oriented word motion.
#[derive(Debug, Clone)]
pub struct CharacterClasses {
    extra_word_chars: Vec<char>,
}

impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            extra_word_chars: vec!['_'],
        }
    }
}

impl CharacterClasses {
    /// Classifier with the default extra word characters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier treating `extra` as additional word characters.
    pub fn with_extra_word_chars(extra: impl IntoIterator<Item = char>) -> Self {
        Self {
            extra_word_chars: extra.into_iter().collect(),
        }
    }

    /// The class of `c`.
    pub fn category(&self, c: char) -> CharCategory {
        if c.is_whitespace() {
            CharCategory::Blank
        } else if c.is_alphanumeric() || self.extra_word_chars.contains(&c) {
            CharCategory::Word
        } else {
            CharCategory::Punctuation
        }
    }

    /// Returns `true` if `c` is a word character.
    pub fn is_word(&self, c: char) -> bool {
        self.category(c) == CharCategory::Word
    }

    /// Returns `true` if `c` is whitespace.
    pub fn is_blank(&self, c: char) -> bool {
        self.category(c) == CharCategory::Blank
    }

    /// Returns `true` if `c` is punctuation.
    pub fn is_punctuation(&self, c: char) -> bool {
        self.category(c) == CharCategory::Punctuation
    }
}
