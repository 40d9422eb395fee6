//! # Creative-name tokenizer
//!
//! Two stages: strip and classify a trailing file extension, then split the
//! stem on `_` into positional tokens. Every token keeps its original text
//! (for free-text fields) and an upper-cased copy (for code comparisons).

use std::ops::Range;

use regex::Regex;

use crate::error::Result;
use crate::types::FileExtension;

/// Segment delimiter inside creative names.
pub const DELIMITER: char = '_';

/// A `_`-delimited segment of a creative name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Original text, case preserved
    pub text: String,
    /// Trimmed, upper-cased text for comparisons
    pub normalized: String,
    /// Start position in the stem
    pub start: usize,
    /// End position in the stem
    pub end: usize,
    /// Token index in the sequence
    pub index: usize,
}

/// Output of [`Tokenizer::tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedName {
    /// Extension stripped from the end of the input, if recognized.
    pub extension: Option<FileExtension>,
    /// Segments of the stem, in order. Empty segments are kept.
    pub tokens: Vec<Token>,
}

impl TokenizedName {
    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if there are no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Normalized text of the token at `index`.
    pub fn normalized(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(|t| t.normalized.as_str())
    }

    /// Rebuilds display text from a run of tokens: original-case tokens
    /// joined with spaces, dots turned into spaces, ends trimmed.
    ///
    /// Out-of-range indices are clamped.
    pub fn free_text(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.tokens.len());
        let start = range.start.min(end);
        self.tokens[start..end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .replace('.', " ")
            .trim()
            .to_string()
    }
}

/// Tokenizer for creative names.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    re_extension: Regex,
}

impl Tokenizer {
    /// Create a new tokenizer instance.
    ///
    /// # Errors
    ///
    /// Returns `AdNameError::RegexError` if the extension pattern fails to
    /// compile (should never happen).
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_extension: Regex::new(r"(?i)\.(mp4|png|jpg|jpeg)$")?,
        })
    }

    /// Splits a trailing media extension off `input`.
    ///
    /// # Examples
    /// ```
    /// use adname_core::codec::Tokenizer;
    /// use adname_core::FileExtension;
    ///
    /// let tokenizer = Tokenizer::new().unwrap();
    /// assert_eq!(
    ///     tokenizer.split_extension("VI_SS_Ring.JPG"),
    ///     ("VI_SS_Ring", Some(FileExtension::Jpg))
    /// );
    /// assert_eq!(tokenizer.split_extension("VI_SS_Ring.gif"), ("VI_SS_Ring.gif", None));
    /// ```
    pub fn split_extension<'a>(&self, input: &'a str) -> (&'a str, Option<FileExtension>) {
        match self.re_extension.captures(input) {
            Some(caps) => {
                let whole = caps.get(0).map_or(input.len(), |m| m.start());
                (&input[..whole], caps[1].parse().ok())
            }
            None => (input, None),
        }
    }

    /// Tokenize a creative name into its extension and `_`-delimited segments.
    pub fn tokenize(&self, input: &str) -> TokenizedName {
        let (stem, extension) = self.split_extension(input);

        let mut tokens = Vec::new();
        let mut start = 0;
        for (index, text) in stem.split(DELIMITER).enumerate() {
            let end = start + text.len();
            tokens.push(Token {
                text: text.to_string(),
                normalized: text.trim().to_uppercase(),
                start,
                end,
                index,
            });
            start = end + DELIMITER.len_utf8();
        }

        TokenizedName { extension, tokens }
    }
}
