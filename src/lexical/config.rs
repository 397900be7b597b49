//! Contains the [`LexicalConfig`] tables consulted by the tokenizer.

use std::collections::HashSet;

use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;

use super::token::KeywordKind;

/// Characters that make up operator runs.
pub const DEFAULT_OPERATOR_CHARS: &str = "+-*/=!&|^%><.:~";

/// Character starting a line comment; doubled it toggles a block comment.
pub const DEFAULT_COMMENT_MARKER: char = '#';

/// Bracket nesting depth accepted before tokenizing fails.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The constant tables the tokenizer classifies characters with.
///
/// A configuration is built once and shared read-only by every tokenization.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct LexicalConfig {
    /// Get the words classified as keywords.
    #[get = "pub"]
    keywords: HashSet<String>,

    /// Get the characters operator runs are made of.
    #[get = "pub"]
    operator_chars: HashSet<char>,

    /// Get the comment marker.
    #[get_copy = "pub"]
    comment_marker: char,

    /// Get the maximum bracket nesting depth.
    #[get_copy = "pub"]
    max_depth: usize,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordKind::iter()
                .map(|keyword| keyword.as_str().to_string())
                .collect(),
            operator_chars: DEFAULT_OPERATOR_CHARS.chars().collect(),
            comment_marker: DEFAULT_COMMENT_MARKER,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LexicalConfig {
    /// Replaces the keyword set.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the operator character set.
    #[must_use]
    pub fn with_operator_chars(mut self, operator_chars: &str) -> Self {
        self.operator_chars = operator_chars.chars().collect();
        self
    }

    /// Replaces the comment marker.
    #[must_use]
    pub fn with_comment_marker(mut self, comment_marker: char) -> Self {
        self.comment_marker = comment_marker;
        self
    }

    /// Replaces the maximum bracket nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether `word` is a keyword.
    #[must_use]
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Whether `character` belongs to operator runs.
    #[must_use]
    pub fn is_operator_char(&self, character: char) -> bool {
        self.operator_chars.contains(&character)
    }
}
