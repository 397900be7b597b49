//! Contains the [`Cursor`] tracking the current offset and line/column inside a source buffer.

use std::fmt::Display;

use getset::CopyGetters;

use super::{error::LexResult, Error};

/// Pointing to a particular location in a source buffer.
///
/// Both fields start at 0. The [`Display`] implementation prints them starting at 1, as
/// diagnostics do.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// Line number of the location (starts at 0).
    pub line: usize,

    /// Column number of the location (starts at 0).
    pub column: usize,
}

impl Position {
    /// Creates a new position from a 0-based line and column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A forward-only cursor over a source buffer.
///
/// Copying a cursor yields an independent look-ahead cursor; the cursor it was copied from only
/// moves when the copy is assigned back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct Cursor<'a> {
    source: &'a str,

    /// Get the byte offset of the current character.
    #[get_copy = "pub"]
    offset: usize,

    /// Get the line and column of the current character.
    #[get_copy = "pub"]
    position: Position,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            position: Position::default(),
        }
    }

    /// Get the whole buffer the cursor runs over.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Get the length of the buffer in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Whether the cursor has consumed the whole buffer.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the character at the current offset without consuming it.
    #[must_use]
    pub fn current(&self) -> Option<char> {
        self.source.get(self.offset..)?.chars().next()
    }

    /// Returns the character following the current one.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source.get(self.offset..)?.chars();
        chars.next();
        chars.next()
    }

    /// Moves one character forward.
    ///
    /// The line and column are updated from the character being consumed: a printable character
    /// moves the column by one, a newline moves to the start of the next line, and any other
    /// control character leaves the position unchanged.
    ///
    /// # Errors
    /// - [`Error::OutOfRange`] if the cursor is already at the end of the buffer.
    pub fn advance(&mut self) -> LexResult<()> {
        let character = self.current().ok_or(Error::OutOfRange(self.position))?;

        if character == '\n' {
            self.position.line += 1;
            self.position.column = 0;
        } else if !character.is_control() {
            self.position.column += 1;
        }

        self.offset += character.len_utf8();

        Ok(())
    }

    /// Consumes characters while the predicate holds and returns the consumed slice.
    pub fn eat_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let start = self.offset;
        while let Some(character) = self.current() {
            if !predicate(character) {
                break;
            }
            // the current character exists, so advancing cannot fail
            let _ = self.advance();
        }
        &self.source[start..self.offset]
    }

    /// Returns the slice from `start` up to, not including, the current offset.
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }
}
