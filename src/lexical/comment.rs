//! Removal of comments ahead of tokenization.

use super::{
    cursor::{Cursor, Position},
    error::LexResult,
    Error,
};

/// Returns a copy of `source` with every comment removed.
///
/// A lone `marker` starts a line comment running up to the next newline. A doubled marker
/// toggles a block comment, so the same pair both opens and closes it. Newlines are always
/// copied, which keeps the line of every remaining character unchanged.
///
/// # Errors
/// - [`Error::UnclosedBlockComment`] at the opening pair if the source ends inside a block
///   comment.
pub fn strip_comments(source: &str, marker: char) -> LexResult<String> {
    let mut stripped = String::with_capacity(source.len());
    let mut cursor = Cursor::new(source);

    let mut in_line_comment = false;
    let mut block_entered_at: Option<Position> = None;

    while let Some(character) = cursor.current() {
        if in_line_comment {
            if character == '\n' {
                in_line_comment = false;
                stripped.push('\n');
            }
        } else if character == marker && cursor.peek_next() == Some(marker) {
            block_entered_at = match block_entered_at {
                Some(_) => None,
                None => Some(cursor.position()),
            };
            cursor.advance()?;
        } else if block_entered_at.is_some() {
            if character == '\n' {
                stripped.push('\n');
            }
        } else if character == marker {
            in_line_comment = true;
        } else {
            stripped.push(character);
        }

        cursor.advance()?;
    }

    match block_entered_at {
        Some(position) => Err(Error::UnclosedBlockComment(position)),
        None => Ok(stripped),
    }
}
