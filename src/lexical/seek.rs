//! Locating the end of bracketed groups and string literals.
//!
//! Seeking never classifies tokens. It only moves a cursor to the character that closes the
//! region the cursor currently sits on, skipping escapes, strings and nested groups on the way.

use super::{config::DEFAULT_MAX_DEPTH, cursor::Cursor, error::LexResult, Error};

/// Returns the bracket closing the group opened by `character`.
fn closing_bracket(character: char) -> Option<char> {
    match character {
        '(' => Some(')'),
        '{' => Some('}'),
        '[' => Some(']'),
        _ => None,
    }
}

/// Moves the cursor to the next `"` that is not escaped.
///
/// The character under the cursor is not checked; it is the opening quote.
///
/// # Errors
/// - [`Error::UnclosedString`] at the opening quote if the buffer ends first.
pub fn seek_string(cursor: &mut Cursor) -> LexResult<()> {
    let start = cursor.position();

    scan_string(cursor).map_err(|err| match err {
        Error::OutOfRange(_) => Error::UnclosedString(start),
        err => err,
    })
}

fn scan_string(cursor: &mut Cursor) -> LexResult<()> {
    loop {
        cursor.advance()?;
        match cursor.current() {
            Some('"') => return Ok(()),
            Some('\\') => cursor.advance()?,
            Some(_) => {}
            None => return Err(Error::OutOfRange(cursor.position())),
        }
    }
}

/// Moves the cursor to the next `target` outside of strings and nested groups.
///
/// The character under the cursor is not checked; it is the one opening the region. Returns
/// the deepest level of nested groups passed over, 0 if there were none.
///
/// Groups may nest up to [`DEFAULT_MAX_DEPTH`] levels, counting the region itself; use
/// [`seek_bounded`] for another limit.
///
/// # Errors
/// - [`Error::MissingClosingBracket`] at the starting position if `target` is never found.
/// - [`Error::UnclosedString`] or [`Error::MissingClosingBracket`] from nested regions.
/// - [`Error::NestingTooDeep`] at the first group opened beyond the limit.
pub fn seek(cursor: &mut Cursor, target: char) -> LexResult<usize> {
    seek_bounded(cursor, target, 1, DEFAULT_MAX_DEPTH)
}

/// Same as [`seek`], treating the region as nested `depth` levels deep.
///
/// # Errors
/// - [`Error::NestingTooDeep`] at the first group opened beyond `max_depth`.
/// - The errors of [`seek`].
pub fn seek_bounded(
    cursor: &mut Cursor,
    target: char,
    depth: usize,
    max_depth: usize,
) -> LexResult<usize> {
    let start = cursor.position();

    scan_group(cursor, target, depth, max_depth).map_err(|err| match err {
        Error::OutOfRange(_) => Error::MissingClosingBracket {
            target,
            position: start,
        },
        err => err,
    })
}

fn scan_group(cursor: &mut Cursor, target: char, depth: usize, max_depth: usize) -> LexResult<usize> {
    let mut deepest = 0;

    loop {
        cursor.advance()?;
        let Some(character) = cursor.current() else {
            return Err(Error::OutOfRange(cursor.position()));
        };

        if character == target {
            return Ok(deepest);
        }

        match character {
            '\\' => cursor.advance()?,
            '"' => seek_string(cursor)?,
            _ => {
                if let Some(closing) = closing_bracket(character) {
                    if depth >= max_depth {
                        return Err(Error::NestingTooDeep {
                            limit: max_depth,
                            position: cursor.position(),
                        });
                    }
                    let nested = seek_bounded(cursor, closing, depth + 1, max_depth)?;
                    deepest = deepest.max(nested + 1);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::lexical::Position;

    /// Generates bracket-balanced text along with its deepest nesting level.
    fn balanced() -> impl Strategy<Value = (String, usize)> {
        let text = "[a-z ,;]{0,3}".prop_map(|text| (text, 0));

        text.prop_recursive(8, 64, 4, |inner| {
            (
                prop::sample::select(vec![('(', ')'), ('[', ']'), ('{', '}')]),
                prop::collection::vec(inner, 0..4),
            )
                .prop_map(|((open, close), parts)| {
                    let depth = parts.iter().map(|(_, depth)| *depth).max().unwrap_or(0) + 1;
                    let body = parts.into_iter().map(|(text, _)| text).collect::<String>();
                    (format!("{open}{body}{close}"), depth)
                })
        })
    }

    proptest! {
        #[test]
        fn test_seek_balanced(parts in prop::collection::vec(balanced(), 0..4)) {
            let depth = parts.iter().map(|(_, depth)| *depth).max().unwrap_or(0);
            let body = parts.into_iter().map(|(text, _)| text).collect::<String>();
            let source = format!("({body})");

            let mut cursor = Cursor::new(&source);
            prop_assert_eq!(seek(&mut cursor, ')'), Ok(depth));
            prop_assert_eq!(cursor.offset(), source.len() - 1);
            prop_assert_eq!(cursor.current(), Some(')'));
        }
    }

    /// Seeks from the first character of `source` and returns the offset reached.
    fn seek_from_start(source: &str, target: char) -> LexResult<(usize, usize)> {
        let mut cursor = Cursor::new(source);
        let depth = seek(&mut cursor, target)?;
        assert_eq!(cursor.current(), Some(target));
        Ok((cursor.offset(), depth))
    }

    #[test]
    fn test_seek_flat() {
        assert_eq!(seek_from_start("(a, b)", ')'), Ok((5, 0)));
        assert_eq!(seek_from_start("{}", '}'), Ok((1, 0)));
    }

    #[test]
    fn test_seek_skips_nested_groups() {
        assert_eq!(seek_from_start("(a(b[c]))", ')'), Ok((8, 2)));
        assert_eq!(seek_from_start("{ f(); { g[1]; } }", '}'), Ok((17, 2)));
        assert_eq!(seek_from_start("( { ) } )", ')'), Ok((8, 1)));
    }

    #[test]
    fn test_seek_skips_strings_and_escapes() {
        assert_eq!(seek_from_start(r#"(")" x)"#, ')'), Ok((6, 0)));
        assert_eq!(seek_from_start(r#"("\")" x)"#, ')'), Ok((8, 0)));
        assert_eq!(seek_from_start(r"(\) x)", ')'), Ok((5, 0)));
    }

    #[test]
    fn test_seek_does_not_check_start() {
        assert_eq!(seek_from_start("))", ')'), Ok((1, 0)));
    }

    #[test]
    fn test_missing_closing_bracket() {
        assert_eq!(
            seek_from_start("(a, b", ')'),
            Err(Error::MissingClosingBracket {
                target: ')',
                position: Position::new(0, 0)
            })
        );
        // the innermost unclosed group is reported
        assert_eq!(
            seek_from_start("{\n  ( }", '}'),
            Err(Error::MissingClosingBracket {
                target: ')',
                position: Position::new(1, 2)
            })
        );
        assert_eq!(
            seek_from_start(r"(\", ')'),
            Err(Error::MissingClosingBracket {
                target: ')',
                position: Position::new(0, 0)
            })
        );
    }

    #[test]
    fn test_unclosed_string() {
        assert_eq!(
            seek_from_start("(x \"abc)", ')'),
            Err(Error::UnclosedString(Position::new(0, 3)))
        );

        let mut cursor = Cursor::new(r#""abc\""#);
        assert_eq!(
            seek_string(&mut cursor),
            Err(Error::UnclosedString(Position::new(0, 0)))
        );
    }

    #[test]
    fn test_seek_default_depth_limit() {
        let source = "(".repeat(10_000) + &")".repeat(10_000);
        let mut cursor = Cursor::new(&source);

        assert_eq!(
            seek(&mut cursor, ')'),
            Err(Error::NestingTooDeep {
                limit: DEFAULT_MAX_DEPTH,
                position: Position::new(0, DEFAULT_MAX_DEPTH)
            })
        );
    }

    #[test]
    fn test_seek_bounded_depth() {
        let mut cursor = Cursor::new("((()))");
        assert_eq!(seek_bounded(&mut cursor, ')', 1, 3), Ok(2));

        let mut cursor = Cursor::new("((()))");
        assert_eq!(
            seek_bounded(&mut cursor, ')', 1, 2),
            Err(Error::NestingTooDeep {
                limit: 2,
                position: Position::new(0, 2)
            })
        );
    }
}
