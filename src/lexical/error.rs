use super::cursor::Position;

/// Represents an error that occurred during the lexical analysis of the source code.
///
/// Every variant carries the 0-based [`Position`] at which the failure was detected; the
/// [`Display`](std::fmt::Display) output prints it 1-based after the message.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum Error {
    #[error("cursor moved past the end of the source {0}")]
    OutOfRange(Position),
    #[error("unclosed block comment {0}")]
    UnclosedBlockComment(Position),
    #[error("unclosed string {0}")]
    UnclosedString(Position),
    #[error("missing {target} {position}")]
    MissingClosingBracket { target: char, position: Position },
    #[error("closing {bracket} without opening bracket {position}")]
    UnexpectedClosingBracket { bracket: char, position: Position },
    #[error("unknown token: {character} {position}")]
    UnknownToken { character: char, position: Position },
    #[error("expected ';' {0}")]
    ExpectedStatementTerminator(Position),
    #[error("nesting deeper than {limit} levels {position}")]
    NestingTooDeep { limit: usize, position: Position },
}

impl Error {
    /// Returns the position at which the error was detected.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::OutOfRange(position)
            | Self::UnclosedBlockComment(position)
            | Self::UnclosedString(position)
            | Self::ExpectedStatementTerminator(position)
            | Self::MissingClosingBracket { position, .. }
            | Self::UnexpectedClosingBracket { position, .. }
            | Self::UnknownToken { position, .. }
            | Self::NestingTooDeep { position, .. } => *position,
        }
    }
}

/// A specialized [`Result`] type for the lexical analysis.
pub type LexResult<T> = Result<T, Error>;
