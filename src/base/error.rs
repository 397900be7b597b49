use std::path::PathBuf;

/// An error that occurred while tokenizing a source file.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("An error occurred while working with Input/Output: {0}")]
    IoError(String),
    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
    #[error("parse error: {error} in {}", .path.display())]
    LexicalError {
        error: crate::lexical::Error,
        path: PathBuf,
    },
}

impl Error {
    /// Returns the lexical error if this error was raised by the tokenizer.
    #[must_use]
    pub fn as_lexical(&self) -> Option<&crate::lexical::Error> {
        match self {
            Self::LexicalError { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// A specialized [`Result`] type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
