//! Module for handling source files loaded into memory.

use std::{
    fmt::Debug,
    path::{Path, PathBuf},
};

use getset::Getters;

use super::{file_provider::FileProvider, Error};

/// Represents a source file that contains the source code.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Getters)]
pub struct SourceFile {
    /// Get the path of the source file.
    #[get = "pub"]
    path: PathBuf,
    /// Get the content of the source file
    #[get = "pub"]
    content: String,
}

#[allow(clippy::missing_fields_in_debug)]
impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("path", &self.path)
            .field("lines", &self.line_amount())
            .finish()
    }
}

impl SourceFile {
    /// Creates a source file from already decoded text.
    #[must_use]
    pub fn new(path: PathBuf, content: String) -> Self {
        Self { path, content }
    }

    /// Load the source file from the given file path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when reading the file contents.
    /// - [`Error::Utf8Error`]: The file contents are not valid UTF-8.
    pub fn load(path: &Path, provider: &impl FileProvider) -> Result<Self, Error> {
        let source = provider.read_str(path)?;
        Ok(Self::new(path.to_path_buf(), source.into_owned()))
    }

    /// Get the number of lines in the source file.
    ///
    /// A trailing newline starts a new, empty line.
    #[must_use]
    pub fn line_amount(&self) -> usize {
        self.content.matches('\n').count() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::MemoryProvider;

    #[test]
    fn test_load() {
        let mut provider = MemoryProvider::new();
        provider.add_file("main.pep", "x;\ny;\n");

        let source_file = SourceFile::load(Path::new("main.pep"), &provider).unwrap();

        assert_eq!(source_file.path(), Path::new("main.pep"));
        assert_eq!(source_file.content(), "x;\ny;\n");
        assert_eq!(source_file.line_amount(), 3);
    }

    #[test]
    fn test_load_missing() {
        let provider = MemoryProvider::new();
        assert!(SourceFile::load(Path::new("main.pep"), &provider).is_err());
    }
}
