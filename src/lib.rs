//! The `protolex` tokenizer.
//!
//! `protolex` turns the source code of the pep language into a tree of typed tokens: comments
//! are stripped, brackets are matched into nested groups and `;` separates statements.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod base;
pub mod lexical;

use std::path::Path;

use base::{source_file::SourceFile, FileProvider, Handler, Result};

use crate::{
    base::Error,
    lexical::{LexResult, TokenStream, Tokenizer},
};

/// Converts the source code of the file at `path` to tokens.
///
/// Any failure is passed to the handler once and returned.
///
/// # Errors
/// - If an error occurs while reading the file.
/// - If an error occurs while tokenizing the source code.
#[tracing::instrument(level = "debug", skip(handler, file_provider))]
pub fn tokenize(
    handler: &impl Handler<Error>,
    file_provider: &impl FileProvider,
    path: &Path,
) -> Result<TokenStream> {
    let result = SourceFile::load(path, file_provider).and_then(|source_file| {
        tracing::debug!(lines = source_file.line_amount(), "Loaded source file");

        Tokenizer::default()
            .tokenize(source_file.content())
            .map_err(|error| Error::LexicalError {
                error,
                path: source_file.path().clone(),
            })
    });

    result.map_err(|err| {
        handler.receive(err.clone());
        err
    })
}

/// Converts the given source code to tokens with the default tables.
///
/// # Errors
/// - If an error occurs while tokenizing the source code.
pub fn tokenize_str(source: &str) -> LexResult<TokenStream> {
    Tokenizer::default().tokenize(source)
}
