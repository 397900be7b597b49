//! Contains the [`TokenStream`] struct and the [`Tokenizer`] building it.

use std::fmt::{Debug, Display};

use derive_more::{Deref, From};
use getset::Getters;

use super::{
    comment::strip_comments,
    config::LexicalConfig,
    cursor::Cursor,
    error::LexResult,
    seek::seek_bounded,
    token::{Token, TokenKind},
    Error,
};

/// Is a list of well structured [`Token`]s.
///
/// This struct is the final output of the lexical analysis phase and is meant to be used by the
/// next stage of the compilation process.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, PartialEq, Eq, Hash, Default, Deref, From)]
pub struct TokenStream {
    #[deref]
    tokens: Vec<Token>,
}

impl Debug for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

/// Renders the tokens back to back, with a single space between tokens that are not
/// statements. A statement already ends its rendering with a newline.
impl Display for TokenStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut previous: Option<&Token> = None;
        for token in &self.tokens {
            if previous.is_some_and(|previous| !previous.kind().is_statement()) {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
            previous = Some(token);
        }
        Ok(())
    }
}

impl TokenStream {
    /// Dissolves this struct into its tokens.
    #[must_use]
    pub fn dissolve(self) -> Vec<Token> {
        self.tokens
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Turns source code into a [`TokenStream`].
#[derive(Debug, Clone, Default, Getters)]
pub struct Tokenizer {
    /// Get the tables the tokenizer classifies characters with.
    #[get = "pub"]
    config: LexicalConfig,
}

impl Tokenizer {
    /// Creates a tokenizer using the given tables.
    #[must_use]
    pub fn new(config: LexicalConfig) -> Self {
        Self { config }
    }

    /// Returns a copy of `source` with every comment removed.
    ///
    /// # Errors
    /// - [`Error::UnclosedBlockComment`] if the source ends inside a block comment.
    pub fn strip_comments(&self, source: &str) -> LexResult<String> {
        strip_comments(source, self.config.comment_marker())
    }

    /// Tokenizes the given source code.
    ///
    /// Comments are stripped first, then the whole remaining buffer is built into a token tree.
    ///
    /// # Errors
    /// Any [`Error`] but [`Error::OutOfRange`]; the first failure aborts tokenization.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn tokenize(&self, source: &str) -> LexResult<TokenStream> {
        let stripped = self.strip_comments(source)?;

        tracing::debug!(
            stripped_bytes = stripped.len(),
            "Structuring tokens into trees"
        );

        let cursor = Cursor::new(&stripped);
        let tokens = self.build(cursor, stripped.len())?;

        tracing::debug!(tokens = tokens.len(), "Tokenized source code");

        Ok(TokenStream { tokens })
    }

    /// Builds the tokens found between the cursor and the byte offset `stop`.
    ///
    /// Tokens are collected until a `;` wraps them into a statement. If no `;` was found, the
    /// collected tokens are returned as they are; if every token was wrapped, the statements
    /// are returned.
    ///
    /// # Errors
    /// - [`Error::ExpectedStatementTerminator`] if statements are followed by unterminated
    ///   tokens.
    /// - [`Error::UnexpectedClosingBracket`] for a closing bracket without an opening one.
    /// - [`Error::UnknownToken`] for a character no token starts with.
    /// - The errors of nested groups and string literals.
    pub fn build(&self, cursor: Cursor, stop: usize) -> LexResult<Vec<Token>> {
        self.build_nested(cursor, stop, 0)
    }

    fn build_nested(&self, mut cursor: Cursor, stop: usize, depth: usize) -> LexResult<Vec<Token>> {
        let mut statements = Vec::new();
        let mut pending: Vec<Token> = Vec::new();

        while cursor.offset() < stop {
            let position = cursor.position();
            let Some(character) = cursor.current() else {
                break;
            };

            if character.is_whitespace() {
                cursor.advance()?;
                continue;
            }

            match character {
                ';' => {
                    let start = pending.first().map_or(position, Token::position);
                    statements.push(Token::group(
                        TokenKind::Statement,
                        std::mem::take(&mut pending),
                        start,
                    ));
                    cursor.advance()?;
                    continue;
                }
                ',' => {
                    pending.push(Token::comma(position));
                    cursor.advance()?;
                    continue;
                }
                _ => {}
            }

            if Token::is_first_identifier_character(character) {
                if let Some(token) = Token::handle_identifier_and_keyword(&mut cursor, &self.config)
                {
                    pending.push(token);
                    continue;
                }
            }

            if let Some(token) = Token::handle_operator(&mut cursor, &self.config) {
                pending.push(token);
                continue;
            }

            if let Some(token) = Token::handle_numeric_literal(&mut cursor) {
                pending.push(token);
                continue;
            }

            if let Some(token) = Token::handle_string_literal(&mut cursor)? {
                pending.push(token);
                continue;
            }

            if let Some((kind, closing)) = TokenKind::opened_by(character) {
                pending.push(self.handle_group(&mut cursor, kind, closing, depth)?);
                continue;
            }

            if matches!(character, '}' | ']' | ')') {
                return Err(Error::UnexpectedClosingBracket {
                    bracket: character,
                    position,
                });
            }

            return Err(Error::UnknownToken {
                character,
                position,
            });
        }

        match (statements.is_empty(), pending.is_empty()) {
            (true, _) => Ok(pending),
            (false, true) => Ok(statements),
            (false, false) => Err(Error::ExpectedStatementTerminator(cursor.position())),
        }
    }

    /// Handles a group opened by the bracket under the cursor and moves past its closing
    /// bracket.
    fn handle_group(
        &self,
        cursor: &mut Cursor,
        kind: TokenKind,
        closing: char,
        depth: usize,
    ) -> LexResult<Token> {
        let position = cursor.position();
        let depth = depth + 1;
        let max_depth = self.config.max_depth();

        if depth > max_depth {
            return Err(Error::NestingTooDeep {
                limit: max_depth,
                position,
            });
        }

        let mut end = *cursor;
        seek_bounded(&mut end, closing, depth, max_depth)?;

        tracing::trace!(depth, ?kind, %position, "Entering bracketed group");

        cursor.advance()?;
        let children = self.build_nested(*cursor, end.offset(), depth)?;

        *cursor = end;
        cursor.advance()?;

        Ok(Token::group(kind, children, position))
    }
}
