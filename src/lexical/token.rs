//! Contains the [`Token`] struct and its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr, sync::OnceLock};

use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use super::{
    config::LexicalConfig,
    cursor::{Cursor, Position},
    error::LexResult,
    seek::seek_string,
};

/// Is an enumeration representing the default keywords of the language.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    Import,
    For,
    In,
    Func,
    Return,
    True,
    False,
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, thiserror::Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static STRING_KEYWORD_MAP: OnceLock<HashMap<&'static str, KeywordKind>> = OnceLock::new();
        let map = STRING_KEYWORD_MAP.get_or_init(|| {
            let mut map = HashMap::new();

            for keyword in Self::iter() {
                map.insert(keyword.as_str(), keyword);
            }

            map
        });

        map.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::For => "for",
            Self::In => "in",
            Self::Func => "func",
            Self::Return => "return",
            Self::True => "true",
            Self::False => "false",
        }
    }
}

/// The operators an operator run can spell.
///
/// The tokenizer only delimits operator runs; this table interprets them afterwards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, IntoStaticStr,
)]
#[allow(missing_docs)]
pub enum OperatorKind {
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "-")]
    Sub,
    #[strum(serialize = "*")]
    Mul,
    #[strum(serialize = "/")]
    Div,
    #[strum(serialize = "%")]
    Mod,
    #[strum(serialize = "&")]
    And,
    #[strum(serialize = "|")]
    Or,
    #[strum(serialize = "^")]
    Xor,
    #[strum(serialize = "!")]
    Not,
    #[strum(serialize = "+=")]
    AddAssign,
    #[strum(serialize = "-=")]
    SubAssign,
    #[strum(serialize = "*=")]
    MulAssign,
    #[strum(serialize = "/=")]
    DivAssign,
    #[strum(serialize = "%=")]
    ModAssign,
    #[strum(serialize = "&=")]
    AndAssign,
    #[strum(serialize = "|=")]
    OrAssign,
    #[strum(serialize = "^=")]
    XorAssign,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = ".")]
    ObjectMember,
    #[strum(serialize = ":")]
    NamespaceMember,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = "<=")]
    LessEqual,
    #[strum(serialize = ">=")]
    GreaterEqual,
    #[strum(serialize = "...")]
    Ellipsis,
    #[strum(serialize = "->")]
    Arrow,
}

impl OperatorKind {
    /// Gets the string representation of the operator as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// The built-in type names.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum PrimitiveTypeKind {
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Int,
    Uint,
    Float32,
    Float64,
    Float,
    Void,
    String,
    Bool,
}

impl PrimitiveTypeKind {
    /// Gets the string representation of the type name as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Is an enumeration of the kinds a [`Token`] can have.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, EnumAsInner)]
pub enum TokenKind {
    /// No token; never part of a tokenized tree.
    #[default]
    None,
    /// A `,` separator.
    Comma,
    /// Tokens terminated by a `;`.
    Statement,
    /// Statements enclosed in `{}`.
    Block,
    /// Tokens enclosed in `()`.
    Parenthesis,
    /// Tokens enclosed in `[]`.
    Index,
    /// A word that is not a keyword.
    Identifier,
    /// A run of digits, `.` and `_`.
    Number,
    /// A double quoted string, quotes included.
    String,
    /// A word from the keyword set.
    Keyword,
    /// A run of operator characters.
    Operator,
}

impl TokenKind {
    /// Returns the group kind opened by the given bracket along with its closing bracket.
    #[must_use]
    pub fn opened_by(character: char) -> Option<(Self, char)> {
        match character {
            '{' => Some((Self::Block, '}')),
            '[' => Some((Self::Index, ']')),
            '(' => Some((Self::Parenthesis, ')')),
            _ => None,
        }
    }

    /// Whether tokens of this kind hold verbatim source text rather than children.
    #[must_use]
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Identifier | Self::Number | Self::String | Self::Keyword | Self::Operator
        )
    }
}

/// A node of the token tree.
///
/// Leaf tokens carry the verbatim source text they were scanned from, group tokens
/// (statements, blocks, parentheses and indexes) carry their children.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Getters, CopyGetters)]
pub struct Token {
    /// Get the kind of the token.
    #[get_copy = "pub"]
    kind: TokenKind,

    /// Get the position of the first character of the token.
    #[get_copy = "pub"]
    position: Position,

    /// Get the verbatim text of a leaf token.
    #[get = "pub"]
    text: String,

    /// Get the children of a group token.
    #[get = "pub"]
    children: Vec<Token>,
}

impl Token {
    /// Creates a leaf token.
    #[must_use]
    pub fn leaf(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            position,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Creates a group token.
    #[must_use]
    pub fn group(kind: TokenKind, children: Vec<Self>, position: Position) -> Self {
        Self {
            kind,
            position,
            text: String::new(),
            children,
        }
    }

    /// Creates a comma token.
    #[must_use]
    pub fn comma(position: Position) -> Self {
        Self::group(TokenKind::Comma, Vec::new(), position)
    }

    /// Returns the keyword of a keyword token.
    ///
    /// Returns [`None`] for other tokens and for keywords added through the configuration.
    #[must_use]
    pub fn keyword(&self) -> Option<KeywordKind> {
        self.kind
            .is_keyword()
            .then(|| KeywordKind::from_str(&self.text).ok())
            .flatten()
    }

    /// Returns the operator spelled by an operator token, if the run names a known operator.
    #[must_use]
    pub fn operator(&self) -> Option<OperatorKind> {
        self.kind
            .is_operator()
            .then(|| OperatorKind::from_str(&self.text).ok())
            .flatten()
    }

    /// Returns the built-in type named by an identifier token.
    #[must_use]
    pub fn primitive_type(&self) -> Option<PrimitiveTypeKind> {
        self.kind
            .is_identifier()
            .then(|| PrimitiveTypeKind::from_str(&self.text).ok())
            .flatten()
    }

    /// Returns the string without the leading and trailing double quotes.
    #[must_use]
    pub fn str_content(&self) -> Option<&str> {
        self.kind
            .is_string()
            .then(|| {
                self.text
                    .strip_prefix('"')
                    .and_then(|text| text.strip_suffix('"'))
            })
            .flatten()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::None => f.write_str("NONE"),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Statement => {
                for child in &self.children {
                    write!(f, "{child} ")?;
                }
                f.write_str(";\n")
            }
            TokenKind::Block => {
                f.write_str("{\n")?;
                for child in &self.children {
                    write!(f, "\t{child}")?;
                }
                f.write_str("}")
            }
            TokenKind::Parenthesis => {
                f.write_str("( ")?;
                for child in &self.children {
                    write!(f, "{child} ")?;
                }
                f.write_str(")")
            }
            TokenKind::Index => {
                f.write_str("[ ")?;
                for child in &self.children {
                    write!(f, "{child} ")?;
                }
                f.write_str("]")
            }
            TokenKind::Identifier
            | TokenKind::Number
            | TokenKind::String
            | TokenKind::Keyword
            | TokenKind::Operator => f.write_str(&self.text),
        }
    }
}

impl Token {
    /// Checks if the given character is a valid first character of an identifier.
    pub(super) fn is_first_identifier_character(character: char) -> bool {
        character == '_' || character.is_alphabetic()
    }

    /// Checks if the given character is a valid character of an identifier.
    fn is_identifier_character(character: char) -> bool {
        character == '_' || character.is_alphanumeric()
    }

    /// Checks if the given character is a valid character of a numeric literal.
    fn is_numeric_character(character: char) -> bool {
        character.is_ascii_digit() || character == '.' || character == '_'
    }

    /// Handles a contiguous sequence of characters that are valid in an identifier.
    pub(super) fn handle_identifier_and_keyword(
        cursor: &mut Cursor,
        config: &LexicalConfig,
    ) -> Option<Self> {
        let position = cursor.position();
        let word = cursor.eat_while(Self::is_identifier_character);

        if word.is_empty() {
            return None;
        }

        let kind = if config.is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Some(Self::leaf(kind, word, position))
    }

    /// Handles a contiguous sequence of operator characters.
    pub(super) fn handle_operator(cursor: &mut Cursor, config: &LexicalConfig) -> Option<Self> {
        let position = cursor.position();
        let run = cursor.eat_while(|character| config.is_operator_char(character));

        (!run.is_empty()).then(|| Self::leaf(TokenKind::Operator, run, position))
    }

    /// Handles a sequence of digits, dots and underscores.
    ///
    /// The run is not validated as a number.
    pub(super) fn handle_numeric_literal(cursor: &mut Cursor) -> Option<Self> {
        let position = cursor.position();
        let run = cursor.eat_while(Self::is_numeric_character);

        (!run.is_empty()).then(|| Self::leaf(TokenKind::Number, run, position))
    }

    /// Handles a sequence of characters that are enclosed in double quotes.
    ///
    /// # Errors
    /// - [`Error::UnclosedString`](super::Error::UnclosedString) if no closing quote follows.
    pub(super) fn handle_string_literal(cursor: &mut Cursor) -> LexResult<Option<Self>> {
        if cursor.current() != Some('"') {
            return Ok(None);
        }

        let position = cursor.position();
        let start = cursor.offset();

        seek_string(cursor)?;
        cursor.advance()?;

        Ok(Some(Self::leaf(
            TokenKind::String,
            cursor.slice_from(start),
            position,
        )))
    }
}
