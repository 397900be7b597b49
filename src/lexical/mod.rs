//! The lexical module is responsible for converting raw text into a tree of tokens that the parser can understand.

pub mod comment;
pub mod config;
pub mod cursor;
pub mod seek;
pub mod token;
pub mod token_stream;

mod error;
pub use error::{Error, LexResult};

#[doc(inline)]
pub use config::LexicalConfig;
#[doc(inline)]
pub use cursor::{Cursor, Position};
#[doc(inline)]
pub use token::{Token, TokenKind};
#[doc(inline)]
pub use token_stream::{TokenStream, Tokenizer};
