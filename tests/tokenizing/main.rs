use std::path::Path;

use proptest::prelude::*;
use protolex::{
    base::{Error, MemoryProvider, SilentHandler},
    lexical::{token::KeywordKind, Position, Token, TokenKind, TokenStream, Tokenizer},
};

fn provider_with(path: &str, source: &str) -> MemoryProvider {
    let mut provider = MemoryProvider::new();
    provider.add_file(path, source);
    provider
}

/// Collects the kind and text of every leaf, sorted.
fn leaves(tokens: &[Token]) -> Vec<(TokenKind, String)> {
    fn collect(token: &Token, out: &mut Vec<(TokenKind, String)>) {
        if token.kind().is_leaf() {
            out.push((token.kind(), token.text().clone()));
        }
        for child in token.children() {
            collect(child, out);
        }
    }

    let mut out = Vec::new();
    for token in tokens {
        collect(token, &mut out);
    }
    out.sort();
    out
}

fn tokenize_program() -> TokenStream {
    let provider = provider_with("program.pep", include_str!("./program.pep"));
    let handler = SilentHandler::new();

    let tokens = protolex::tokenize(&handler, &provider, Path::new("program.pep"))
        .expect("Failed to tokenize");
    assert!(handler.is_empty());

    tokens
}

#[test]
fn tokenizing_program() {
    let tokens = tokenize_program();

    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|token| token.kind().is_statement()));

    let import = &tokens[0];
    assert_eq!(import.children()[0].keyword(), Some(KeywordKind::Import));
    assert_eq!(import.children()[1].text(), "io");

    let add = &tokens[1];
    assert_eq!(add.position(), Position::new(4, 0));
    let kinds = add
        .children()
        .iter()
        .map(Token::kind)
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Keyword,
            TokenKind::Parenthesis,
            TokenKind::Block,
        ]
    );

    let body = &add.children()[4];
    assert_eq!(body.children().len(), 1);
    let ret = &body.children()[0].children()[0];
    assert_eq!(ret.keyword(), Some(KeywordKind::Return));
    assert_eq!(ret.position(), Position::new(5, 4));

    let main = &tokens[2];
    assert_eq!(main.position(), Position::new(8, 0));
    let main_body = &main.children()[4];
    assert_eq!(main_body.children().len(), 3);
    assert!(main_body
        .children()
        .iter()
        .all(|token| token.kind().is_statement()));

    let list = &main_body.children()[0].children()[2];
    assert_eq!(list.kind(), TokenKind::Index);
    assert_eq!(list.to_string(), "[ 1 , 2.5 , 3_000 ]");

    let print_call = &main_body.children()[1].children()[4].children()[0];
    let string = &print_call.children()[3].children()[0];
    assert_eq!(string.kind(), TokenKind::String);
    assert_eq!(string.str_content(), Some(r#"value: \""#));
    assert_eq!(string.position(), Position::new(11, 17));

    let comparison = &main_body.children()[2].children()[3];
    assert_eq!(comparison.text(), ">=");
}

#[test]
fn tokenizing_renders_and_retokenizes() {
    let tokens = tokenize_program();
    let rendered = tokens.to_string();

    let retokenized = protolex::tokenize_str(&rendered).expect("Failed to retokenize");

    assert_eq!(leaves(&tokens), leaves(&retokenized));
    assert_eq!(retokenized.to_string(), rendered);
}

#[test]
fn tokenizing_invalid() {
    let provider = provider_with("invalid.pep", include_str!("./invalid.pep"));
    let handler = SilentHandler::new();

    let error = protolex::tokenize(&handler, &provider, Path::new("invalid.pep"))
        .expect_err("Expecting tokenizing failure");

    assert_eq!(
        error.to_string(),
        "parse error: missing ) 3:9 in invalid.pep"
    );
    assert_eq!(handler.take(), vec![error]);
}

#[test]
fn tokenizing_missing_file() {
    let handler = SilentHandler::new();

    let error = protolex::tokenize(&handler, &MemoryProvider::new(), Path::new("nowhere.pep"))
        .expect_err("Expecting read failure");

    assert!(matches!(error, Error::IoError(_)));
    assert!(error.as_lexical().is_none());
    assert_eq!(handler.take().len(), 1);
}

#[test]
fn tokenizing_reports_unclosed_string() {
    let provider = provider_with("string.pep", "x = 1;\ny = \"open;\n");
    let handler = SilentHandler::new();

    let error = protolex::tokenize(&handler, &provider, Path::new("string.pep")).unwrap_err();

    assert_eq!(
        error.to_string(),
        "parse error: unclosed string 2:5 in string.pep"
    );
}

proptest! {
    #[test]
    fn stripping_preserves_newlines(source in "[a-z#;{}\n ]{0,64}") {
        let tokenizer = Tokenizer::default();
        if let Ok(stripped) = tokenizer.strip_comments(&source) {
            prop_assert_eq!(stripped.matches('\n').count(), source.matches('\n').count());
        }
    }

    #[test]
    fn rendering_preserves_leaves(
        source in r#"([a-z_][a-z0-9_]{0,4}|[0-9][0-9._]{0,3}|[-+*/=<>.:!]{1,3}|"[a-z ]{0,4}"|[,;()\[\]{}]| |\n){0,24}"#
    ) {
        let Ok(tokens) = protolex::tokenize_str(&source) else {
            return Ok(());
        };

        let rendered = tokens.to_string();
        let retokenized = protolex::tokenize_str(&rendered);
        prop_assert!(retokenized.is_ok(), "rendered text failed: {:?}", rendered);
        let retokenized = retokenized.unwrap();

        prop_assert_eq!(leaves(&tokens), leaves(&retokenized));
        prop_assert_eq!(retokenized.to_string(), rendered);
    }
}
