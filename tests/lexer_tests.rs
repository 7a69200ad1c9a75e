//! Token-level tests for the scanner.

use std::sync::Arc;

use rstest::rstest;

use apex::lexer::{tokenize, Token, TokenKind};
use apex::Source;

fn scan(text: &str) -> Vec<Token> {
    tokenize(&Arc::new(Source::from(text))).expect("tokenize")
}

fn kinds(text: &str) -> Vec<TokenKind> {
    scan(text).iter().map(|t| t.kind).collect()
}

fn scan_err(text: &str) -> apex::Error {
    tokenize(&Arc::new(Source::from(text))).expect_err("expected a lex error")
}

#[rstest]
#[case("!", TokenKind::Bang)]
#[case("?", TokenKind::Question)]
#[case("$", TokenKind::Dollar)]
#[case("(", TokenKind::ParenL)]
#[case(")", TokenKind::ParenR)]
#[case("...", TokenKind::Spread)]
#[case(":", TokenKind::Colon)]
#[case("=", TokenKind::Equals)]
#[case("@", TokenKind::At)]
#[case("[", TokenKind::BracketL)]
#[case("]", TokenKind::BracketR)]
#[case("{", TokenKind::BraceL)]
#[case("}", TokenKind::BraceR)]
#[case("|", TokenKind::Pipe)]
#[case("&", TokenKind::Amp)]
#[case("*", TokenKind::Star)]
fn punctuation(#[case] text: &str, #[case] expected: TokenKind) {
    assert_eq!(kinds(text), vec![expected, TokenKind::Eof]);
}

#[test]
fn empty_source_is_just_eof() {
    let tokens = scan("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[0].end, 0);
}

#[test]
fn identifiers_and_positions() {
    let tokens = scan("  widget");
    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[0].value, "widget");
    assert_eq!(tokens[0].start, 2);
    assert_eq!(tokens[0].end, 8);
}

#[rstest]
#[case("one::two", "one::two")]
#[case("a::b::c", "a::b::c")]
#[case("_ns::_v1", "_ns::_v1")]
fn namespace_qualified_identifiers(#[case] text: &str, #[case] expected: &str) {
    let tokens = scan(text);
    assert_eq!(tokens[0].kind, TokenKind::Ns);
    assert_eq!(tokens[0].value, expected);
}

#[test]
fn lone_colon_is_not_an_ns_continuation() {
    assert_eq!(
        kinds("a:b"),
        vec![
            TokenKind::Name,
            TokenKind::Colon,
            TokenKind::Name,
            TokenKind::Eof
        ]
    );
}

#[test]
fn whitespace_commas_and_comments_are_skipped() {
    let tokens = scan("a, b\t# trailing comment\r\nc # eof comment");
    let names: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Name)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn byte_order_mark_is_skipped() {
    let tokens = scan("\u{FEFF}namespace");
    assert_eq!(tokens[0].kind, TokenKind::Name);
    assert_eq!(tokens[0].value, "namespace");
}

#[rstest]
#[case("0", TokenKind::Int)]
#[case("7", TokenKind::Int)]
#[case("-12", TokenKind::Int)]
#[case("3.14", TokenKind::Float)]
#[case("-0.5", TokenKind::Float)]
#[case("1e10", TokenKind::Float)]
#[case("2E+3", TokenKind::Float)]
#[case("6.02e-23", TokenKind::Float)]
fn numbers(#[case] text: &str, #[case] expected: TokenKind) {
    let tokens = scan(text);
    assert_eq!(tokens[0].kind, expected);
    assert_eq!(tokens[0].value, text);
}

#[rstest]
#[case("01", "unexpected digit after 0")]
#[case("1.", "expected digit")]
#[case("-", "expected digit")]
#[case("1e", "expected digit")]
fn malformed_numbers(#[case] text: &str, #[case] expected: &str) {
    let error = scan_err(text);
    assert!(
        error.message.contains(expected),
        "message was: {}",
        error.message
    );
}

#[rstest]
#[case(r#""hello""#, "hello")]
#[case(r#""a\nb""#, "a\nb")]
#[case(r#""tab\there""#, "tab\there")]
#[case(r#""quote \" slash \\ solidus \/""#, "quote \" slash \\ solidus /")]
#[case(r#""\u0041""#, "A")]
#[case(r#""Aé""#, "A\u{e9}")]
#[case(r#""""#, "")]
fn strings(#[case] text: &str, #[case] expected: &str) {
    let tokens = scan(text);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, expected);
}

#[rstest]
#[case(r#""abc"#, "Unterminated string")]
#[case("\"ab\ncd\"", "Unterminated string")]
#[case(r#""\x""#, "Invalid character escape sequence")]
#[case(r#""\uZZZZ""#, "Invalid character escape sequence")]
fn malformed_strings(#[case] text: &str, #[case] expected: &str) {
    let error = scan_err(text);
    assert!(
        error.message.contains(expected),
        "message was: {}",
        error.message
    );
}

#[test]
fn string_errors_carry_byte_positions() {
    let error = scan_err("   \"abc");
    assert_eq!(error.positions, vec![3]);
    assert_eq!(error.locations[0].line, 1);
    assert_eq!(error.locations[0].column, 4);
}

#[test]
fn block_strings_are_dedented() {
    let text = "\"\"\"\n    Hello,\n      World!\n\"\"\"";
    let tokens = scan(text);
    assert_eq!(tokens[0].kind, TokenKind::BlockString);
    assert_eq!(tokens[0].value, "Hello,\n  World!");
}

#[test]
fn block_string_triple_quote_escape() {
    let text = "\"\"\"quote: \\\"\"\" done\"\"\"";
    let tokens = scan(text);
    assert_eq!(tokens[0].value, "quote: \"\"\" done");
}

#[test]
fn block_string_preserves_inner_newlines_literally() {
    let text = "\"\"\"a\\nb\"\"\"";
    let tokens = scan(text);
    // no escape processing inside block strings
    assert_eq!(tokens[0].value, "a\\nb");
}

#[test]
fn unexpected_character_is_rejected() {
    let error = scan_err("~");
    assert!(error.message.contains("Cannot parse the unexpected character"));
}

#[test]
fn lone_dot_is_rejected() {
    let error = scan_err("a . b");
    assert!(error.message.contains("Cannot parse the unexpected character"));
    assert_eq!(error.positions, vec![2]);
}

#[test]
fn tokens_cover_half_open_ranges() {
    let tokens = scan("ab cd");
    assert_eq!((tokens[0].start, tokens[0].end), (0, 2));
    assert_eq!((tokens[1].start, tokens[1].end), (3, 5));
}
