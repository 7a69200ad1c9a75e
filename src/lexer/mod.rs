//! Lexical analysis.
//!
//! Converts Apex source text into a stream of [`Token`]s. Whitespace,
//! commas, line terminators, and `#` comments are insignificant between
//! tokens. Identifiers containing a `::` continuation become
//! [`TokenKind::Ns`] tokens; numbers follow the JSON grammar with an
//! optional leading `-`; strings come in single-line and triple-quoted
//! block forms, the latter dedented after scanning.

pub mod scanner;
pub mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind};

use std::sync::Arc;

use crate::error::Error;
use crate::source::Source;

/// Scans the entire source into a token vector, ending with the EOF token.
///
/// The parser drives [`Lexer::read_token`] directly; this facade exists for
/// the token-stream output format and for tests.
pub fn tokenize(source: &Arc<Source>) -> Result<Vec<Token>, Error> {
    let lexer = Lexer::new(source.clone());
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let token = lexer.read_token(pos)?;
        pos = token.end;
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
    }
    Ok(tokens)
}
