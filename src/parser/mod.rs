//! Recursive-descent parsing.
//!
//! The parser owns one token of lookahead plus the previous token's end
//! offset, which it uses to close node locations. Imports are resolved
//! synchronously through the host-provided [`Resolver`] as they are
//! encountered; everything else is a straight descent over the grammar.
//!
//! Errors are hard: the first mismatch reports expected-versus-actual with
//! its position and aborts the parse.

mod definitions;
mod types;
mod values;

use std::sync::Arc;

use crate::ast::{Definition, Document, Location, Name, Value};
use crate::error::Error;
use crate::lexer::{Lexer, Token, TokenKind};
use crate::source::Source;

/// Supplies the text of an imported document.
///
/// `location` is the literal string from the import's `from` clause;
/// `from` is the name of the importing document (empty for the root).
/// Implementations must be pure functions of their arguments.
pub trait Resolver {
    fn resolve(&self, location: &str, from: &str) -> Result<String, Error>;
}

impl<F> Resolver for F
where
    F: Fn(&str, &str) -> Result<String, Error>,
{
    fn resolve(&self, location: &str, from: &str) -> Result<String, Error> {
        self(location, from)
    }
}

#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    /// Omit locations from all nodes.
    pub no_location: bool,
    /// Record offsets but drop the source back-reference.
    pub no_source: bool,
    /// Import resolver; imports are left unresolved without one.
    pub resolver: Option<&'a dyn Resolver>,
}

/// Parses a complete document.
pub fn parse(source: impl Into<Source>, options: ParseOptions<'_>) -> Result<Document, Error> {
    let mut parser = Parser::new(Arc::new(source.into()), options)?;
    parser.parse_document()
}

/// Parses a standalone value literal, e.g. annotation-argument text
/// supplied by a host.
pub fn parse_value(source: impl Into<Source>, options: ParseOptions<'_>) -> Result<Value, Error> {
    let mut parser = Parser::new(Arc::new(source.into()), options)?;
    parser.parse_value_literal(false)
}

pub struct Parser<'a> {
    lexer: Lexer,
    source: Arc<Source>,
    options: ParseOptions<'a>,
    prev_end: usize,
    token: Token,
    imported: Vec<Definition>,
}

impl<'a> Parser<'a> {
    fn new(source: Arc<Source>, options: ParseOptions<'a>) -> Result<Self, Error> {
        let lexer = Lexer::new(source.clone());
        let token = lexer.read_token(0)?;
        Ok(Parser {
            lexer,
            source,
            options,
            prev_end: 0,
            token,
            imported: Vec::new(),
        })
    }

    fn parse_document(&mut self) -> Result<Document, Error> {
        let start = self.token.start;
        let mut definitions = Vec::new();
        loop {
            if self.skip(TokenKind::Eof)? {
                break;
            }
            match self.token.kind {
                TokenKind::Name | TokenKind::String | TokenKind::BlockString => {
                    definitions.push(self.parse_definition()?);
                }
                _ => return Err(self.unexpected(None)),
            }
        }
        let loc = self.loc(start);
        Ok(Document {
            definitions,
            imported: std::mem::take(&mut self.imported),
            loc,
        })
    }

    /* Core parsing utilities. */

    /// A location spanning `start` to the previous token's end, honoring the
    /// `no_location` and `no_source` options.
    pub(crate) fn loc(&self, start: usize) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        let source = if self.options.no_source {
            None
        } else {
            Some(self.source.clone())
        };
        Some(Location {
            start,
            end: self.prev_end,
            source,
        })
    }

    pub(crate) fn advance(&mut self) -> Result<(), Error> {
        self.prev_end = self.token.end;
        self.token = self.lexer.read_token(self.prev_end)?;
        Ok(())
    }

    /// Reads the token after the current one without consuming anything.
    pub(crate) fn lookahead(&self) -> Result<Token, Error> {
        self.lexer.read_token(self.token.end)
    }

    pub(crate) fn peek(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    pub(crate) fn peek_description(&self) -> bool {
        self.peek(TokenKind::String) || self.peek(TokenKind::BlockString)
    }

    /// Consumes the current token if it has the given kind.
    pub(crate) fn skip(&mut self, kind: TokenKind) -> Result<bool, Error> {
        if self.token.kind == kind {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, Error> {
        let token = self.token.clone();
        if token.kind == kind {
            self.advance()?;
            return Ok(token);
        }
        Err(Error::syntax(
            &self.source,
            token.start,
            format!(
                "Expected {}, found {}",
                kind.description(),
                token.describe()
            ),
        ))
    }

    pub(crate) fn expect_keyword(&mut self, value: &str) -> Result<Token, Error> {
        let token = self.token.clone();
        if token.kind == TokenKind::Name && token.value == value {
            self.advance()?;
            return Ok(token);
        }
        Err(Error::syntax(
            &self.source,
            token.start,
            format!("Expected \"{}\", found {}", value, token.describe()),
        ))
    }

    pub(crate) fn skip_keyword(&mut self, value: &str) -> Result<bool, Error> {
        if self.token.kind == TokenKind::Name && self.token.value == value {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn unexpected(&self, token: Option<&Token>) -> Error {
        let token = token.unwrap_or(&self.token);
        Error::syntax(
            &self.source,
            token.start,
            format!("Unexpected {}", token.describe()),
        )
    }

    pub(crate) fn parse_name(&mut self) -> Result<Name, Error> {
        let token = self.expect(TokenKind::Name)?;
        Ok(Name {
            value: token.value,
            loc: self.loc(token.start),
        })
    }

    /// Parses `open item* close`, leaving the parser past the closing token.
    pub(crate) fn delimited<T>(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        mut item: impl FnMut(&mut Self) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        self.expect(open)?;
        let mut nodes = Vec::new();
        loop {
            if self.skip(close)? {
                break;
            }
            nodes.push(item(self)?);
        }
        Ok(nodes)
    }

    pub(crate) fn source(&self) -> &Arc<Source> {
        &self.source
    }
}
