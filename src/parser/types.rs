//! Type-expression productions.

use crate::ast::{ListType, MapType, Named, Optional, Stream, Type};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// `Type : Named | "[" Type "]" | "{" Type ":" Type "}" | "stream" Type`
    /// with a trailing `?` wrapping the result in `Optional`.
    pub(crate) fn parse_type(&mut self) -> Result<Type, Error> {
        let token = self.token.clone();
        let mut ty = match token.kind {
            TokenKind::BracketL => {
                self.advance()?;
                let inner = self.parse_type()?;
                self.expect(TokenKind::BracketR)?;
                Type::List(ListType {
                    ty: Box::new(inner),
                    loc: self.loc(token.start),
                })
            }
            TokenKind::BraceL => {
                self.advance()?;
                let key_type = self.parse_type()?;
                self.expect(TokenKind::Colon)?;
                let value_type = self.parse_type()?;
                self.expect(TokenKind::BraceR)?;
                Type::Map(MapType {
                    key_type: Box::new(key_type),
                    value_type: Box::new(value_type),
                    loc: self.loc(token.start),
                })
            }
            TokenKind::Name if token.value == "stream" => {
                self.advance()?;
                let inner = self.parse_type()?;
                Type::Stream(Stream {
                    ty: Box::new(inner),
                    loc: self.loc(token.start),
                })
            }
            TokenKind::Name => Type::Named(self.parse_named()?),
            _ => return Err(self.unexpected(None)),
        };

        if self.skip(TokenKind::Question)? {
            ty = Type::Optional(Optional {
                ty: Box::new(ty),
                loc: self.loc(token.start),
            });
        }
        Ok(ty)
    }

    pub(crate) fn parse_named(&mut self) -> Result<Named, Error> {
        let start = self.token.start;
        let name = self.parse_name()?;
        Ok(Named {
            name,
            loc: self.loc(start),
        })
    }
}
