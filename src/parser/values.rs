//! Value-literal, annotation, and argument productions.

use crate::ast::{
    Annotation, Argument, BooleanValue, EnumValue, FloatValue, IntValue, ListValue, Name,
    ObjectField, ObjectValue, StringValue, Value,
};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl<'a> Parser<'a> {
    /// `Value : Int | Float | String | BlockString | true | false | EnumRef
    ///        | "[" Value* "]" | "{" ObjectField* "}"`
    ///
    /// `null` is not a value; a bare name other than `true`/`false` is an
    /// enum reference.
    pub(crate) fn parse_value_literal(&mut self, is_const: bool) -> Result<Value, Error> {
        let token = self.token.clone();
        match token.kind {
            TokenKind::BracketL => self.parse_list(is_const),
            TokenKind::BraceL => self.parse_object(is_const),
            TokenKind::Int => {
                self.advance()?;
                let value = token.value.parse::<i64>().map_err(|_| {
                    Error::syntax(
                        self.source(),
                        token.start,
                        format!("Invalid integer \"{}\"", token.value),
                    )
                })?;
                Ok(Value::Int(IntValue {
                    value,
                    loc: self.loc(token.start),
                }))
            }
            TokenKind::Float => {
                self.advance()?;
                let value = token.value.parse::<f64>().map_err(|_| {
                    Error::syntax(
                        self.source(),
                        token.start,
                        format!("Invalid float \"{}\"", token.value),
                    )
                })?;
                Ok(Value::Float(FloatValue {
                    value,
                    loc: self.loc(token.start),
                }))
            }
            TokenKind::String | TokenKind::BlockString => {
                Ok(Value::String(self.parse_string_literal()?))
            }
            TokenKind::Name if token.value == "true" || token.value == "false" => {
                self.advance()?;
                Ok(Value::Bool(BooleanValue {
                    value: token.value == "true",
                    loc: self.loc(token.start),
                }))
            }
            TokenKind::Name if token.value != "null" => {
                self.advance()?;
                Ok(Value::Enum(EnumValue {
                    value: token.value,
                    loc: self.loc(token.start),
                }))
            }
            _ => Err(self.unexpected(None)),
        }
    }

    fn parse_list(&mut self, is_const: bool) -> Result<Value, Error> {
        let start = self.token.start;
        let values = self.delimited(TokenKind::BracketL, TokenKind::BracketR, |p| {
            p.parse_value_literal(is_const)
        })?;
        Ok(Value::List(ListValue {
            values,
            loc: self.loc(start),
        }))
    }

    fn parse_object(&mut self, is_const: bool) -> Result<Value, Error> {
        let start = self.token.start;
        let fields = self.delimited(TokenKind::BraceL, TokenKind::BraceR, |p| {
            p.parse_object_field(is_const)
        })?;
        Ok(Value::Object(ObjectValue {
            fields,
            loc: self.loc(start),
        }))
    }

    /// `ObjectField : (Name | NS | String) ":" Value`
    fn parse_object_field(&mut self, is_const: bool) -> Result<ObjectField, Error> {
        let start = self.token.start;
        let token = self.token.clone();
        let name = match token.kind {
            TokenKind::Name | TokenKind::Ns | TokenKind::String => {
                self.advance()?;
                Name {
                    value: token.value,
                    loc: self.loc(token.start),
                }
            }
            _ => return Err(self.unexpected(None)),
        };
        self.expect(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    pub(crate) fn parse_string_literal(&mut self) -> Result<StringValue, Error> {
        let token = self.token.clone();
        match token.kind {
            TokenKind::String | TokenKind::BlockString => {
                self.advance()?;
                Ok(StringValue {
                    value: token.value,
                    loc: self.loc(token.start),
                })
            }
            _ => Err(Error::syntax(
                self.source(),
                token.start,
                format!("Expected String, found {}", token.describe()),
            )),
        }
    }

    /// `Description : String | BlockString`
    pub(crate) fn parse_description(&mut self) -> Result<Option<StringValue>, Error> {
        if self.peek_description() {
            Ok(Some(self.parse_string_literal()?))
        } else {
            Ok(None)
        }
    }

    /// `Annotations : Annotation*`
    pub(crate) fn parse_annotations(&mut self) -> Result<Vec<Annotation>, Error> {
        let mut annotations = Vec::new();
        while self.peek(TokenKind::At) {
            annotations.push(self.parse_annotation()?);
        }
        Ok(annotations)
    }

    /// `Annotation : "@" Name Arguments?`
    fn parse_annotation(&mut self) -> Result<Annotation, Error> {
        let start = self.token.start;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(Annotation {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Argument>, Error> {
        if !self.peek(TokenKind::ParenL) {
            return Ok(Vec::new());
        }
        self.delimited(TokenKind::ParenL, TokenKind::ParenR, |p| p.parse_argument())
    }

    /// `Argument : Name ":" Value` or a bare value carrying the implicit
    /// name `value` (single-argument shorthand). A name token followed by
    /// `:` starts a named argument; anything else is a shorthand value.
    fn parse_argument(&mut self) -> Result<Argument, Error> {
        let start = self.token.start;
        let named = self.peek(TokenKind::Name) && self.lookahead()?.kind == TokenKind::Colon;
        let name = if named {
            let name = self.parse_name()?;
            self.expect(TokenKind::Colon)?;
            name
        } else {
            Name {
                value: "value".to_string(),
                loc: None,
            }
        };
        let value = self.parse_value_literal(false)?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }
}
