//! Definition productions.
//!
//! A definition is dispatched on its leading keyword, looking through an
//! optional description string.

use crate::ast::{
    AliasDefinition, Definition, DirectiveDefinition, DirectiveRequire, EnumDefinition,
    EnumValueDefinition, FieldDefinition, ImportDefinition, ImportName, InterfaceDefinition,
    IntValue, Name, Named, NamespaceDefinition, OperationDefinition, ParameterDefinition,
    StringValue, Type, TypeDefinition, UnionDefinition,
};
use crate::error::Error;
use crate::lexer::TokenKind;
use crate::parser::{parse, Parser};
use crate::source::Source;

impl<'a> Parser<'a> {
    pub(crate) fn parse_definition(&mut self) -> Result<Definition, Error> {
        let keyword = if self.peek_description() {
            self.lookahead()?
        } else {
            self.token.clone()
        };
        if keyword.kind != TokenKind::Name {
            return Err(self.unexpected(Some(&keyword)));
        }
        match keyword.value.as_str() {
            "namespace" => self.parse_namespace_definition(),
            "import" => self.parse_import_definition(),
            "alias" => self.parse_alias_definition(),
            "type" => self.parse_type_definition(),
            "interface" => self.parse_interface_definition(),
            "func" => self.parse_function_definition(),
            "union" => self.parse_union_definition(),
            "enum" => self.parse_enum_definition(),
            "directive" => self.parse_directive_definition(),
            _ => Err(self.unexpected(Some(&keyword))),
        }
    }

    /// `NamespaceDefinition : Description? "namespace" (NS | Name | String) Annotations?`
    fn parse_namespace_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("namespace")?;
        let token = self.token.clone();
        match token.kind {
            TokenKind::Ns | TokenKind::Name | TokenKind::String => self.advance()?,
            _ => return Err(self.unexpected(Some(&token))),
        }
        let name = Name {
            value: token.value,
            loc: self.loc(token.start),
        };
        let annotations = self.parse_annotations()?;
        Ok(Definition::Namespace(NamespaceDefinition {
            name,
            description,
            annotations,
            loc: self.loc(start),
        }))
    }

    /// `ImportDefinition : Description? "import" ("*" | "{" ImportName* "}")
    ///                     "from" String Annotations?`
    ///
    /// Resolving the import through the host resolver happens here, as a
    /// side effect of parsing the definition.
    fn parse_import_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("import")?;

        let mut all = false;
        let mut names = Vec::new();
        if self.skip(TokenKind::Star)? {
            all = true;
        } else if self.peek(TokenKind::BraceL) {
            names = self.delimited(TokenKind::BraceL, TokenKind::BraceR, |p| {
                p.parse_import_name()
            })?;
        } else {
            return Err(self.unexpected(None));
        }

        self.expect_keyword("from")?;
        let from = self.parse_string_literal()?;
        let annotations = self.parse_annotations()?;
        let definition = ImportDefinition {
            description,
            all,
            names,
            from,
            annotations,
            loc: self.loc(start),
        };
        self.resolve_import(&definition)?;
        Ok(Definition::Import(definition))
    }

    /// Fetches and parses the imported document, collecting its definitions
    /// into the symbol-table side channel. Resolver failures surface as
    /// syntax errors at the import's position.
    fn resolve_import(&mut self, import: &ImportDefinition) -> Result<(), Error> {
        let Some(resolver) = self.options.resolver else {
            return Ok(());
        };
        let location = import.from.value.clone();
        let text = resolver
            .resolve(&location, &self.source().name)
            .map_err(|err| {
                let position = import
                    .from
                    .loc
                    .as_ref()
                    .map(|l| l.start)
                    .unwrap_or_default();
                Error::syntax(
                    self.source(),
                    position,
                    format!("Unable to resolve import \"{}\": {}", location, err.message),
                )
            })?;
        let sub = parse(Source::new(location, text), self.options)?;
        self.imported.extend(sub.definitions);
        self.imported.extend(sub.imported);
        Ok(())
    }

    fn parse_import_name(&mut self) -> Result<ImportName, Error> {
        let start = self.token.start;
        let name = self.parse_name()?;
        let alias = if self.skip_keyword("as")? {
            Some(self.parse_name()?)
        } else {
            None
        };
        Ok(ImportName {
            name,
            alias,
            loc: self.loc(start),
        })
    }

    /// `AliasDefinition : Description? "alias" Name "=" Type Annotations?`
    fn parse_alias_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("alias")?;
        let name = self.parse_name()?;
        self.expect(TokenKind::Equals)?;
        let ty = self.parse_type()?;
        let annotations = self.parse_annotations()?;
        Ok(Definition::Alias(AliasDefinition {
            name,
            description,
            ty,
            annotations,
            loc: self.loc(start),
        }))
    }

    /// `TypeDefinition : Description? "type" Name ImplementsInterfaces?
    ///                   Annotations? "{" FieldDefinition* "}"`
    fn parse_type_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let annotations = self.parse_annotations()?;
        let fields = self.delimited(TokenKind::BraceL, TokenKind::BraceR, |p| {
            p.parse_field_definition()
        })?;
        Ok(Definition::Type(TypeDefinition {
            name,
            description,
            interfaces,
            annotations,
            fields,
            loc: self.loc(start),
        }))
    }

    /// `ImplementsInterfaces : "implements" "&"? Named ("&" Named)*`
    fn parse_implements_interfaces(&mut self) -> Result<Vec<Named>, Error> {
        let mut interfaces = Vec::new();
        if self.skip_keyword("implements")? {
            self.skip(TokenKind::Amp)?;
            loop {
                interfaces.push(self.parse_named()?);
                if !self.skip(TokenKind::Amp)? {
                    break;
                }
            }
        }
        Ok(interfaces)
    }

    /// `FieldDefinition : Description? Name ":" Type ("=" ConstValue)? Annotations?`
    fn parse_field_definition(&mut self) -> Result<FieldDefinition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let default = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let annotations = self.parse_annotations()?;
        Ok(FieldDefinition {
            name,
            description,
            ty,
            default,
            annotations,
            loc: self.loc(start),
        })
    }

    /// `InterfaceDefinition : Description? "interface" Annotations?
    ///                        "{" OperationDefinition* "}"`
    ///
    /// Interfaces are anonymous in the unified grammar.
    fn parse_interface_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("interface")?;
        let annotations = self.parse_annotations()?;
        let operations = self.delimited(TokenKind::BraceL, TokenKind::BraceR, |p| {
            p.parse_operation_definition()
        })?;
        Ok(Definition::Interface(InterfaceDefinition {
            description,
            annotations,
            operations,
            loc: self.loc(start),
        }))
    }

    /// `FunctionDefinition : Description? "func" Name Parameters? (":" Type)? Annotations?`
    fn parse_function_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("func")?;
        let operation = self.parse_operation_body(start, description)?;
        Ok(Definition::Function(operation))
    }

    /// `OperationDefinition : Description? Name Parameters? (":" Type)? Annotations?`
    ///
    /// A missing return type defaults to `void`.
    fn parse_operation_definition(&mut self) -> Result<OperationDefinition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.parse_operation_body(start, description)
    }

    fn parse_operation_body(
        &mut self,
        start: usize,
        description: Option<StringValue>,
    ) -> Result<OperationDefinition, Error> {
        let name = self.parse_name()?;
        let (parameters, unary) = self.parse_parameter_definitions(true)?;
        let ty = if self.skip(TokenKind::Colon)? {
            self.parse_type()?
        } else {
            Type::Named(Named {
                name: Name {
                    value: "void".to_string(),
                    loc: None,
                },
                loc: None,
            })
        };
        let annotations = self.parse_annotations()?;
        Ok(OperationDefinition {
            name,
            description,
            ty,
            annotations,
            unary,
            parameters,
            loc: self.loc(start),
        })
    }

    /// `Parameters : "(" ParameterDefinition* ")" | "{" ParameterDefinition "}"`
    ///
    /// The brace form denotes a unary operation whose single parameter is
    /// the whole input; it is only accepted where `unary` is true.
    fn parse_parameter_definitions(
        &mut self,
        unary: bool,
    ) -> Result<(Vec<ParameterDefinition>, bool), Error> {
        if self.peek(TokenKind::ParenL) {
            let parameters = self.delimited(TokenKind::ParenL, TokenKind::ParenR, |p| {
                p.parse_parameter_definition()
            })?;
            return Ok((parameters, false));
        }
        if unary && self.peek(TokenKind::BraceL) {
            self.advance()?;
            let parameter = self.parse_parameter_definition()?;
            self.expect(TokenKind::BraceR)?;
            return Ok((vec![parameter], true));
        }
        Ok((Vec::new(), false))
    }

    /// `ParameterDefinition : Description? Name ":" Type ("=" ConstValue)? Annotations?`
    fn parse_parameter_definition(&mut self) -> Result<ParameterDefinition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let default = if self.skip(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let annotations = self.parse_annotations()?;
        Ok(ParameterDefinition {
            name,
            description,
            ty,
            default,
            annotations,
            loc: self.loc(start),
        })
    }

    /// `UnionDefinition : Description? "union" Name Annotations? "=" Type ("|" Type)*`
    fn parse_union_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let annotations = self.parse_annotations()?;
        self.expect(TokenKind::Equals)?;
        let mut members = Vec::new();
        loop {
            members.push(self.parse_type()?);
            if !self.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(Definition::Union(UnionDefinition {
            name,
            description,
            annotations,
            members,
            loc: self.loc(start),
        }))
    }

    /// `EnumDefinition : Description? "enum" Name Annotations?
    ///                   "{" EnumValueDefinition* "}"`
    fn parse_enum_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let annotations = self.parse_annotations()?;
        let values = self.delimited(TokenKind::BraceL, TokenKind::BraceR, |p| {
            p.parse_enum_value_definition()
        })?;
        Ok(Definition::Enum(EnumDefinition {
            name,
            description,
            annotations,
            values,
            loc: self.loc(start),
        }))
    }

    /// `EnumValueDefinition : Description? Name "=" Int Annotations? ("as" String)?`
    fn parse_enum_value_definition(&mut self) -> Result<EnumValueDefinition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(TokenKind::Equals)?;
        let token = self.expect(TokenKind::Int)?;
        let value = token.value.parse::<i64>().map_err(|_| {
            Error::syntax(
                self.source(),
                token.start,
                format!("Invalid integer \"{}\"", token.value),
            )
        })?;
        let index = IntValue {
            value,
            loc: self.loc(token.start),
        };
        let annotations = self.parse_annotations()?;
        let display = if self.skip_keyword("as")? {
            Some(self.parse_string_literal()?)
        } else {
            None
        };
        Ok(EnumValueDefinition {
            name,
            description,
            index,
            display,
            annotations,
            loc: self.loc(start),
        })
    }

    /// `DirectiveDefinition : Description? "directive" "@" Name Parameters?
    ///                        "on" Locations ("require" Require+)?`
    fn parse_directive_definition(&mut self) -> Result<Definition, Error> {
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect(TokenKind::At)?;
        let name = self.parse_name()?;
        let (parameters, _) = self.parse_parameter_definitions(false)?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        let requires = if self.skip_keyword("require")? {
            self.parse_directive_requires()?
        } else {
            Vec::new()
        };
        Ok(Definition::Directive(DirectiveDefinition {
            name,
            description,
            parameters,
            locations,
            requires,
            loc: self.loc(start),
        }))
    }

    /// `Locations : Name ("|" Name)*`
    fn parse_directive_locations(&mut self) -> Result<Vec<Name>, Error> {
        let mut locations = Vec::new();
        loop {
            locations.push(self.parse_name()?);
            if !self.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(locations)
    }

    /// `Require : "@" Name Locations ("|" "@" Name Locations)*`
    fn parse_directive_requires(&mut self) -> Result<Vec<DirectiveRequire>, Error> {
        let mut requires = Vec::new();
        loop {
            let token = self.expect(TokenKind::At)?;
            let directive = self.parse_name()?;
            let locations = self.parse_directive_locations()?;
            requires.push(DirectiveRequire {
                directive,
                locations,
                loc: self.loc(token.start),
            });
            if !self.skip(TokenKind::Pipe)? {
                break;
            }
        }
        Ok(requires)
    }
}
