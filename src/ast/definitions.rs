//! Top-level definitions.
//!
//! Every definition struct is immutable after the parser constructs it.
//! Descriptions come from a leading string or block-string literal.

use serde::Serialize;

use crate::ast::nodes::{Annotation, DirectiveRequire, ImportName, Location, Name};
use crate::ast::types::{Named, Type};
use crate::ast::values::{IntValue, StringValue, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamespaceDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    /// True for the wildcard form `import * from "..."`.
    pub all: bool,
    pub names: Vec<ImportName>,
    pub from: StringValue,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    #[serde(rename = "type")]
    pub ty: Type,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<Named>,
    pub annotations: Vec<Annotation>,
    pub fields: Vec<FieldDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// Interfaces are anonymous: one per document by convention, holding the
/// namespace's operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterfaceDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    pub annotations: Vec<Annotation>,
    pub operations: Vec<OperationDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    /// The return type; `void` when the declaration has none.
    #[serde(rename = "type")]
    pub ty: Type,
    pub annotations: Vec<Annotation>,
    /// True for the brace form, whose single parameter is the whole input.
    pub unary: bool,
    pub parameters: Vec<ParameterDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl OperationDefinition {
    pub fn is_unary(&self) -> bool {
        self.unary && self.parameters.len() == 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnionDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    pub annotations: Vec<Annotation>,
    pub members: Vec<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    pub annotations: Vec<Annotation>,
    pub values: Vec<EnumValueDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumValueDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    pub index: IntValue,
    /// Display string from the `as "..."` clause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<StringValue>,
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectiveDefinition {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StringValue>,
    pub parameters: Vec<ParameterDefinition>,
    pub locations: Vec<Name>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<DirectiveRequire>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A closed sum over every top-level definition. `Function` holds a
/// namespace-level operation declared with the `func` keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Definition {
    Namespace(NamespaceDefinition),
    Import(ImportDefinition),
    Alias(AliasDefinition),
    Type(TypeDefinition),
    Interface(InterfaceDefinition),
    Function(OperationDefinition),
    Union(UnionDefinition),
    Enum(EnumDefinition),
    Directive(DirectiveDefinition),
}

impl Definition {
    /// The definition's declared name, when it has one.
    pub fn name(&self) -> Option<&Name> {
        match self {
            Definition::Namespace(d) => Some(&d.name),
            Definition::Import(_) => None,
            Definition::Alias(d) => Some(&d.name),
            Definition::Type(d) => Some(&d.name),
            Definition::Interface(_) => None,
            Definition::Function(d) => Some(&d.name),
            Definition::Union(d) => Some(&d.name),
            Definition::Enum(d) => Some(&d.name),
            Definition::Directive(d) => Some(&d.name),
        }
    }
}
