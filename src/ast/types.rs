//! Type expressions.

use serde::Serialize;

use crate::ast::nodes::{Location, Name};

/// A type named by identifier, resolved later against the symbol table or
/// the built-in scalar set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Named {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListType {
    #[serde(rename = "type")]
    pub ty: Box<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapType {
    pub key_type: Box<Type>,
    pub value_type: Box<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Optional {
    #[serde(rename = "type")]
    pub ty: Box<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stream {
    #[serde(rename = "type")]
    pub ty: Box<Type>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A closed sum over every type expression the grammar can produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Type {
    Named(Named),
    List(ListType),
    Map(MapType),
    Optional(Optional),
    Stream(Stream),
}

impl Type {
    pub fn loc(&self) -> Option<&Location> {
        match self {
            Type::Named(t) => t.loc.as_ref(),
            Type::List(t) => t.loc.as_ref(),
            Type::Map(t) => t.loc.as_ref(),
            Type::Optional(t) => t.loc.as_ref(),
            Type::Stream(t) => t.loc.as_ref(),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Type::Optional(_))
    }

    /// True when this is a named reference to exactly `name`.
    pub fn is_named(&self, name: &str) -> bool {
        matches!(self, Type::Named(n) if n.name.value == name)
    }
}
