//! Atom nodes shared across the tree.

use serde::Serialize;
use std::sync::Arc;

use crate::ast::values::Value;
use crate::source::Source;

/// A half-open byte range `[start, end)` back-referencing its source.
///
/// The source is shared, not copied: many locations borrow one buffer. It is
/// omitted from serialized output and absent entirely when parsing with the
/// `no_source` option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    #[serde(skip)]
    pub source: Option<Arc<Source>>,
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A directive applied to a node, with concrete arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub name: Name,
    pub arguments: Vec<Argument>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A named argument inside an annotation. The single-argument shorthand
/// `@foo("x")` parses with the implicit name `value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// One imported symbol, optionally rebound with `as`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportName {
    pub name: Name,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

/// A `require` clause on a directive: the named directive must be present at
/// one of the listed locations (or `SELF`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectiveRequire {
    pub directive: Name,
    pub locations: Vec<Name>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl DirectiveRequire {
    pub fn has_location(&self, location: &str) -> bool {
        self.locations.iter().any(|l| l.value == location)
    }
}

/// Finds an annotation by name.
pub fn find_annotation<'a>(annotations: &'a [Annotation], name: &str) -> Option<&'a Annotation> {
    annotations.iter().find(|a| a.name.value == name)
}

/// True when the node carries a `novisit` annotation, which excludes it from
/// traversal.
pub fn skip_visit(annotations: &[Annotation]) -> bool {
    find_annotation(annotations, "novisit").is_some()
}
