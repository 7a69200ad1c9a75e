//! The abstract syntax tree.
//!
//! Nodes are built by the parser and immutable afterwards. Types and values
//! are closed sums matched exhaustively at every use site; cross-references
//! between definitions stay name-based, so the tree never owns a cycle.

pub mod definitions;
pub mod document;
pub mod nodes;
pub mod types;
pub mod values;
pub mod visitor;

pub use definitions::{
    AliasDefinition, Definition, DirectiveDefinition, EnumDefinition, EnumValueDefinition,
    FieldDefinition, ImportDefinition, InterfaceDefinition, NamespaceDefinition,
    OperationDefinition, ParameterDefinition, TypeDefinition, UnionDefinition,
};
pub use document::Document;
pub use nodes::{find_annotation, Annotation, Argument, DirectiveRequire, ImportName, Location, Name};
pub use types::{ListType, MapType, Named, Optional, Stream, Type};
pub use values::{
    BooleanValue, EnumValue, FloatValue, IntValue, ListValue, ObjectField, ObjectValue,
    StringValue, Value,
};
pub use visitor::{Context, MultiVisitor, Visitor};
