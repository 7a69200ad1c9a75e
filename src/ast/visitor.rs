//! Traversal framework.
//!
//! Rules are capability-based: each implements the subset of [`Visitor`]
//! hooks it cares about and inherits no-op defaults for the rest. A
//! [`MultiVisitor`] fans every hook out to an ordered list of rules so a
//! single document pass runs them all.
//!
//! The [`Context`] passed to every hook tracks the current element at each
//! nesting level, the name→definition index, and the shared error sink.

use std::collections::HashMap;

use crate::ast::definitions::{
    AliasDefinition, Definition, DirectiveDefinition, EnumDefinition, EnumValueDefinition,
    FieldDefinition, ImportDefinition, InterfaceDefinition, NamespaceDefinition,
    OperationDefinition, ParameterDefinition, TypeDefinition, UnionDefinition,
};
use crate::ast::document::Document;
use crate::ast::nodes::{Annotation, Argument};
use crate::error::Error;

pub struct Context<'a> {
    pub document: &'a Document,

    pub namespace: Option<&'a NamespaceDefinition>,
    pub imports: Vec<&'a ImportDefinition>,
    pub import: Option<&'a ImportDefinition>,
    pub directives: Vec<&'a DirectiveDefinition>,
    pub directive: Option<&'a DirectiveDefinition>,
    pub aliases: Vec<&'a AliasDefinition>,
    pub alias: Option<&'a AliasDefinition>,
    pub unions: Vec<&'a UnionDefinition>,
    pub union: Option<&'a UnionDefinition>,
    pub functions: Vec<&'a OperationDefinition>,
    pub function: Option<&'a OperationDefinition>,
    pub interfaces: Vec<&'a InterfaceDefinition>,
    pub interface: Option<&'a InterfaceDefinition>,
    pub operation: Option<&'a OperationDefinition>,
    pub parameter: Option<&'a ParameterDefinition>,
    pub types: Vec<&'a TypeDefinition>,
    pub type_def: Option<&'a TypeDefinition>,
    pub field: Option<&'a FieldDefinition>,
    pub enums: Vec<&'a EnumDefinition>,
    pub enum_def: Option<&'a EnumDefinition>,
    pub enum_value: Option<&'a EnumValueDefinition>,
    pub annotation: Option<&'a Annotation>,
    pub argument: Option<&'a Argument>,

    /// Named object kinds (aliases, types, enums, unions), including those
    /// contributed by resolved imports.
    pub named: HashMap<String, &'a Definition>,

    errors: Vec<Error>,
}

impl<'a> Context<'a> {
    pub fn new(document: &'a Document) -> Self {
        let mut context = Context {
            document,
            namespace: None,
            imports: Vec::new(),
            import: None,
            directives: Vec::new(),
            directive: None,
            aliases: Vec::new(),
            alias: None,
            unions: Vec::new(),
            union: None,
            functions: Vec::new(),
            function: None,
            interfaces: Vec::new(),
            interface: None,
            operation: None,
            parameter: None,
            types: Vec::new(),
            type_def: None,
            field: None,
            enums: Vec::new(),
            enum_def: None,
            enum_value: None,
            annotation: None,
            argument: None,
            named: HashMap::new(),
            errors: Vec::new(),
        };
        for definition in &document.definitions {
            context.classify(definition);
        }
        for definition in &document.imported {
            context.index(definition);
        }
        context
    }

    fn classify(&mut self, definition: &'a Definition) {
        match definition {
            Definition::Namespace(d) => {
                if self.namespace.is_none() {
                    self.namespace = Some(d);
                }
            }
            Definition::Import(d) => self.imports.push(d),
            Definition::Directive(d) => self.directives.push(d),
            Definition::Alias(d) => self.aliases.push(d),
            Definition::Union(d) => self.unions.push(d),
            Definition::Enum(d) => self.enums.push(d),
            Definition::Function(d) => self.functions.push(d),
            Definition::Type(d) => self.types.push(d),
            Definition::Interface(d) => self.interfaces.push(d),
        }
        self.index(definition);
    }

    fn index(&mut self, definition: &'a Definition) {
        if let Definition::Alias(_) | Definition::Union(_) | Definition::Enum(_)
        | Definition::Type(_) = definition
        {
            if let Some(name) = definition.name() {
                self.named.insert(name.value.clone(), definition);
            }
        }
    }

    pub fn report_error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }
}

pub struct MultiVisitor {
    visitors: Vec<Box<dyn Visitor>>,
}

impl MultiVisitor {
    pub fn new(visitors: Vec<Box<dyn Visitor>>) -> Self {
        MultiVisitor { visitors }
    }
}

/// Declares every traversal hook once, producing both the no-op defaults on
/// [`Visitor`] and the fan-out on [`MultiVisitor`].
macro_rules! visitor_hooks {
    ($($hook:ident),* $(,)?) => {
        pub trait Visitor {
            $( fn $hook(&mut self, _context: &mut Context<'_>) {} )*
        }

        impl Visitor for MultiVisitor {
            $(
                fn $hook(&mut self, context: &mut Context<'_>) {
                    for visitor in self.visitors.iter_mut() {
                        visitor.$hook(context);
                    }
                }
            )*
        }
    };
}

visitor_hooks! {
    visit_document_before,
    visit_namespace,

    visit_imports_before,
    visit_import,
    visit_imports_after,

    visit_directives_before,
    visit_directive_before,
    visit_directive,
    visit_directive_parameters_before,
    visit_directive_parameter,
    visit_directive_parameters_after,
    visit_directive_after,
    visit_directives_after,

    visit_aliases_before,
    visit_alias_before,
    visit_alias,
    visit_alias_after,
    visit_aliases_after,

    visit_all_operations_before,
    visit_functions_before,
    visit_function_before,
    visit_function,
    visit_function_after,
    visit_functions_after,
    visit_interfaces_before,
    visit_interface_before,
    visit_interface,
    visit_operations_before,
    visit_operation_before,
    visit_operation,
    visit_parameters_before,
    visit_parameter,
    visit_parameters_after,
    visit_operation_after,
    visit_operations_after,
    visit_interface_after,
    visit_interfaces_after,
    visit_all_operations_after,

    visit_types_before,
    visit_type_before,
    visit_type,
    visit_type_fields_before,
    visit_type_field,
    visit_type_fields_after,
    visit_type_after,
    visit_types_after,

    visit_unions_before,
    visit_union,
    visit_unions_after,

    visit_enums_before,
    visit_enum_before,
    visit_enum,
    visit_enum_values_before,
    visit_enum_value,
    visit_enum_values_after,
    visit_enum_after,
    visit_enums_after,

    visit_annotations_before,
    visit_annotation_before,
    visit_annotation,
    visit_annotation_arguments_before,
    visit_annotation_argument,
    visit_annotation_arguments_after,
    visit_annotation_after,
    visit_annotations_after,

    visit_document_after,
}
