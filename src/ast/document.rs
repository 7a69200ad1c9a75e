//! The document root and its traversal.

use serde::Serialize;

use crate::ast::definitions::{Definition, ParameterDefinition};
use crate::ast::nodes::{skip_visit, Annotation, Location};
use crate::ast::visitor::{Context, Visitor};

/// An ordered list of parsed definitions.
///
/// `imported` holds definitions contributed by resolved imports; they feed
/// the symbol table but are not part of the document proper and are never
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
    #[serde(skip)]
    pub imported: Vec<Definition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,
}

impl Document {
    /// Drives a visitor over the document in the fixed category order:
    /// namespace, imports, directives, aliases, functions, interfaces,
    /// types, unions, enums. Nodes annotated `novisit` are skipped.
    pub fn accept<'a>(&'a self, context: &mut Context<'a>, visitor: &mut dyn Visitor) {
        visitor.visit_document_before(context);

        let namespaces: Vec<_> = self
            .definitions
            .iter()
            .filter_map(|d| match d {
                Definition::Namespace(ns) => Some(ns),
                _ => None,
            })
            .collect();
        for namespace in namespaces.iter().copied() {
            context.namespace = Some(namespace);
            visitor.visit_namespace(context);
            visit_annotations(context, visitor, &namespace.annotations);
        }
        context.namespace = namespaces.first().copied();

        visitor.visit_imports_before(context);
        for import in context.imports.clone() {
            context.import = Some(import);
            visitor.visit_import(context);
            visit_annotations(context, visitor, &import.annotations);
        }
        context.import = None;
        visitor.visit_imports_after(context);

        visitor.visit_directives_before(context);
        for directive in context.directives.clone() {
            context.directive = Some(directive);
            visitor.visit_directive_before(context);
            visitor.visit_directive(context);
            visitor.visit_directive_parameters_before(context);
            for parameter in &directive.parameters {
                context.parameter = Some(parameter);
                visitor.visit_directive_parameter(context);
            }
            context.parameter = None;
            visitor.visit_directive_parameters_after(context);
            visitor.visit_directive_after(context);
        }
        context.directive = None;
        visitor.visit_directives_after(context);

        visitor.visit_aliases_before(context);
        for alias in context.aliases.clone() {
            context.alias = Some(alias);
            visitor.visit_alias_before(context);
            visitor.visit_alias(context);
            visit_annotations(context, visitor, &alias.annotations);
            visitor.visit_alias_after(context);
        }
        context.alias = None;
        visitor.visit_aliases_after(context);

        visitor.visit_all_operations_before(context);

        visitor.visit_functions_before(context);
        for function in context.functions.clone() {
            if skip_visit(&function.annotations) {
                continue;
            }
            context.function = Some(function);
            context.operation = Some(function);
            visitor.visit_function_before(context);
            visitor.visit_function(context);
            visit_parameters(context, visitor, &function.parameters);
            visit_annotations(context, visitor, &function.annotations);
            visitor.visit_function_after(context);
        }
        context.function = None;
        context.operation = None;
        visitor.visit_functions_after(context);

        visitor.visit_interfaces_before(context);
        for interface in context.interfaces.clone() {
            context.interface = Some(interface);
            visitor.visit_interface_before(context);
            visitor.visit_interface(context);
            visit_annotations(context, visitor, &interface.annotations);
            visitor.visit_operations_before(context);
            for operation in &interface.operations {
                if skip_visit(&operation.annotations) {
                    continue;
                }
                context.operation = Some(operation);
                visitor.visit_operation_before(context);
                visitor.visit_operation(context);
                visit_parameters(context, visitor, &operation.parameters);
                visit_annotations(context, visitor, &operation.annotations);
                visitor.visit_operation_after(context);
            }
            context.operation = None;
            visitor.visit_operations_after(context);
            visitor.visit_interface_after(context);
        }
        context.interface = None;
        visitor.visit_interfaces_after(context);

        visitor.visit_all_operations_after(context);

        visitor.visit_types_before(context);
        for type_def in context.types.clone() {
            if skip_visit(&type_def.annotations) {
                continue;
            }
            context.type_def = Some(type_def);
            visitor.visit_type_before(context);
            visitor.visit_type(context);
            visit_annotations(context, visitor, &type_def.annotations);
            visitor.visit_type_fields_before(context);
            for field in &type_def.fields {
                if skip_visit(&field.annotations) {
                    continue;
                }
                context.field = Some(field);
                visitor.visit_type_field(context);
                visit_annotations(context, visitor, &field.annotations);
            }
            context.field = None;
            visitor.visit_type_fields_after(context);
            visitor.visit_type_after(context);
        }
        context.type_def = None;
        visitor.visit_types_after(context);

        visitor.visit_unions_before(context);
        for union in context.unions.clone() {
            context.union = Some(union);
            visitor.visit_union(context);
            visit_annotations(context, visitor, &union.annotations);
        }
        context.union = None;
        visitor.visit_unions_after(context);

        visitor.visit_enums_before(context);
        for enum_def in context.enums.clone() {
            context.enum_def = Some(enum_def);
            visitor.visit_enum_before(context);
            visitor.visit_enum(context);
            visit_annotations(context, visitor, &enum_def.annotations);
            visitor.visit_enum_values_before(context);
            for value in &enum_def.values {
                if skip_visit(&value.annotations) {
                    continue;
                }
                context.enum_value = Some(value);
                visitor.visit_enum_value(context);
                visit_annotations(context, visitor, &value.annotations);
            }
            context.enum_value = None;
            visitor.visit_enum_values_after(context);
            visitor.visit_enum_after(context);
        }
        context.enum_def = None;
        visitor.visit_enums_after(context);

        visitor.visit_document_after(context);
    }
}

fn visit_parameters<'a>(
    context: &mut Context<'a>,
    visitor: &mut dyn Visitor,
    parameters: &'a [ParameterDefinition],
) {
    visitor.visit_parameters_before(context);
    for parameter in parameters {
        context.parameter = Some(parameter);
        visitor.visit_parameter(context);
        visit_annotations(context, visitor, &parameter.annotations);
    }
    context.parameter = None;
    visitor.visit_parameters_after(context);
}

fn visit_annotations<'a>(
    context: &mut Context<'a>,
    visitor: &mut dyn Visitor,
    annotations: &'a [Annotation],
) {
    visitor.visit_annotations_before(context);
    for annotation in annotations {
        context.annotation = Some(annotation);
        visitor.visit_annotation_before(context);
        visitor.visit_annotation(context);
        visitor.visit_annotation_arguments_before(context);
        for argument in &annotation.arguments {
            context.argument = Some(argument);
            visitor.visit_annotation_argument(context);
        }
        context.argument = None;
        visitor.visit_annotation_arguments_after(context);
        visitor.visit_annotation_after(context);
    }
    context.annotation = None;
    visitor.visit_annotations_after(context);
}
