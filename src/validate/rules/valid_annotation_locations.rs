use crate::ast::{find_annotation, Annotation, Context, Visitor};
use crate::error::Error;
use crate::validate::validation_error;

/// An annotation's declaring directive must list the location where the
/// annotation appears, and every `require` clause on that directive must be
/// satisfied by an annotation present at one of the referenced locations.
pub fn valid_annotation_locations() -> Box<dyn Visitor> {
    Box::new(ValidAnnotationLocations)
}

struct ValidAnnotationLocations;

fn check(context: &mut Context<'_>, annotations: &[Annotation], location: &str) {
    let mut errors = Vec::new();
    for annotation in annotations {
        check_annotation(context, annotations, annotation, location, &mut errors);
    }
    for error in errors {
        context.report_error(error);
    }
}

fn check_annotation(
    context: &Context<'_>,
    annotations: &[Annotation],
    annotation: &Annotation,
    location: &str,
    errors: &mut Vec<Error>,
) {
    let Some(directive) = context
        .directives
        .iter()
        .copied()
        .find(|d| d.name.value == annotation.name.value)
    else {
        return;
    };

    if !directive.locations.iter().any(|l| l.value == location) {
        errors.push(validation_error(
            annotation.loc.as_ref(),
            format!(
                "annotation \"{}\" is not valid on a {}",
                annotation.name.value,
                location.to_lowercase().replace('_', " ")
            ),
        ));
        return;
    }

    for require in &directive.requires {
        let satisfied = require.locations.iter().any(|loc| {
            let required = require.directive.value.as_str();
            let present = |anns: &[Annotation]| find_annotation(anns, required).is_some();
            match loc.value.as_str() {
                "SELF" => present(annotations),
                "NAMESPACE" => context.namespace.is_some_and(|n| present(&n.annotations)),
                "INTERFACE" => context.interface.is_some_and(|n| present(&n.annotations)),
                "OPERATION" => context.operation.is_some_and(|n| present(&n.annotations)),
                "PARAMETER" => context.parameter.is_some_and(|n| present(&n.annotations)),
                "TYPE" => context.type_def.is_some_and(|n| present(&n.annotations)),
                "FIELD" => context.field.is_some_and(|n| present(&n.annotations)),
                "ENUM" => context.enum_def.is_some_and(|n| present(&n.annotations)),
                "ENUM_VALUE" => context.enum_value.is_some_and(|n| present(&n.annotations)),
                "UNION" => context.union.is_some_and(|n| present(&n.annotations)),
                "ALIAS" => context.alias.is_some_and(|n| present(&n.annotations)),
                _ => false,
            }
        });
        if !satisfied {
            let locations: Vec<String> = require
                .locations
                .iter()
                .map(|l| l.value.to_lowercase())
                .collect();
            errors.push(validation_error(
                annotation.loc.as_ref(),
                format!(
                    "annotation \"{}\" requires \"{}\" to exist on a relative {}",
                    annotation.name.value,
                    require.directive.value,
                    locations.join(", ")
                ),
            ));
        }
    }
}

impl Visitor for ValidAnnotationLocations {
    fn visit_namespace(&mut self, context: &mut Context<'_>) {
        if let Some(namespace) = context.namespace {
            check(context, &namespace.annotations, "NAMESPACE");
        }
    }

    fn visit_interface(&mut self, context: &mut Context<'_>) {
        if let Some(interface) = context.interface {
            check(context, &interface.annotations, "INTERFACE");
        }
    }

    fn visit_operation(&mut self, context: &mut Context<'_>) {
        if let Some(operation) = context.operation {
            check(context, &operation.annotations, "OPERATION");
        }
    }

    fn visit_function(&mut self, context: &mut Context<'_>) {
        if let Some(function) = context.function {
            check(context, &function.annotations, "OPERATION");
        }
    }

    fn visit_parameter(&mut self, context: &mut Context<'_>) {
        if let Some(parameter) = context.parameter {
            check(context, &parameter.annotations, "PARAMETER");
        }
    }

    fn visit_type(&mut self, context: &mut Context<'_>) {
        if let Some(type_def) = context.type_def {
            check(context, &type_def.annotations, "TYPE");
        }
    }

    fn visit_type_field(&mut self, context: &mut Context<'_>) {
        if let Some(field) = context.field {
            check(context, &field.annotations, "FIELD");
        }
    }

    fn visit_enum(&mut self, context: &mut Context<'_>) {
        if let Some(enum_def) = context.enum_def {
            check(context, &enum_def.annotations, "ENUM");
        }
    }

    fn visit_enum_value(&mut self, context: &mut Context<'_>) {
        if let Some(enum_value) = context.enum_value {
            check(context, &enum_value.annotations, "ENUM_VALUE");
        }
    }

    fn visit_union(&mut self, context: &mut Context<'_>) {
        if let Some(union) = context.union {
            check(context, &union.annotations, "UNION");
        }
    }

    fn visit_alias(&mut self, context: &mut Context<'_>) {
        if let Some(alias) = context.alias {
            check(context, &alias.annotations, "ALIAS");
        }
    }
}
