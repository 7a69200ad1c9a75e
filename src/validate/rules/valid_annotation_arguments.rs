use std::collections::{HashMap, HashSet};

use crate::ast::{
    Annotation, Argument, Context, Definition, FieldDefinition, Type, Value, Visitor,
};
use crate::error::Error;
use crate::validate::validation_error;

/// Annotation arguments match the declaring directive's parameter list: no
/// duplicates, required parameters present, unknown parameters rejected, and
/// every value conforming to the declared parameter type.
pub fn valid_annotation_arguments() -> Box<dyn Visitor> {
    Box::new(ValidAnnotationArguments)
}

const INTEGER_TYPE_NAMES: &[&str] = &["i8", "u8", "i16", "u16", "i32", "u32", "i64", "u64"];
const FLOAT_TYPE_NAMES: &[&str] = &["f32", "f64"];

struct ValidAnnotationArguments;

impl Visitor for ValidAnnotationArguments {
    fn visit_annotation(&mut self, context: &mut Context<'_>) {
        let Some(annotation) = context.annotation else {
            return;
        };
        let mut errors = Vec::new();
        check_annotation(context, annotation, &mut errors);
        for error in errors {
            context.report_error(error);
        }
    }
}

fn check_annotation(context: &Context<'_>, annotation: &Annotation, errors: &mut Vec<Error>) {
    let mut seen = HashSet::new();
    for argument in &annotation.arguments {
        if !seen.insert(argument.name.value.as_str()) {
            errors.push(validation_error(
                argument.loc.as_ref(),
                format!(
                    "duplicate argument \"{}\" in annotation \"{}\"",
                    argument.name.value, annotation.name.value
                ),
            ));
        }
    }

    let Some(directive) = context
        .directives
        .iter()
        .copied()
        .find(|d| d.name.value == annotation.name.value)
    else {
        return;
    };

    let mut arguments: HashMap<&str, &Argument> = annotation
        .arguments
        .iter()
        .map(|a| (a.name.value.as_str(), a))
        .collect();

    for parameter in &directive.parameters {
        match arguments.remove(parameter.name.value.as_str()) {
            None => {
                if !parameter.ty.is_optional() {
                    errors.push(validation_error(
                        annotation.loc.as_ref(),
                        format!(
                            "missing required argument \"{}\" in annotation \"{}\"",
                            parameter.name.value, annotation.name.value
                        ),
                    ));
                }
            }
            Some(argument) => {
                check_value(context, &parameter.ty, &argument.value, annotation, errors);
            }
        }
    }

    // Leftovers are reported in source order, not map order.
    for argument in &annotation.arguments {
        if arguments.contains_key(argument.name.value.as_str()) {
            errors.push(validation_error(
                argument.loc.as_ref(),
                format!(
                    "unknown parameter \"{}\" in directive \"{}\"",
                    argument.name.value, directive.name.value
                ),
            ));
        }
    }
}

/// Checks one candidate value against an expected type, recursing through
/// containers and record fields.
fn check_value(
    context: &Context<'_>,
    ty: &Type,
    value: &Value,
    annotation: &Annotation,
    errors: &mut Vec<Error>,
) {
    let invalid = |expected: &str, errors: &mut Vec<Error>| {
        errors.push(validation_error(
            value.loc(),
            format!(
                "invalid value {} in annotation \"{}\": expected {}",
                value, annotation.name.value, expected
            ),
        ));
    };

    match ty {
        Type::Optional(inner) => check_value(context, &inner.ty, value, annotation, errors),
        Type::Named(named) => {
            let name = named.name.value.as_str();
            if name == "string" {
                if !matches!(value, Value::String(_)) {
                    invalid("a string", errors);
                }
            } else if INTEGER_TYPE_NAMES.contains(&name) {
                match value {
                    Value::Int(v) => {
                        if name.starts_with('u') && v.value < 0 {
                            invalid("a non-negative integer", errors);
                        }
                    }
                    _ => invalid("an integer", errors),
                }
            } else if FLOAT_TYPE_NAMES.contains(&name) {
                if !matches!(value, Value::Float(_)) {
                    invalid("a float", errors);
                }
            } else if name == "bool" {
                if !matches!(value, Value::Bool(_)) {
                    invalid("a boolean", errors);
                }
            } else {
                match context.named.get(name) {
                    // Unknown names are reported by the known-types rule.
                    None => {}
                    Some(Definition::Enum(enum_def)) => match value {
                        Value::Enum(v) => {
                            let known = enum_def.values.iter().any(|ev| ev.name.value == v.value);
                            if !known {
                                errors.push(validation_error(
                                    value.loc(),
                                    format!(
                                        "unknown enum value \"{}\" in annotation \"{}\": expected a value from \"{}\"",
                                        v.value, annotation.name.value, enum_def.name.value
                                    ),
                                ));
                            }
                        }
                        _ => invalid("an enum value", errors),
                    },
                    Some(Definition::Type(type_def)) => match value {
                        Value::Object(object) => {
                            let mut fields: HashMap<&str, &FieldDefinition> = type_def
                                .fields
                                .iter()
                                .map(|f| (f.name.value.as_str(), f))
                                .collect();
                            for field in &object.fields {
                                match fields.remove(field.name.value.as_str()) {
                                    Some(declared) => check_value(
                                        context,
                                        &declared.ty,
                                        &field.value,
                                        annotation,
                                        errors,
                                    ),
                                    None => {
                                        errors.push(validation_error(
                                            field.name.loc.as_ref(),
                                            format!(
                                                "unknown field \"{}\" for type \"{}\" in annotation \"{}\"",
                                                field.name.value,
                                                type_def.name.value,
                                                annotation.name.value
                                            ),
                                        ));
                                    }
                                }
                            }
                            for declared in &type_def.fields {
                                if fields.contains_key(declared.name.value.as_str())
                                    && !declared.ty.is_optional()
                                {
                                    errors.push(validation_error(
                                        object.loc.as_ref(),
                                        format!(
                                            "missing required field \"{}\" for type \"{}\" in annotation \"{}\"",
                                            declared.name.value,
                                            type_def.name.value,
                                            annotation.name.value
                                        ),
                                    ));
                                }
                            }
                        }
                        _ => invalid("an object", errors),
                    },
                    Some(_) => invalid("an object", errors),
                }
            }
        }
        Type::List(list) => match value {
            Value::List(values) => {
                for value in &values.values {
                    check_value(context, &list.ty, value, annotation, errors);
                }
            }
            _ => invalid("a list", errors),
        },
        Type::Map(map) => match value {
            Value::Object(object) => {
                for field in &object.fields {
                    check_value(context, &map.value_type, &field.value, annotation, errors);
                }
            }
            _ => invalid("a map", errors),
        },
        Type::Stream(_) => {}
    }
}
