use crate::ast::{Context, Type, Visitor};
use crate::error::Error;
use crate::validate::validation_error;

/// Every named type reference resolves to a built-in scalar or a name in the
/// symbol table. `void` is legal only as an operation return type, which is
/// skipped here before checking.
pub fn known_types() -> Box<dyn Visitor> {
    Box::new(KnownTypes)
}

pub(crate) const BUILT_IN_TYPE_NAMES: &[&str] = &[
    "i8", "u8", "i16", "u16", "i32", "u32", "i64", "u64", "f32", "f64", "bool", "string",
    "datetime", "bytes", "any", "raw",
];

struct KnownTypes;

fn check_type(
    context: &Context<'_>,
    errors: &mut Vec<Error>,
    for_name: &str,
    parent_name: &str,
    ty: &Type,
) {
    match ty {
        Type::Named(named) => {
            let name = &named.name.value;
            let first = name.chars().next().unwrap_or('_');
            if first.is_ascii_uppercase() {
                if !context.named.contains_key(name.as_str()) {
                    errors.push(validation_error(
                        named.loc.as_ref(),
                        format!(
                            "unknown type \"{}\" for {} in \"{}\"",
                            name, for_name, parent_name
                        ),
                    ));
                }
            } else if !BUILT_IN_TYPE_NAMES.contains(&name.as_str()) {
                errors.push(validation_error(
                    named.loc.as_ref(),
                    format!(
                        "invalid built-in type \"{}\" for {} in \"{}\"",
                        name, for_name, parent_name
                    ),
                ));
            }
        }
        Type::Optional(inner) => check_type(context, errors, for_name, parent_name, &inner.ty),
        Type::List(inner) => check_type(context, errors, for_name, parent_name, &inner.ty),
        Type::Stream(inner) => check_type(context, errors, for_name, parent_name, &inner.ty),
        Type::Map(map) => {
            check_type(context, errors, for_name, parent_name, &map.key_type);
            check_type(context, errors, for_name, parent_name, &map.value_type);
        }
    }
}

fn report(context: &mut Context<'_>, errors: Vec<Error>) {
    for error in errors {
        context.report_error(error);
    }
}

impl Visitor for KnownTypes {
    fn visit_alias(&mut self, context: &mut Context<'_>) {
        let Some(alias) = context.alias else {
            return;
        };
        let mut errors = Vec::new();
        check_type(context, &mut errors, "alias", &alias.name.value, &alias.ty);
        report(context, errors);
    }

    fn visit_operation_after(&mut self, context: &mut Context<'_>) {
        let Some(operation) = context.operation else {
            return;
        };
        // "void" is a special case for operations without a return.
        if operation.ty.is_named("void") {
            return;
        }
        let mut errors = Vec::new();
        check_type(
            context,
            &mut errors,
            "return",
            &operation.name.value,
            &operation.ty,
        );
        report(context, errors);
    }

    fn visit_function_after(&mut self, context: &mut Context<'_>) {
        let Some(function) = context.function else {
            return;
        };
        if function.ty.is_named("void") {
            return;
        }
        let mut errors = Vec::new();
        check_type(
            context,
            &mut errors,
            "return",
            &function.name.value,
            &function.ty,
        );
        report(context, errors);
    }

    fn visit_parameter(&mut self, context: &mut Context<'_>) {
        let (Some(operation), Some(parameter)) = (context.operation, context.parameter) else {
            return;
        };
        let mut errors = Vec::new();
        check_type(
            context,
            &mut errors,
            &format!("parameter \"{}\"", parameter.name.value),
            &operation.name.value,
            &parameter.ty,
        );
        report(context, errors);
    }

    fn visit_type_field(&mut self, context: &mut Context<'_>) {
        let (Some(type_def), Some(field)) = (context.type_def, context.field) else {
            return;
        };
        let mut errors = Vec::new();
        check_type(
            context,
            &mut errors,
            &format!("field \"{}\"", field.name.value),
            &type_def.name.value,
            &field.ty,
        );
        report(context, errors);
    }

    fn visit_union(&mut self, context: &mut Context<'_>) {
        let Some(union) = context.union else {
            return;
        };
        let mut errors = Vec::new();
        for member in &union.members {
            check_type(
                context,
                &mut errors,
                &format!("union \"{}\"", union.name.value),
                &union.name.value,
                member,
            );
        }
        report(context, errors);
    }

    fn visit_directive_parameter(&mut self, context: &mut Context<'_>) {
        let (Some(directive), Some(parameter)) = (context.directive, context.parameter) else {
            return;
        };
        let mut errors = Vec::new();
        check_type(
            context,
            &mut errors,
            &format!("parameter \"{}\"", parameter.name.value),
            &directive.name.value,
            &parameter.ty,
        );
        report(context, errors);
    }
}
