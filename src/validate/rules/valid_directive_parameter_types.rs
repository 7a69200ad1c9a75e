use crate::ast::{Context, Definition, Type, Visitor};
use crate::error::Error;
use crate::validate::validation_error;

/// Directive parameters are restricted to scalars, enum references, and
/// record type references, plus containers of those. Aliases, unions, and
/// anything else are rejected.
pub fn valid_directive_parameter_types() -> Box<dyn Visitor> {
    Box::new(ValidDirectiveParameterTypes)
}

struct ValidDirectiveParameterTypes;

fn check(
    context: &Context<'_>,
    errors: &mut Vec<Error>,
    directive_name: &str,
    parameter_name: &str,
    ty: &Type,
) {
    match ty {
        Type::Named(named) => {
            match context.named.get(named.name.value.as_str()) {
                // Scalars are absent from the index; unknown names are
                // reported by the known-types rule.
                None => {}
                Some(Definition::Type(_)) | Some(Definition::Enum(_)) => {}
                Some(_) => {
                    errors.push(validation_error(
                        named.loc.as_ref(),
                        format!(
                            "invalid type for parameter \"{}\" in directive \"{}\": only types, enums, and built-in types are allowed",
                            parameter_name, directive_name
                        ),
                    ));
                }
            }
        }
        Type::Optional(inner) => check(context, errors, directive_name, parameter_name, &inner.ty),
        Type::List(inner) => check(context, errors, directive_name, parameter_name, &inner.ty),
        Type::Stream(inner) => check(context, errors, directive_name, parameter_name, &inner.ty),
        Type::Map(map) => {
            check(context, errors, directive_name, parameter_name, &map.key_type);
            check(
                context,
                errors,
                directive_name,
                parameter_name,
                &map.value_type,
            );
        }
    }
}

impl Visitor for ValidDirectiveParameterTypes {
    fn visit_directive_parameter(&mut self, context: &mut Context<'_>) {
        let (Some(directive), Some(parameter)) = (context.directive, context.parameter) else {
            return;
        };
        let mut errors = Vec::new();
        check(
            context,
            &mut errors,
            &directive.name.value,
            &parameter.name.value,
            &parameter.ty,
        );
        for error in errors {
            context.report_error(error);
        }
    }
}
