use heck::ToUpperCamelCase;

use crate::ast::{Context, Name, Visitor};
use crate::validate::validation_error;

/// Aliases, types, enums, and unions are pascal case.
pub fn pascal_case_type_names() -> Box<dyn Visitor> {
    Box::new(PascalCaseTypeNames)
}

struct PascalCaseTypeNames;

fn check(context: &mut Context<'_>, name: &Name, kind: &str) {
    if name.value != name.value.to_upper_camel_case() {
        context.report_error(validation_error(
            name.loc.as_ref(),
            format!("{} \"{}\" should be pascal case", kind, name.value),
        ));
    }
}

impl Visitor for PascalCaseTypeNames {
    fn visit_alias(&mut self, context: &mut Context<'_>) {
        let Some(alias) = context.alias else {
            return;
        };
        check(context, &alias.name, "alias");
    }

    fn visit_type(&mut self, context: &mut Context<'_>) {
        let Some(type_def) = context.type_def else {
            return;
        };
        check(context, &type_def.name, "type");
    }

    fn visit_enum(&mut self, context: &mut Context<'_>) {
        let Some(enum_def) = context.enum_def else {
            return;
        };
        check(context, &enum_def.name, "enum");
    }

    fn visit_union(&mut self, context: &mut Context<'_>) {
        let Some(union) = context.union else {
            return;
        };
        check(context, &union.name, "union");
    }
}
