use heck::ToLowerCamelCase;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Directive names are camel case.
pub fn camel_case_directive_names() -> Box<dyn Visitor> {
    Box::new(CamelCaseDirectiveNames)
}

struct CamelCaseDirectiveNames;

impl Visitor for CamelCaseDirectiveNames {
    fn visit_directive(&mut self, context: &mut Context<'_>) {
        let Some(directive) = context.directive else {
            return;
        };
        let name = &directive.name.value;
        if *name != name.to_lower_camel_case() {
            context.report_error(validation_error(
                directive.name.loc.as_ref(),
                format!("directive \"{}\" should be camel case", name),
            ));
        }
    }
}
