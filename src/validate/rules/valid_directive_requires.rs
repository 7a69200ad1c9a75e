use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Every directive named in a `require` clause is declared.
pub fn valid_directive_requires() -> Box<dyn Visitor> {
    Box::new(ValidDirectiveRequires)
}

struct ValidDirectiveRequires;

impl Visitor for ValidDirectiveRequires {
    fn visit_directive(&mut self, context: &mut Context<'_>) {
        let Some(directive) = context.directive else {
            return;
        };
        let directives = context.directives.clone();
        for require in &directive.requires {
            let found = directives
                .iter()
                .any(|d| d.name.value == require.directive.value);
            if !found {
                context.report_error(validation_error(
                    require.directive.loc.as_ref(),
                    format!(
                        "unknown required directive \"{}\" on \"{}\"",
                        require.directive.value, directive.name.value
                    ),
                ));
            }
        }
    }
}
