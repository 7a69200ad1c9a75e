use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Directive names are unique within the document.
pub fn unique_directive_names() -> Box<dyn Visitor> {
    Box::new(UniqueDirectiveNames {
        names: HashSet::new(),
    })
}

struct UniqueDirectiveNames {
    names: HashSet<String>,
}

impl Visitor for UniqueDirectiveNames {
    fn visit_directive(&mut self, context: &mut Context<'_>) {
        let Some(directive) = context.directive else {
            return;
        };
        if !self.names.insert(directive.name.value.clone()) {
            context.report_error(validation_error(
                directive.name.loc.as_ref(),
                format!("duplicate directive \"{}\"", directive.name.value),
            ));
        }
    }
}
