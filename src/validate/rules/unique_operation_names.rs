use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Operation names are unique within their interface.
pub fn unique_operation_names() -> Box<dyn Visitor> {
    Box::new(UniqueOperationNames {
        names: HashSet::new(),
    })
}

struct UniqueOperationNames {
    names: HashSet<String>,
}

impl Visitor for UniqueOperationNames {
    fn visit_interface_before(&mut self, _context: &mut Context<'_>) {
        self.names.clear();
    }

    fn visit_operation(&mut self, context: &mut Context<'_>) {
        let Some(operation) = context.operation else {
            return;
        };
        if !self.names.insert(operation.name.value.clone()) {
            context.report_error(validation_error(
                operation.name.loc.as_ref(),
                format!(
                    "duplicate operation \"{}\" in interface",
                    operation.name.value
                ),
            ));
        }
    }
}
