use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Top-level function names are unique within the document.
pub fn unique_function_names() -> Box<dyn Visitor> {
    Box::new(UniqueFunctionNames {
        names: HashSet::new(),
    })
}

struct UniqueFunctionNames {
    names: HashSet<String>,
}

impl Visitor for UniqueFunctionNames {
    fn visit_function(&mut self, context: &mut Context<'_>) {
        let Some(function) = context.function else {
            return;
        };
        if !self.names.insert(function.name.value.clone()) {
            context.report_error(validation_error(
                function.name.loc.as_ref(),
                format!("duplicate function \"{}\"", function.name.value),
            ));
        }
    }
}
