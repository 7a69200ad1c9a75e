use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Parameter names are unique within one operation or function.
pub fn unique_parameter_names() -> Box<dyn Visitor> {
    Box::new(UniqueParameterNames {
        parent: String::new(),
        names: HashSet::new(),
    })
}

struct UniqueParameterNames {
    parent: String,
    names: HashSet<String>,
}

impl Visitor for UniqueParameterNames {
    fn visit_function_before(&mut self, context: &mut Context<'_>) {
        if let Some(function) = context.function {
            self.parent = format!("func \"{}\"", function.name.value);
        }
        self.names.clear();
    }

    fn visit_operation_before(&mut self, context: &mut Context<'_>) {
        if let Some(operation) = context.operation {
            self.parent = format!("operation \"{}\"", operation.name.value);
        }
        self.names.clear();
    }

    fn visit_parameter(&mut self, context: &mut Context<'_>) {
        let Some(parameter) = context.parameter else {
            return;
        };
        if !self.names.insert(parameter.name.value.clone()) {
            context.report_error(validation_error(
                parameter.name.loc.as_ref(),
                format!(
                    "duplicate parameter \"{}\" in {}",
                    parameter.name.value, self.parent
                ),
            ));
        }
    }
}
