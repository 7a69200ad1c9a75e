use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Field names are unique within one type.
pub fn unique_type_field_names() -> Box<dyn Visitor> {
    Box::new(UniqueTypeFieldNames {
        parent: String::new(),
        names: HashSet::new(),
    })
}

struct UniqueTypeFieldNames {
    parent: String,
    names: HashSet<String>,
}

impl Visitor for UniqueTypeFieldNames {
    fn visit_type_before(&mut self, context: &mut Context<'_>) {
        if let Some(type_def) = context.type_def {
            self.parent = type_def.name.value.clone();
        }
        self.names.clear();
    }

    fn visit_type_field(&mut self, context: &mut Context<'_>) {
        let Some(field) = context.field else {
            return;
        };
        if !self.names.insert(field.name.value.clone()) {
            context.report_error(validation_error(
                field.name.loc.as_ref(),
                format!(
                    "duplicate field \"{}\" in type \"{}\"",
                    field.name.value, self.parent
                ),
            ));
        }
    }
}
