use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Enum value names are unique within one enum.
pub fn unique_enum_value_names() -> Box<dyn Visitor> {
    Box::new(UniqueEnumValueNames {
        parent: String::new(),
        names: HashSet::new(),
    })
}

struct UniqueEnumValueNames {
    parent: String,
    names: HashSet<String>,
}

impl Visitor for UniqueEnumValueNames {
    fn visit_enum_before(&mut self, context: &mut Context<'_>) {
        if let Some(enum_def) = context.enum_def {
            self.parent = enum_def.name.value.clone();
        }
        self.names.clear();
    }

    fn visit_enum_value(&mut self, context: &mut Context<'_>) {
        let Some(value) = context.enum_value else {
            return;
        };
        if !self.names.insert(value.name.value.clone()) {
            context.report_error(validation_error(
                value.name.loc.as_ref(),
                format!(
                    "duplicate value \"{}\" in enum \"{}\"",
                    value.name.value, self.parent
                ),
            ));
        }
    }
}
