use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Enum value indexes are unique within one enum.
pub fn unique_enum_value_indexes() -> Box<dyn Visitor> {
    Box::new(UniqueEnumValueIndexes {
        parent: String::new(),
        indexes: HashSet::new(),
    })
}

struct UniqueEnumValueIndexes {
    parent: String,
    indexes: HashSet<i64>,
}

impl Visitor for UniqueEnumValueIndexes {
    fn visit_enum_before(&mut self, context: &mut Context<'_>) {
        if let Some(enum_def) = context.enum_def {
            self.parent = enum_def.name.value.clone();
        }
        self.indexes.clear();
    }

    fn visit_enum_value(&mut self, context: &mut Context<'_>) {
        let Some(value) = context.enum_value else {
            return;
        };
        if !self.indexes.insert(value.index.value) {
            context.report_error(validation_error(
                value.index.loc.as_ref(),
                format!(
                    "duplicate index {} in enum \"{}\"",
                    value.index.value, self.parent
                ),
            ));
        }
    }
}
