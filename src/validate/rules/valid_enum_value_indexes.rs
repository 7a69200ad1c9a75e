use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Enum value indexes are non-negative.
pub fn valid_enum_value_indexes() -> Box<dyn Visitor> {
    Box::new(ValidEnumValueIndexes {
        parent: String::new(),
    })
}

struct ValidEnumValueIndexes {
    parent: String,
}

impl Visitor for ValidEnumValueIndexes {
    fn visit_enum_before(&mut self, context: &mut Context<'_>) {
        if let Some(enum_def) = context.enum_def {
            self.parent = enum_def.name.value.clone();
        }
    }

    fn visit_enum_value(&mut self, context: &mut Context<'_>) {
        let Some(value) = context.enum_value else {
            return;
        };
        if value.index.value < 0 {
            context.report_error(validation_error(
                value.index.loc.as_ref(),
                format!(
                    "index {} in enum \"{}\" must be a non-negative integer",
                    value.index.value, self.parent
                ),
            ));
        }
    }
}
