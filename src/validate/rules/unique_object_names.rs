use std::collections::HashSet;

use crate::ast::{Context, Name, Visitor};
use crate::validate::validation_error;

/// Aliases, types, enums, and unions share one name space.
pub fn unique_object_names() -> Box<dyn Visitor> {
    Box::new(UniqueObjectNames {
        names: HashSet::new(),
    })
}

struct UniqueObjectNames {
    names: HashSet<String>,
}

impl UniqueObjectNames {
    fn check(&mut self, context: &mut Context<'_>, name: &Name, kind: &str) {
        if !self.names.insert(name.value.clone()) {
            context.report_error(validation_error(
                name.loc.as_ref(),
                format!("duplicate {} \"{}\"", kind, name.value),
            ));
        }
    }
}

impl Visitor for UniqueObjectNames {
    fn visit_alias(&mut self, context: &mut Context<'_>) {
        let Some(alias) = context.alias else {
            return;
        };
        self.check(context, &alias.name, "alias");
    }

    fn visit_type(&mut self, context: &mut Context<'_>) {
        let Some(type_def) = context.type_def else {
            return;
        };
        self.check(context, &type_def.name, "type");
    }

    fn visit_union(&mut self, context: &mut Context<'_>) {
        let Some(union) = context.union else {
            return;
        };
        self.check(context, &union.name, "union");
    }

    fn visit_enum(&mut self, context: &mut Context<'_>) {
        let Some(enum_def) = context.enum_def else {
            return;
        };
        self.check(context, &enum_def.name, "enum");
    }
}
