use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// At most one namespace per document.
pub fn single_namespace_defined() -> Box<dyn Visitor> {
    Box::new(SingleNamespaceDefined { found: false })
}

struct SingleNamespaceDefined {
    found: bool,
}

impl Visitor for SingleNamespaceDefined {
    fn visit_namespace(&mut self, context: &mut Context<'_>) {
        if !self.found {
            self.found = true;
            return;
        }
        let loc = context.namespace.and_then(|ns| ns.loc.as_ref());
        context.report_error(validation_error(
            loc,
            "only one namespace can be defined".to_string(),
        ));
    }
}
