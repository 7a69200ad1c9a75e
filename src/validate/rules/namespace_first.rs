use crate::ast::{Context, Definition, Visitor};
use crate::validate::validation_error;

/// The namespace, if present, precedes everything except imports and
/// directive definitions.
pub fn namespace_first() -> Box<dyn Visitor> {
    Box::new(NamespaceFirst)
}

struct NamespaceFirst;

impl Visitor for NamespaceFirst {
    fn visit_namespace(&mut self, context: &mut Context<'_>) {
        let document = context.document;
        let mut preceding = 0;
        for definition in &document.definitions {
            match definition {
                Definition::Import(_) | Definition::Directive(_) => {}
                Definition::Namespace(namespace) => {
                    if preceding > 0 {
                        context.report_error(validation_error(
                            namespace.loc.as_ref(),
                            "namespace must be defined before any other definition".to_string(),
                        ));
                    }
                    return;
                }
                _ => preceding += 1,
            }
        }
    }
}
