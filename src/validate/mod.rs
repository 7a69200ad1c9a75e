//! Multi-pass validation.
//!
//! Validation runs a set of independent rules over the document in a single
//! traversal. Each rule is a visitor created fresh per run by a
//! [`ValidationRule`] factory; a [`MultiVisitor`] fans every hook out across
//! the whole set. Rules never mutate the AST and never throw: violations
//! accumulate in the context's error sink and come back as a batch.

pub mod rules;

use crate::ast::{Context, Document, Location, MultiVisitor, Visitor};
use crate::error::Error;

/// A factory producing one rule instance per validation run.
pub type ValidationRule = fn() -> Box<dyn Visitor>;

/// The standard rule set, in alphabetical order. Validation results do not
/// depend on rule order.
pub static RULES: &[ValidationRule] = &[
    rules::camel_case_directive_names,
    rules::known_types,
    rules::namespace_first,
    rules::pascal_case_type_names,
    rules::single_namespace_defined,
    rules::unique_directive_names,
    rules::unique_enum_value_indexes,
    rules::unique_enum_value_names,
    rules::unique_function_names,
    rules::unique_object_names,
    rules::unique_operation_names,
    rules::unique_parameter_names,
    rules::unique_type_field_names,
    rules::valid_annotation_arguments,
    rules::valid_annotation_locations,
    rules::valid_directive_locations,
    rules::valid_directive_parameter_types,
    rules::valid_directive_requires,
    rules::valid_enum_value_indexes,
];

/// Runs the given rules over the document, collecting every violation.
pub fn validate(document: &Document, rules: &[ValidationRule]) -> Vec<Error> {
    let mut context = Context::new(document);
    let mut visitor = MultiVisitor::new(rules.iter().map(|rule| rule()).collect());
    document.accept(&mut context, &mut visitor);
    context.into_errors()
}

pub(crate) fn validation_error(loc: Option<&Location>, message: String) -> Error {
    Error::with_location(message, loc)
}
