use std::collections::HashSet;

use crate::ast::{Context, Visitor};
use crate::validate::validation_error;

/// Directive locations come from the closed location set, without
/// duplicates. `require` clauses additionally permit the pseudo-location
/// `SELF`.
pub fn valid_directive_locations() -> Box<dyn Visitor> {
    Box::new(ValidDirectiveLocations)
}

pub(crate) const VALID_LOCATION_NAMES: &[&str] = &[
    "NAMESPACE",
    "INTERFACE",
    "OPERATION",
    "PARAMETER",
    "TYPE",
    "FIELD",
    "ENUM",
    "ENUM_VALUE",
    "UNION",
    "ALIAS",
];

struct ValidDirectiveLocations;

impl Visitor for ValidDirectiveLocations {
    fn visit_directive(&mut self, context: &mut Context<'_>) {
        let Some(directive) = context.directive else {
            return;
        };
        let name = &directive.name.value;

        let mut seen = HashSet::new();
        for location in &directive.locations {
            if !VALID_LOCATION_NAMES.contains(&location.value.as_str()) {
                context.report_error(validation_error(
                    location.loc.as_ref(),
                    format!(
                        "invalid directive location \"{}\" on \"{}\"",
                        location.value, name
                    ),
                ));
            }
            if !seen.insert(location.value.clone()) {
                context.report_error(validation_error(
                    location.loc.as_ref(),
                    format!(
                        "duplicate directive location \"{}\" on \"{}\"",
                        location.value, name
                    ),
                ));
            }
        }

        for require in &directive.requires {
            let mut seen = HashSet::new();
            for location in &require.locations {
                if location.value != "SELF"
                    && !VALID_LOCATION_NAMES.contains(&location.value.as_str())
                {
                    context.report_error(validation_error(
                        location.loc.as_ref(),
                        format!(
                            "invalid directive location \"{}\" on \"{}\"",
                            location.value, name
                        ),
                    ));
                }
                if !seen.insert(location.value.clone()) {
                    context.report_error(validation_error(
                        location.loc.as_ref(),
                        format!(
                            "duplicate directive location \"{}\" on \"{}\"",
                            location.value, name
                        ),
                    ));
                }
            }
        }
    }
}
