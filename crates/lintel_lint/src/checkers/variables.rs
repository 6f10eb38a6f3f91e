//! Catalog of the variables checker.

use lintel_diagnostics::{Category, MessageDefinition, MessageId};

use crate::Checker;

/// Name definition and usage findings.
pub struct VariablesChecker;

impl Checker for VariablesChecker {
    fn name(&self) -> &str {
        "variables"
    }

    fn messages(&self) -> Vec<MessageDefinition> {
        vec![
            MessageDefinition::new(
                MessageId::new(Category::Error, 602),
                "undefined-variable",
                "Undefined variable %r",
                "Used when an undefined variable is accessed.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Warning, 611),
                "unused-import",
                "Unused %s",
                "Used when an imported module or variable is not used.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Warning, 612),
                "unused-variable",
                "Unused variable %r",
                "Used when a variable is defined but not used.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Warning, 613),
                "unused-argument",
                "Unused argument %r",
                "Used when a function or method argument is not used.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Warning, 621),
                "redefined-outer-name",
                "Redefining name %r from outer scope (line %s)",
                "Used when a variable's name hides a name defined in an outer scope.",
            ),
        ]
    }
}
