//! Catalog of the duplicate-code checker.

use lintel_diagnostics::{Category, MessageDefinition, MessageId};

use crate::Checker;

/// Cross-module duplication findings. Refactor kinds are reported without
/// a node or line.
pub struct SimilaritiesChecker;

impl Checker for SimilaritiesChecker {
    fn name(&self) -> &str {
        "similarities"
    }

    fn messages(&self) -> Vec<MessageDefinition> {
        vec![MessageDefinition::new(
            MessageId::new(Category::Refactor, 801),
            "duplicate-code",
            "Similar lines in %s files\n%s",
            "Indicates that a set of similar lines has been detected among multiple files.",
        )]
    }
}
