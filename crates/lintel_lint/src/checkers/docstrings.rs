//! Catalog of the docstrings checker.
//!
//! The three `missing-*-docstring` kinds were split out of a single
//! `missing-docstring` (`C0111`) kind and keep it as an old name, so
//! controlling the old name controls all three.

use lintel_diagnostics::{Category, MessageDefinition, MessageId};

use crate::Checker;

const MISSING_DOCSTRING: MessageId = MessageId {
    category: Category::Convention,
    number: 111,
};

/// Docstring presence findings.
pub struct DocstringsChecker;

impl Checker for DocstringsChecker {
    fn name(&self) -> &str {
        "docstrings"
    }

    fn messages(&self) -> Vec<MessageDefinition> {
        let missing = |number: u16, symbol: &str, what: &str| {
            MessageDefinition::new(
                MessageId::new(Category::Convention, number),
                symbol,
                format!("Missing {what} docstring"),
                format!("Used when a {what} has no docstring."),
            )
            .with_old_name(MISSING_DOCSTRING, "missing-docstring")
        };
        vec![
            MessageDefinition::new(
                MessageId::new(Category::Convention, 112),
                "empty-docstring",
                "Empty %s docstring",
                "Used when a module, function, class or method has an empty docstring.",
            ),
            missing(114, "missing-module-docstring", "module"),
            missing(115, "missing-class-docstring", "class"),
            missing(116, "missing-function-docstring", "function or method"),
        ]
    }
}
