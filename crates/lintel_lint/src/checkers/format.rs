//! Catalog of the format checker. Most of its kinds are line-scoped.

use lintel_diagnostics::{Category, MessageDefinition, MessageId, WarningScope};

use crate::Checker;

/// Layout findings.
pub struct FormatChecker;

impl Checker for FormatChecker {
    fn name(&self) -> &str {
        "format"
    }

    fn messages(&self) -> Vec<MessageDefinition> {
        vec![
            MessageDefinition::new(
                MessageId::new(Category::Convention, 301),
                "line-too-long",
                "Line too long (%s/%s)",
                "Used when a line is longer than a given number of characters.",
            )
            .with_scope(WarningScope::Line),
            MessageDefinition::new(
                MessageId::new(Category::Convention, 303),
                "trailing-whitespace",
                "Trailing whitespace",
                "Used when there is whitespace between the end of a line and the newline.",
            )
            .with_scope(WarningScope::Line),
            MessageDefinition::new(
                MessageId::new(Category::Convention, 304),
                "missing-final-newline",
                "Final newline missing",
                "Used when the last line in a file is missing a newline.",
            )
            .with_scope(WarningScope::Line),
            MessageDefinition::new(
                MessageId::new(Category::Convention, 321),
                "multiple-statements",
                "More than one statement on a single line",
                "Used when more than one statement is found on the same line.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Warning, 311),
                "bad-indentation",
                "Bad indentation. Found %s %s, expected %s",
                "Used when an unexpected number of indentation tabs or spaces has been found.",
            )
            .with_scope(WarningScope::Line),
        ]
    }
}
