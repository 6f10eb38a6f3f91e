//! Catalog of the porting checker.
//!
//! Off by default, and kept off by `enable=all` unless porting mode is on.

use lintel_diagnostics::{Category, MessageDefinition, MessageId};

use crate::resolve::PORTING_CHECKER;
use crate::Checker;

/// Python 2 constructs that break under Python 3.
pub struct Python3Checker;

impl Checker for Python3Checker {
    fn name(&self) -> &str {
        PORTING_CHECKER
    }

    fn messages(&self) -> Vec<MessageDefinition> {
        vec![
            MessageDefinition::new(
                MessageId::new(Category::Error, 1601),
                "print-statement",
                "print statement used",
                "Used when a print statement is used.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Error, 1602),
                "parameter-unpacking",
                "Parameter unpacking specified",
                "Used when parameter unpacking is specified for a function.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Warning, 1601),
                "apply-builtin",
                "apply built-in referenced",
                "Used when the apply built-in function is referenced.",
            ),
            MessageDefinition::new(
                MessageId::new(Category::Warning, 1602),
                "basestring-builtin",
                "basestring built-in referenced",
                "Used when the basestring built-in function is referenced.",
            ),
        ]
    }

    fn enabled_by_default(&self) -> bool {
        false
    }
}
