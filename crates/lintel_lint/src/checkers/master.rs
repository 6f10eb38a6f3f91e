//! Messages the engine itself emits about message control.

use lintel_diagnostics::{Category, MessageDefinition, MessageId, WarningScope};

use crate::Checker;

/// `locally-disabled`: a module-scope disable took effect.
pub const LOCALLY_DISABLED: MessageId = MessageId {
    category: Category::Info,
    number: 11,
};
/// `bad-inline-option`: a pragma could not be parsed.
pub const BAD_INLINE_OPTION: MessageId = MessageId {
    category: Category::Info,
    number: 10,
};
/// `suppressed-message`: a finding was hidden by a module-scope directive.
pub const SUPPRESSED_MESSAGE: MessageId = MessageId {
    category: Category::Info,
    number: 20,
};
/// `useless-suppression`: a per-line disable hid nothing.
pub const USELESS_SUPPRESSION: MessageId = MessageId {
    category: Category::Info,
    number: 21,
};
/// `deprecated-pragma`: an old pragma keyword was used.
pub const DEPRECATED_PRAGMA: MessageId = MessageId {
    category: Category::Info,
    number: 22,
};
/// `use-symbolic-message-instead`: a directive named a kind by numeric id.
pub const USE_SYMBOLIC_MESSAGE_INSTEAD: MessageId = MessageId {
    category: Category::Info,
    number: 23,
};
/// `unrecognized-inline-option`: a pragma keyword is unknown.
pub const UNRECOGNIZED_INLINE_OPTION: MessageId = MessageId {
    category: Category::Error,
    number: 11,
};
/// `bad-option-value`: a pragma named an unknown message.
pub const BAD_OPTION_VALUE: MessageId = MessageId {
    category: Category::Error,
    number: 12,
};

/// The engine's own catalog.
pub struct MasterChecker;

impl Checker for MasterChecker {
    fn name(&self) -> &str {
        "master"
    }

    fn messages(&self) -> Vec<MessageDefinition> {
        let line = |id: MessageId, symbol: &str, msg: &str, description: &str| {
            MessageDefinition::new(id, symbol, msg, description).with_scope(WarningScope::Line)
        };
        vec![
            line(
                MessageId::new(Category::Fatal, 1),
                "fatal",
                "%s",
                "Used when an error occurred preventing the analysis of a module.",
            ),
            line(
                MessageId::new(Category::Fatal, 10),
                "parse-error",
                "error while code parsing: %s",
                "Used when an exception occurred while building the syntax tree.",
            ),
            line(
                MessageId::new(Category::Error, 1),
                "syntax-error",
                "%s",
                "Used when a syntax error is raised for a module.",
            ),
            line(
                UNRECOGNIZED_INLINE_OPTION,
                "unrecognized-inline-option",
                "Unrecognized file option %r",
                "Used when an unknown inline option is encountered.",
            ),
            line(
                BAD_OPTION_VALUE,
                "bad-option-value",
                "Bad option value %r",
                "Used when a bad value for an inline option is encountered.",
            ),
            line(
                BAD_INLINE_OPTION,
                "bad-inline-option",
                "Unable to consider inline option %r",
                "Used when an inline option is malformed.",
            ),
            line(
                LOCALLY_DISABLED,
                "locally-disabled",
                "Locally disabling %s (%s)",
                "Used when a message is disabled inside a module.",
            ),
            line(
                SUPPRESSED_MESSAGE,
                "suppressed-message",
                "Suppressed %s (from line %d)",
                "A message was triggered on a line, but suppressed explicitly by a disable= comment.",
            ),
            line(
                USELESS_SUPPRESSION,
                "useless-suppression",
                "Useless suppression of %s",
                "A disable= comment suppressed nothing on its line.",
            ),
            line(
                DEPRECATED_PRAGMA,
                "deprecated-pragma",
                "Pragma %r is deprecated, use %r instead",
                "Used when an obsolete pragma keyword is found.",
            ),
            line(
                USE_SYMBOLIC_MESSAGE_INSTEAD,
                "use-symbolic-message-instead",
                "'%s' is cryptic: use '# lintel: %s=%s' instead",
                "Used when a message is enabled or disabled by id.",
            ),
        ]
    }
}
