//! Error types for message control and emission.

use crate::format::FormatError;
use lintel_diagnostics::RegistryError;

/// Errors raised by [`LintEngine`](crate::LintEngine) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LintError {
    /// No message kind, category, checker, or report matches the identifier.
    #[error("no message, category, checker or report named '{0}'")]
    UnknownMessage(String),

    /// The checker violated the kind's scope contract.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// Interpolating the message arguments into the template failed.
    #[error("cannot format message: {0}")]
    Format(#[from] FormatError),

    /// Registering a checker's catalog failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LintError::UnknownMessage("no-such-thing".into());
        assert_eq!(
            err.to_string(),
            "no message, category, checker or report named 'no-such-thing'"
        );

        let err = LintError::from(FormatError::MissingKey("name".into()));
        assert!(err.to_string().starts_with("cannot format message"));
    }
}
