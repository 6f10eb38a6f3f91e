//! Built-in checker catalogs.
//!
//! Only the message catalogs live here; the analyses that report them run
//! outside the engine.

pub mod docstrings;
pub mod format;
pub mod master;
pub mod python3;
pub mod similarities;
pub mod variables;

pub use docstrings::DocstringsChecker;
pub use format::FormatChecker;
pub use master::MasterChecker;
pub use python3::Python3Checker;
pub use similarities::SimilaritiesChecker;
pub use variables::VariablesChecker;

use crate::{LintEngine, LintError};

/// Registers every built-in catalog with the engine.
pub fn register_builtin_checkers(engine: &mut LintEngine) -> Result<(), LintError> {
    engine.register_checker(&MasterChecker)?;
    engine.register_checker(&VariablesChecker)?;
    engine.register_checker(&FormatChecker)?;
    engine.register_checker(&DocstringsChecker)?;
    engine.register_checker(&SimilaritiesChecker)?;
    engine.register_checker(&Python3Checker)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintel_diagnostics::DiagnosticSink;
    use std::sync::Arc;

    #[test]
    fn builtin_catalogs_register_without_conflict() {
        let engine = LintEngine::with_builtin_checkers(Arc::new(DiagnosticSink::new())).unwrap();
        for name in [
            "master",
            "variables",
            "format",
            "docstrings",
            "similarities",
            "python3",
        ] {
            assert!(engine.registry().is_checker(name), "{name} not declared");
        }
        assert_eq!(engine.registry().len(), 11 + 5 + 5 + 4 + 1 + 4);
    }

    #[test]
    fn porting_checker_starts_disabled() {
        let engine = LintEngine::with_builtin_checkers(Arc::new(DiagnosticSink::new())).unwrap();
        assert!(!engine.is_enabled("print-statement", None, None));
        assert!(engine.is_enabled("unused-argument", None, None));
        assert_eq!(engine.disabled_symbols().len(), 4);
    }
}
