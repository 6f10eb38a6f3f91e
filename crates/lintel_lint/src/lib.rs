//! Message control and emission for the lintel static analyzer.
//!
//! This crate decides, for every finding a checker wants to report, whether
//! it is suppressed for the whole run, for the current module, or for a
//! single line, and turns the survivors into attributed [`Diagnostic`]s.
//!
//! # Layers
//!
//! - **Run state:** configuration and run-scope `enable`/`disable`
//! - **Module state:** whole-module defaults and per-line overrides, usually
//!   set by `# lintel:` pragmas
//! - **Confidence filter:** hides findings below the accepted confidence
//!
//! [`Diagnostic`]: lintel_diagnostics::Diagnostic

#![warn(missing_docs)]

pub mod audit;
pub mod checkers;
mod engine;
mod error;
pub mod file_state;
pub mod format;
pub mod pragma;
pub mod reports;
mod resolve;
pub mod state;
pub mod stats;

pub use audit::{ManagedMessage, ManagedMessageLog};
pub use checkers::register_builtin_checkers;
pub use engine::{LintEngine, MessageRequest};
pub use error::LintError;
pub use file_state::{FileState, ModuleStatus};
pub use format::{interpolate, FormatError, MessageArgs};
pub use pragma::{parse_pragmas, Pragma};
pub use reports::ReportState;
pub use resolve::{ControlScope, PORTING_CHECKER};
pub use state::{StateScope, SuppressionState};
pub use stats::RunStatistics;

use lintel_diagnostics::MessageDefinition;

/// A checker as seen by the engine: a name and a catalog of message kinds.
///
/// Registering a checker makes its kinds resolvable by id, symbol, old
/// names, and the checker's name.
pub trait Checker: Send + Sync {
    /// The checker's name, matched case-insensitively.
    fn name(&self) -> &str;

    /// The message kinds this checker can report.
    fn messages(&self) -> Vec<MessageDefinition>;

    /// Whether the checker's kinds start enabled.
    fn enabled_by_default(&self) -> bool {
        true
    }
}
