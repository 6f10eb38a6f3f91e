//! `lintel explain`: why a message kind is or is not reported on a line.

use std::sync::Arc;

use lintel_diagnostics::{Confidence, DiagnosticSink};
use lintel_lint::StateScope;

use crate::session::{build_engine, open_source};
use crate::{ExplainArgs, GlobalArgs};

/// Runs the `lintel explain` command.
pub fn run(args: &ExplainArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let confidence = match &args.confidence {
        Some(name) => Some(
            Confidence::from_name(name).ok_or_else(|| format!("unknown confidence level '{name}'"))?,
        ),
        None => None,
    };

    let mut engine = build_engine(global, Arc::new(DiagnosticSink::new()))?;
    open_source(&mut engine, &args.file)?;

    let ids = engine.registry().lookup(&args.message)?;
    for id in ids {
        let symbol = engine.registry().symbol(id);
        let enabled = engine.is_enabled(&id.to_string(), Some(args.line), confidence);
        let scope = engine.state_scope(id, Some(args.line), confidence);
        let state = if enabled { "reported" } else { "suppressed" };
        println!(
            "{symbol} ({id}) on line {}: {state}, {}",
            args.line,
            describe(scope)
        );
    }
    Ok(0)
}

fn describe(scope: StateScope) -> &'static str {
    match scope {
        StateScope::Config => "decided by the run configuration",
        StateScope::Module => "decided by a pragma in this module",
        StateScope::Confidence => "decided by the confidence filter",
    }
}
