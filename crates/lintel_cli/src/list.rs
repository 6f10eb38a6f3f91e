//! `lintel list-msgs`: registered message kinds and their run-scope state.

use std::sync::Arc;

use lintel_diagnostics::{DiagnosticSink, MessageDefinition};
use lintel_lint::LintEngine;

use crate::session::build_engine;
use crate::{GlobalArgs, ListArgs};

/// Runs the `lintel list-msgs` command.
pub fn run(args: &ListArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let engine = build_engine(global, Arc::new(DiagnosticSink::new()))?;
    let (enabled, disabled) = partition(&engine);

    if !args.disabled {
        print_section("Enabled messages:", &enabled);
    }
    if !args.enabled {
        print_section("Disabled messages:", &disabled);
    }
    Ok(0)
}

/// Splits the registry into enabled and disabled kinds, each sorted by id.
fn partition(engine: &LintEngine) -> (Vec<&MessageDefinition>, Vec<&MessageDefinition>) {
    engine
        .registry()
        .definitions()
        .partition(|def| engine.is_enabled(&def.id.to_string(), None, None))
}

fn print_section(title: &str, definitions: &[&MessageDefinition]) {
    println!("{title}");
    for def in definitions {
        println!("  {} ({})", def.symbol, def.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintel_lint::ControlScope;

    #[test]
    fn porting_kinds_are_listed_as_disabled() {
        let mut engine = LintEngine::with_builtin_checkers(Arc::new(DiagnosticSink::new())).unwrap();
        engine.disable("W0613", ControlScope::Run, None).unwrap();
        let (enabled, disabled) = partition(&engine);
        let disabled: Vec<_> = disabled.iter().map(|d| d.symbol.as_str()).collect();
        assert!(disabled.contains(&"print-statement"));
        assert!(disabled.contains(&"unused-argument"));
        assert!(enabled.iter().any(|d| d.symbol == "line-too-long"));
        assert!(enabled.windows(2).all(|w| w[0].id < w[1].id));
    }
}
