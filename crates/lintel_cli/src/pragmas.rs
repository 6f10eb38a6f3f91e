//! `lintel pragmas`: what a file's `# lintel:` comments do.
//!
//! Applies the pragmas of one file, closes the module so unused and
//! id-based suppressions are reported, and prints the pragmas, the
//! resulting line overrides, and every message the engine emitted.

use std::sync::Arc;

use lintel_diagnostics::{Diagnostic, DiagnosticSink, MessageId};
use lintel_lint::{parse_pragmas, LintEngine, Pragma};

use crate::session::{build_engine, open_source};
use crate::{GlobalArgs, PragmasArgs, ReportFormat};

/// A line override as shown to the user.
struct OverrideRow {
    id: MessageId,
    symbol: String,
    line: u32,
    enabled: bool,
}

/// Runs the `lintel pragmas` command.
///
/// Returns exit code 1 if any error-level message was emitted, 0 otherwise.
pub fn run(args: &PragmasArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let sink = Arc::new(DiagnosticSink::new());
    let mut engine = build_engine(global, sink.clone())?;
    let source = open_source(&mut engine, &args.file)?;
    let pragmas = parse_pragmas(&source);
    let overrides = override_rows(&engine);
    engine.close_module()?;
    let diagnostics = sink.take_all();

    match args.format {
        ReportFormat::Text => print_text(&pragmas, &overrides, &diagnostics, global.quiet),
        ReportFormat::Json => {
            let rows: Vec<_> = overrides
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "msg_id": row.id,
                        "symbol": row.symbol,
                        "line": row.line,
                        "enabled": row.enabled,
                    })
                })
                .collect();
            let report = serde_json::json!({
                "pragmas": pragmas,
                "overrides": rows,
                "diagnostics": diagnostics,
                "stats": engine.stats(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn override_rows(engine: &LintEngine) -> Vec<OverrideRow> {
    engine
        .file_state()
        .overrides()
        .into_iter()
        .map(|(id, line, enabled)| OverrideRow {
            id,
            symbol: engine.registry().symbol(id),
            line,
            enabled,
        })
        .collect()
}

fn print_text(
    pragmas: &[Pragma],
    overrides: &[OverrideRow],
    diagnostics: &[Diagnostic],
    quiet: bool,
) {
    if !quiet {
        for pragma in pragmas {
            match pragma {
                Pragma::Directive {
                    line,
                    keyword,
                    values,
                } => println!("line {line}: {keyword}={}", values.join(",")),
                Pragma::Malformed { line, text } => println!("line {line}: malformed '{text}'"),
            }
        }
        for row in overrides {
            let state = if row.enabled { "enabled" } else { "disabled" };
            println!("  {} ({}) {state} on line {}", row.symbol, row.id, row.line);
        }
    }
    for diag in diagnostics {
        println!("{diag}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintel_lint::ControlScope;

    #[test]
    fn rows_carry_symbols() {
        let mut engine = LintEngine::with_builtin_checkers(Arc::new(DiagnosticSink::new())).unwrap();
        engine.open_module("m", "m.py", Some(10));
        engine
            .disable("W0613", ControlScope::Module, Some(4))
            .unwrap();
        let rows = override_rows(&engine);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].symbol, "unused-argument");
        assert_eq!(rows[0].line, 4);
        assert!(!rows[0].enabled);
    }
}
