//! Shared setup: configuration discovery and engine construction.

use std::path::Path;
use std::sync::Arc;

use lintel_config::{LintConfig, CONFIG_FILE_NAME};
use lintel_diagnostics::DiagnosticSink;
use lintel_lint::LintEngine;
use lintel_source::SourceFile;
use tracing::debug;

use crate::GlobalArgs;

/// Loads the configuration named by `--config`, else `lintel.toml` in the
/// current directory, else the defaults.
pub fn load_config(global: &GlobalArgs) -> Result<LintConfig, Box<dyn std::error::Error>> {
    if let Some(path) = &global.config {
        return Ok(lintel_config::load_config_file(Path::new(path))?);
    }
    let cwd = std::env::current_dir()?;
    if cwd.join(CONFIG_FILE_NAME).is_file() {
        return Ok(lintel_config::load_config(&cwd)?);
    }
    Ok(LintConfig::default())
}

/// Builds an engine with the built-in catalogs, the configuration, and the
/// command-line overrides applied.
pub fn build_engine(
    global: &GlobalArgs,
    sink: Arc<DiagnosticSink>,
) -> Result<LintEngine, Box<dyn std::error::Error>> {
    let config = load_config(global)?;
    debug!(
        path = ?global.config,
        disabled = config.messages.disable.len(),
        enabled = config.messages.enable.len(),
        "loaded configuration"
    );
    let mut engine = LintEngine::with_builtin_checkers(sink)?;
    engine.apply_config(&config, &global.enable, &global.disable)?;
    Ok(engine)
}

/// Loads `file` and makes it the engine's current module with its pragmas
/// applied.
pub fn open_source(
    engine: &mut LintEngine,
    file: &str,
) -> Result<SourceFile, Box<dyn std::error::Error>> {
    let source = SourceFile::load(Path::new(file))
        .map_err(|e| format!("cannot read '{file}': {e}"))?;
    engine.open_module(
        source.module_name.clone(),
        source.path.display().to_string(),
        source.effective_max_line(),
    );
    engine.process_pragmas(&source)?;
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            config,
            enable: Vec::new(),
            disable: vec!["line-too-long".to_string()],
        }
    }

    #[test]
    fn explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[messages]\ndisable = [\"W\"]\n").unwrap();
        let global = global(Some(path.display().to_string()));
        let engine = build_engine(&global, Arc::new(DiagnosticSink::new())).unwrap();
        assert!(!engine.is_enabled("unused-argument", None, None));
        assert!(!engine.is_enabled("line-too-long", None, None));
        assert!(engine.is_enabled("undefined-variable", None, None));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let global = global(Some("/nonexistent/lintel.toml".to_string()));
        assert!(build_engine(&global, Arc::new(DiagnosticSink::new())).is_err());
    }

    #[test]
    fn open_source_applies_pragmas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.py");
        std::fs::write(&path, "x = 1  # lintel: disable=unused-variable\n").unwrap();
        let sink = Arc::new(DiagnosticSink::new());
        let mut engine = LintEngine::with_builtin_checkers(sink.clone()).unwrap();
        let source = open_source(&mut engine, &path.display().to_string()).unwrap();
        assert_eq!(source.module_name, "app");
        assert_eq!(engine.current_module(), "app");
        assert!(!engine.is_enabled("unused-variable", Some(1), None));
        assert_eq!(sink.take_all().len(), 1);
    }
}
