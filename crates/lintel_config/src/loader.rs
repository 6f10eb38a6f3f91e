//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::LintConfig;
use lintel_diagnostics::Confidence;
use std::path::Path;

/// The configuration file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "lintel.toml";

/// Loads and validates `lintel.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<LintConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<LintConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<LintConfig, ConfigError> {
    let config: LintConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates values that deserialization alone cannot check.
fn validate_config(config: &LintConfig) -> Result<(), ConfigError> {
    for name in &config.messages.confidence {
        if Confidence::from_name(name).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "unknown confidence level '{name}'"
            )));
        }
    }
    for id in config.reports.enable.iter().chain(&config.reports.disable) {
        if !id.to_ascii_lowercase().starts_with("rp") {
            return Err(ConfigError::ValidationError(format!(
                "'{id}' is not a report id"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml = r#"
[messages]
disable = ["all"]
enable = ["W0613", "line-too-long"]
confidence = ["HIGH", "inference"]
porting_mode = true

[reports]
disable = ["RP0001"]

[output]
path_strip_prefix = "/work/"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.messages.disable, vec!["all"]);
        assert_eq!(config.messages.enable.len(), 2);
        assert_eq!(config.messages.confidence, vec!["HIGH", "inference"]);
        assert!(config.messages.porting_mode);
        assert_eq!(config.reports.disable, vec!["RP0001"]);
        assert_eq!(config.output.path_strip_prefix, "/work/");
    }

    #[test]
    fn unknown_confidence_errors() {
        let toml = r#"
[messages]
confidence = ["HIGH", "LOW"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(ref m) if m.contains("LOW")));
    }

    #[test]
    fn non_report_id_errors() {
        let toml = r#"
[reports]
enable = ["W0613"]
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn wrong_type_errors() {
        let toml = r#"
[messages]
disable = 3
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[messages]\ndisable = [\"C0301\"]\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.messages.disable, vec!["C0301"]);
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
