//! Ordering of run-scope message control from configuration and overrides.

use crate::types::LintConfig;
use std::fmt;

/// Whether a directive turns messages on or off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlAction {
    /// Re-enable the targeted messages.
    Enable,
    /// Suppress the targeted messages.
    Disable,
}

impl ControlAction {
    /// Returns `true` for [`ControlAction::Enable`].
    pub fn is_enable(self) -> bool {
        self == ControlAction::Enable
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlAction::Enable => f.write_str("enable"),
            ControlAction::Disable => f.write_str("disable"),
        }
    }
}

/// One run-scope enable/disable instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlDirective {
    /// What to do.
    pub action: ControlAction,
    /// Any identifier the engine resolves (symbol, id, category, checker, `all`).
    pub identifier: String,
}

impl ControlDirective {
    /// An enable directive.
    pub fn enable(identifier: impl Into<String>) -> Self {
        Self {
            action: ControlAction::Enable,
            identifier: identifier.into(),
        }
    }

    /// A disable directive.
    pub fn disable(identifier: impl Into<String>) -> Self {
        Self {
            action: ControlAction::Disable,
            identifier: identifier.into(),
        }
    }
}

/// Builds the ordered run-scope directive list.
///
/// Config disables come first and config enables second, so the common
/// `disable = ["all"]`, `enable = [...]` pattern behaves as an allow-list.
/// Command-line overrides follow in the same order and therefore win over
/// the file.
pub fn control_directives(
    config: &LintConfig,
    cli_enable: &[String],
    cli_disable: &[String],
) -> Vec<ControlDirective> {
    let file = config
        .messages
        .disable
        .iter()
        .map(ControlDirective::disable)
        .chain(config.messages.enable.iter().map(ControlDirective::enable));
    let cli = cli_disable
        .iter()
        .map(ControlDirective::disable)
        .chain(cli_enable.iter().map(ControlDirective::enable));
    file.chain(cli).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn ordering_file_then_cli() {
        let config = load_config_from_str(
            r#"
[messages]
enable = ["W0613"]
disable = ["all"]
"#,
        )
        .unwrap();
        let directives = control_directives(
            &config,
            &["C0301".to_string()],
            &["unused-argument".to_string()],
        );
        assert_eq!(
            directives,
            vec![
                ControlDirective::disable("all"),
                ControlDirective::enable("W0613"),
                ControlDirective::disable("unused-argument"),
                ControlDirective::enable("C0301"),
            ]
        );
    }

    #[test]
    fn empty_config_no_directives() {
        let config = LintConfig::default();
        assert!(control_directives(&config, &[], &[]).is_empty());
    }

    #[test]
    fn action_display() {
        assert_eq!(ControlAction::Enable.to_string(), "enable");
        assert!(!ControlAction::Disable.is_enable());
    }
}
