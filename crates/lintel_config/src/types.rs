//! Configuration types deserialized from `lintel.toml`.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// The top-level run configuration parsed from `lintel.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LintConfig {
    /// Message enablement and confidence filtering.
    #[serde(default)]
    pub messages: MessagesConfig,
    /// Report enablement.
    #[serde(default)]
    pub reports: ReportsConfig,
    /// Output attribution settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Run-scope message control.
///
/// `enable` and `disable` accept message symbols, numeric ids, old names,
/// category letters or names, checker names, and `all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessagesConfig {
    /// Identifiers to enable.
    #[serde(default, deserialize_with = "deserialize_identifier_list")]
    pub enable: Vec<String>,
    /// Identifiers to disable.
    #[serde(default, deserialize_with = "deserialize_identifier_list")]
    pub disable: Vec<String>,
    /// Confidence levels to show. Empty means no filtering.
    #[serde(default)]
    pub confidence: Vec<String>,
    /// Whether the opt-in porting checker was explicitly requested.
    #[serde(default)]
    pub porting_mode: bool,
}

/// Report enablement, keyed by report id (`RP0001`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReportsConfig {
    /// Report ids to enable.
    #[serde(default, deserialize_with = "deserialize_identifier_list")]
    pub enable: Vec<String>,
    /// Report ids to disable.
    #[serde(default, deserialize_with = "deserialize_identifier_list")]
    pub disable: Vec<String>,
}

/// Output attribution settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Prefix stripped once from the start of every reported path.
    #[serde(default)]
    pub path_strip_prefix: String,
}

/// Deserializes an identifier list given either as a list of strings or as a
/// single comma-separated string.
///
/// Allows both `disable = ["C0301", "W0613"]` and `disable = "C0301, W0613"`.
/// Blank entries are dropped.
fn deserialize_identifier_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdentifierList;

    impl<'de> Visitor<'de> for IdentifierList {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            formatter.write_str("a comma-separated string or a list of strings")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(split_identifiers(v).collect())
        }

        fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut vec = Vec::new();
            while let Some(val) = seq.next_element::<String>()? {
                vec.extend(split_identifiers(&val));
            }
            Ok(vec)
        }
    }

    deserializer.deserialize_any(IdentifierList)
}

/// Splits a comma-separated identifier string, trimming blanks.
pub fn split_identifiers(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn identifier_list_from_string() {
        let config = load_config_from_str(
            r#"
[messages]
disable = "C0301, unused-argument,,"
"#,
        )
        .unwrap();
        assert_eq!(config.messages.disable, vec!["C0301", "unused-argument"]);
    }

    #[test]
    fn identifier_list_from_array() {
        let config = load_config_from_str(
            r#"
[messages]
enable = ["W0613", "C0301,line-too-long"]
"#,
        )
        .unwrap();
        assert_eq!(
            config.messages.enable,
            vec!["W0613", "C0301", "line-too-long"]
        );
    }

    #[test]
    fn defaults_are_empty() {
        let config = load_config_from_str("").unwrap();
        assert!(config.messages.enable.is_empty());
        assert!(config.messages.disable.is_empty());
        assert!(config.messages.confidence.is_empty());
        assert!(!config.messages.porting_mode);
        assert!(config.output.path_strip_prefix.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut config = LintConfig::default();
        config.messages.disable = vec!["line-too-long".to_string()];
        config.reports.enable = vec!["RP0001".to_string()];
        let text = toml::to_string(&config).unwrap();
        let parsed = load_config_from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
