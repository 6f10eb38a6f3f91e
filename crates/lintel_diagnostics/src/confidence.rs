//! Confidence levels attached to reported messages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How certain a checker is about a finding.
///
/// Filterable per run independently of message enablement.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    /// No false positive possible.
    High,
    /// Warning based on inference result.
    Inference,
    /// Warning based on inference with failures.
    InferenceFailure,
    /// Warning without any associated confidence level.
    #[default]
    Undefined,
}

impl Confidence {
    /// Every confidence level.
    pub const ALL: [Confidence; 4] = [
        Confidence::High,
        Confidence::Inference,
        Confidence::InferenceFailure,
        Confidence::Undefined,
    ];

    /// The name used in configuration and output (`"HIGH"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Inference => "INFERENCE",
            Confidence::InferenceFailure => "INFERENCE_FAILURE",
            Confidence::Undefined => "UNDEFINED",
        }
    }

    /// A one-line description of the level.
    pub fn description(self) -> &'static str {
        match self {
            Confidence::High => "No false positive possible.",
            Confidence::Inference => "Warning based on inference result.",
            Confidence::InferenceFailure => "Warning based on inference with failures.",
            Confidence::Undefined => "Warning without any associated confidence level.",
        }
    }

    /// Looks a level up by name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for level in Confidence::ALL {
            assert_eq!(Confidence::from_name(level.name()), Some(level));
        }
        assert_eq!(Confidence::from_name("inference_failure"), Some(Confidence::InferenceFailure));
        assert_eq!(Confidence::from_name("LOW"), None);
    }

    #[test]
    fn default_is_undefined() {
        assert_eq!(Confidence::default(), Confidence::Undefined);
    }

    #[test]
    fn serde_uses_names() {
        let json = serde_json::to_string(&Confidence::InferenceFailure).unwrap();
        assert_eq!(json, "\"INFERENCE_FAILURE\"");
    }
}
