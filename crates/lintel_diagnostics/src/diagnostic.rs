//! Fully attributed diagnostic records handed to reporters.

use crate::code::{Category, MessageId};
use crate::confidence::Confidence;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a diagnostic points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Absolute (as given) path of the module file.
    pub abspath: String,
    /// The path with the configured prefix stripped.
    pub path: String,
    /// Dotted module name.
    pub module: String,
    /// Dotted name of the enclosing object, empty at module level.
    pub obj: String,
    /// 1-indexed line.
    pub line: u32,
    /// 0-indexed column.
    pub column: u32,
}

/// A message that passed every suppression check.
///
/// Created once per emitted diagnostic and never modified afterwards; the
/// reporter owns it after hand-off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The numeric id of the message kind.
    pub msg_id: MessageId,
    /// The symbolic name of the message kind.
    pub symbol: String,
    /// The attributed source location.
    pub location: Location,
    /// The rendered message text.
    pub message: String,
    /// The confidence the checker reported.
    pub confidence: Confidence,
}

impl Diagnostic {
    /// Creates a new diagnostic record.
    pub fn new(
        msg_id: MessageId,
        symbol: impl Into<String>,
        location: Location,
        message: impl Into<String>,
        confidence: Confidence,
    ) -> Self {
        Self {
            msg_id,
            symbol: symbol.into(),
            location,
            message: message.into(),
            confidence,
        }
    }

    /// The category of the message kind.
    pub fn category(&self) -> Category {
        self.msg_id.category
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}: {} ({})",
            self.location.path,
            self.location.line,
            self.location.column,
            self.msg_id,
            self.message,
            self.symbol
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Diagnostic {
        Diagnostic::new(
            MessageId::new(Category::Warning, 613),
            "unused-argument",
            Location {
                abspath: "/work/pkg/mod.py".to_string(),
                path: "pkg/mod.py".to_string(),
                module: "pkg.mod".to_string(),
                obj: "Circle.area".to_string(),
                line: 12,
                column: 4,
            },
            "Unused argument 'radius'",
            Confidence::High,
        )
    }

    #[test]
    fn one_line_text_form() {
        assert_eq!(
            sample().to_string(),
            "pkg/mod.py:12:4: W0613: Unused argument 'radius' (unused-argument)"
        );
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"msg_id\":\"W0613\""));
        assert!(json.contains("\"confidence\":\"HIGH\""));
        let back: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
