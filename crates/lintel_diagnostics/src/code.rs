//! Message ids with category prefixes for structured message identification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of a message, determining its prefix letter.
///
/// Declaration order follows the prefix letters alphabetically, so the derived
/// ordering sorts [`MessageId`]s the same way their rendered strings sort.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Coding-standard violations, prefixed with `C`.
    Convention,
    /// Probable bugs, prefixed with `E`.
    Error,
    /// Errors that stopped further processing, prefixed with `F`.
    Fatal,
    /// Informational messages, prefixed with `I`.
    Info,
    /// Refactoring suggestions, prefixed with `R`.
    Refactor,
    /// Stylistic problems or minor issues, prefixed with `W`.
    Warning,
}

impl Category {
    /// Every category, in the order blanket directives visit them.
    pub const ALL: [Category; 6] = [
        Category::Info,
        Category::Convention,
        Category::Refactor,
        Category::Warning,
        Category::Error,
        Category::Fatal,
    ];

    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Convention => 'C',
            Category::Error => 'E',
            Category::Fatal => 'F',
            Category::Info => 'I',
            Category::Refactor => 'R',
            Category::Warning => 'W',
        }
    }

    /// Returns the long lowercase name (`"warning"`, `"fatal"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Category::Convention => "convention",
            Category::Error => "error",
            Category::Fatal => "fatal",
            Category::Info => "info",
            Category::Refactor => "refactor",
            Category::Warning => "warning",
        }
    }

    /// Looks a category up by its prefix letter (case-insensitive).
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_uppercase() {
            'C' => Some(Category::Convention),
            'E' => Some(Category::Error),
            'F' => Some(Category::Fatal),
            'I' => Some(Category::Info),
            'R' => Some(Category::Refactor),
            'W' => Some(Category::Warning),
            _ => None,
        }
    }

    /// Interprets a directive identifier as a category.
    ///
    /// Accepts the prefix letter or the long name, case-insensitively.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let mut chars = identifier.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_prefix(c);
        }
        Self::ALL
            .into_iter()
            .find(|cat| cat.name().eq_ignore_ascii_case(identifier))
    }

    /// The bit this category contributes to a run's exit status.
    pub fn status_bit(self) -> u8 {
        match self {
            Category::Info => 0,
            Category::Fatal => 1,
            Category::Error => 2,
            Category::Warning => 4,
            Category::Refactor => 8,
            Category::Convention => 16,
        }
    }

    /// Returns `true` if messages of this category skip the line/node
    /// scope contract when emitted.
    pub fn is_scope_exempt(self) -> bool {
        matches!(self, Category::Fatal | Category::Refactor)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stable numeric message id: a category prefix and a four-digit number.
///
/// Displayed as e.g. `W0613` or `C0301`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MessageId {
    /// The category of this message.
    pub category: Category,
    /// The numeric part, `0..=9999`.
    pub number: u16,
}

impl MessageId {
    /// Creates a new message id.
    pub fn new(category: Category, number: u16) -> Self {
        debug_assert!(number <= 9999, "message numbers have four digits");
        Self { category, number }
    }

    /// Returns `true` if `text` has the shape of a numeric message id.
    pub fn looks_like(text: &str) -> bool {
        text.parse::<MessageId>().is_ok()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.category.prefix(), self.number)
    }
}

/// Error returned when a string is not a well-formed message id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a message id (expected a category letter and four digits)")]
pub struct ParseMessageIdError(pub String);

impl FromStr for MessageId {
    type Err = ParseMessageIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMessageIdError(s.to_string());
        let mut chars = s.chars();
        let category = chars
            .next()
            .and_then(Category::from_prefix)
            .ok_or_else(err)?;
        let digits = chars.as_str();
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let number = digits.parse().map_err(|_| err())?;
        Ok(Self { category, number })
    }
}

impl TryFrom<String> for MessageId {
    type Error = ParseMessageIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MessageId> for String {
    fn from(id: MessageId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_prefixes() {
        assert_eq!(Category::Convention.prefix(), 'C');
        assert_eq!(Category::Error.prefix(), 'E');
        assert_eq!(Category::Fatal.prefix(), 'F');
        assert_eq!(Category::Info.prefix(), 'I');
        assert_eq!(Category::Refactor.prefix(), 'R');
        assert_eq!(Category::Warning.prefix(), 'W');
    }

    #[test]
    fn category_from_identifier() {
        assert_eq!(Category::from_identifier("W"), Some(Category::Warning));
        assert_eq!(Category::from_identifier("c"), Some(Category::Convention));
        assert_eq!(Category::from_identifier("warning"), Some(Category::Warning));
        assert_eq!(Category::from_identifier("REFACTOR"), Some(Category::Refactor));
        assert_eq!(Category::from_identifier("X"), None);
        assert_eq!(Category::from_identifier("W0613"), None);
        assert_eq!(Category::from_identifier(""), None);
    }

    #[test]
    fn scope_exempt_categories() {
        assert!(Category::Fatal.is_scope_exempt());
        assert!(Category::Refactor.is_scope_exempt());
        assert!(!Category::Warning.is_scope_exempt());
        assert!(!Category::Info.is_scope_exempt());
    }

    #[test]
    fn display_format() {
        let code = MessageId::new(Category::Warning, 613);
        assert_eq!(format!("{code}"), "W0613");

        let code = MessageId::new(Category::Info, 11);
        assert_eq!(format!("{code}"), "I0011");
    }

    #[test]
    fn parse_is_case_insensitive_on_prefix() {
        let id: MessageId = "w0613".parse().unwrap();
        assert_eq!(id, MessageId::new(Category::Warning, 613));
        assert!("W613".parse::<MessageId>().is_err());
        assert!("X0613".parse::<MessageId>().is_err());
        assert!("W06a3".parse::<MessageId>().is_err());
        assert!("unused-argument".parse::<MessageId>().is_err());
    }

    #[test]
    fn ordering_matches_string_order() {
        let mut ids = vec![
            MessageId::new(Category::Warning, 613),
            MessageId::new(Category::Convention, 301),
            MessageId::new(Category::Error, 1601),
            MessageId::new(Category::Info, 11),
            MessageId::new(Category::Error, 12),
        ];
        ids.sort();
        let rendered: Vec<String> = ids.iter().map(ToString::to_string).collect();
        let mut by_string = rendered.clone();
        by_string.sort();
        assert_eq!(rendered, by_string);
    }

    #[test]
    fn serde_uses_rendered_form() {
        let code = MessageId::new(Category::Error, 1601);
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"E1601\"");
        let back: MessageId = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }
}
