//! Inline `# lintel:` control comments.
//!
//! A pragma applies to the line it appears on:
//!
//! ```text
//! def area(self, radius):  # lintel: disable=unused-argument
//! ```
//!
//! Several `keyword=values` groups may be separated by `;`. Values are
//! comma-separated identifiers.
//!
//! Only a real comment is searched: a `#` inside a quoted string on the same
//! line does not start one. Lines inside triple-quoted strings that span
//! several lines are scanned like code.

use std::sync::LazyLock;

use lintel_source::SourceFile;
use regex::Regex;
use serde::Serialize;

use crate::checkers::master;
use crate::engine::LintEngine;
use crate::error::LintError;
use crate::format::MessageArgs;
use crate::resolve::ControlScope;

static PRAGMA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#.*?\blintel:\s*(?P<body>[^#]*)").expect("pragma pattern is valid")
});

static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<keyword>[A-Za-z][A-Za-z0-9_-]*)\s*=\s*(?P<values>.*?)\s*$")
        .expect("assignment pattern is valid")
});

/// One parsed `keyword=values` group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Pragma {
    /// A well-formed assignment.
    Directive {
        /// 1-indexed line of the comment.
        line: u32,
        /// The keyword, as written.
        keyword: String,
        /// Comma-separated identifiers, trimmed.
        values: Vec<String>,
    },
    /// A group that is not of the form `keyword=values`.
    Malformed {
        /// 1-indexed line of the comment.
        line: u32,
        /// The offending text.
        text: String,
    },
}

/// What a pragma keyword does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Keyword {
    Enable,
    Disable,
    /// An obsolete spelling and its replacement.
    Deprecated(&'static str, bool),
}

impl Keyword {
    fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "enable" => Some(Keyword::Enable),
            "disable" => Some(Keyword::Disable),
            "enable-msg" => Some(Keyword::Deprecated("enable", true)),
            "disable-msg" => Some(Keyword::Deprecated("disable", false)),
            _ => None,
        }
    }

    fn enables(self) -> bool {
        match self {
            Keyword::Enable => true,
            Keyword::Disable => false,
            Keyword::Deprecated(_, enable) => enable,
        }
    }
}

/// Extracts every pragma from `source`, in line order.
pub fn parse_pragmas(source: &SourceFile) -> Vec<Pragma> {
    let mut pragmas = Vec::new();
    for (line, text) in source.lines() {
        let Some(comment) = comment_start(text).map(|at| &text[at..]) else {
            continue;
        };
        let Some(caps) = PRAGMA.captures(comment) else {
            continue;
        };
        let body = caps.name("body").map_or("", |m| m.as_str());
        for group in body.split(';').map(str::trim).filter(|g| !g.is_empty()) {
            pragmas.push(parse_group(line, group));
        }
    }
    pragmas
}

/// Byte offset of the `#` opening the line's comment, skipping quoted text.
fn comment_start(text: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (at, c) in text.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if c == '\\' => escaped = true,
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '#' => return Some(at),
            None if c == '\'' || c == '"' => quote = Some(c),
            None => {}
        }
    }
    None
}

fn parse_group(line: u32, group: &str) -> Pragma {
    match ASSIGNMENT.captures(group) {
        Some(caps) => Pragma::Directive {
            line,
            keyword: caps["keyword"].to_string(),
            values: caps["values"]
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect(),
        },
        None => Pragma::Malformed {
            line,
            text: group.to_string(),
        },
    }
}

impl LintEngine {
    /// Applies every pragma of `source` to the current module.
    ///
    /// Problems with the pragmas themselves are reported as messages rather
    /// than returned as errors.
    pub fn process_pragmas(&mut self, source: &SourceFile) -> Result<(), LintError> {
        for pragma in parse_pragmas(source) {
            match pragma {
                Pragma::Malformed { line, text } => {
                    self.notify(
                        master::BAD_INLINE_OPTION,
                        line,
                        MessageArgs::positional([text]),
                    )?;
                }
                Pragma::Directive {
                    line,
                    keyword,
                    values,
                } => {
                    let Some(kind) = Keyword::parse(&keyword) else {
                        self.notify(
                            master::UNRECOGNIZED_INLINE_OPTION,
                            line,
                            MessageArgs::positional([keyword]),
                        )?;
                        continue;
                    };
                    if let Keyword::Deprecated(replacement, _) = kind {
                        self.notify(
                            master::DEPRECATED_PRAGMA,
                            line,
                            MessageArgs::positional([keyword.as_str(), replacement]),
                        )?;
                    }
                    for value in values {
                        let result = if kind.enables() {
                            self.enable(&value, ControlScope::Module, Some(line))
                        } else {
                            self.disable(&value, ControlScope::Module, Some(line))
                        };
                        match result {
                            Ok(()) => {}
                            Err(LintError::UnknownMessage(_)) => {
                                self.notify(
                                    master::BAD_OPTION_VALUE,
                                    line,
                                    MessageArgs::positional([value]),
                                )?;
                            }
                            Err(err) => return Err(err),
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
