//! `%`-style interpolation of message templates.
//!
//! Message templates use printf-style conversions: `%s` (text), `%r`
//! (quoted text), `%d`/`%i` (integer), `%%` (a literal percent sign), and
//! `%(name)s` for named arguments.

use std::collections::BTreeMap;

/// Arguments interpolated into a message template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageArgs {
    /// Consumed left to right by `%s`, `%r`, `%d` and `%i`.
    Positional(Vec<String>),
    /// Looked up by `%(name)s`-style conversions.
    Named(BTreeMap<String, String>),
}

impl MessageArgs {
    /// Builds positional arguments from anything displayable.
    pub fn positional<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        MessageArgs::Positional(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Builds named arguments from `(key, value)` pairs.
    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        MessageArgs::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    /// Returns `true` when there is nothing to interpolate.
    ///
    /// Empty arguments leave the template untouched, `%%` included.
    pub fn is_empty(&self) -> bool {
        match self {
            MessageArgs::Positional(values) => values.is_empty(),
            MessageArgs::Named(values) => values.is_empty(),
        }
    }
}

impl From<Vec<String>> for MessageArgs {
    fn from(values: Vec<String>) -> Self {
        MessageArgs::Positional(values)
    }
}

/// Template/argument mismatches.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// The template has more positional conversions than arguments.
    #[error("not enough arguments for template '{0}'")]
    MissingArgument(String),

    /// Positional arguments were left over after interpolation.
    #[error("not all arguments converted in template '{0}'")]
    TooManyArguments(String),

    /// A `%(name)s` conversion had no matching named argument.
    #[error("no argument named '{0}'")]
    MissingKey(String),

    /// `%d`/`%i` received a value that is not an integer.
    #[error("'{0}' is not a number")]
    NotANumber(String),

    /// The conversion character is not supported.
    #[error("unsupported conversion '%{0}'")]
    UnsupportedConversion(char),

    /// The template ended inside a conversion.
    #[error("incomplete conversion at end of template '{0}'")]
    Truncated(String),
}

/// Interpolates `args` into `template`.
pub fn interpolate(template: &str, args: &MessageArgs) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut positional = match args {
        MessageArgs::Positional(values) => Some(values.iter()),
        MessageArgs::Named(_) => None,
    };
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        let mut conversion = chars
            .next()
            .ok_or_else(|| FormatError::Truncated(template.to_string()))?;
        if conversion == '%' {
            out.push('%');
            continue;
        }

        let value = if conversion == '(' {
            let mut key = String::new();
            loop {
                match chars.next() {
                    Some(')') => break,
                    Some(k) => key.push(k),
                    None => return Err(FormatError::Truncated(template.to_string())),
                }
            }
            conversion = chars
                .next()
                .ok_or_else(|| FormatError::Truncated(template.to_string()))?;
            match args {
                MessageArgs::Named(values) => values
                    .get(&key)
                    .ok_or_else(|| FormatError::MissingKey(key.clone()))?,
                MessageArgs::Positional(_) => return Err(FormatError::MissingKey(key)),
            }
        } else {
            positional
                .as_mut()
                .and_then(Iterator::next)
                .ok_or_else(|| FormatError::MissingArgument(template.to_string()))?
        };

        match conversion {
            's' => out.push_str(value),
            'r' => out.push_str(&quote(value)),
            'd' | 'i' => {
                let n: i64 = value
                    .trim()
                    .parse()
                    .map_err(|_| FormatError::NotANumber(value.clone()))?;
                out.push_str(&n.to_string());
            }
            other => return Err(FormatError::UnsupportedConversion(other)),
        }
    }

    if positional.is_some_and(|mut rest| rest.next().is_some()) {
        return Err(FormatError::TooManyArguments(template.to_string()));
    }
    Ok(out)
}

/// Renders a value the way `%r` shows a string: single-quoted unless the
/// value itself contains a single quote and no double quote.
fn quote(value: &str) -> String {
    if value.contains('\'') && !value.contains('"') {
        format!("\"{value}\"")
    } else {
        format!("'{}'", value.replace('\'', "\\'"))
    }
}
