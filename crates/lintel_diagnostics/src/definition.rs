//! Static definitions of the messages a checker can emit.

use crate::code::{Category, MessageId};
use serde::{Deserialize, Serialize};

/// Whether a message is tied to a raw source line or to a syntax node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningScope {
    /// Emitted by raw/token checkers, which must supply an explicit line.
    Line,
    /// Emitted by tree checkers, which must supply the offending node.
    Node,
}

/// One kind of finding a checker can report.
///
/// Definitions are immutable once registered. Renamed messages keep their
/// previous ids and symbols in `old_names`, so directives written against the
/// old spelling keep working.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDefinition {
    /// The stable numeric id.
    pub id: MessageId,
    /// The symbolic name, e.g. `unused-argument`.
    pub symbol: String,
    /// The message template, with `%s`-style placeholders.
    pub msg: String,
    /// A longer description for listings.
    pub description: String,
    /// The emission scope contract.
    pub scope: WarningScope,
    /// Previous `(id, symbol)` pairs this message was known by.
    pub old_names: Vec<(MessageId, String)>,
    /// The name of the checker that owns the message.
    pub checker: String,
}

impl MessageDefinition {
    /// Creates a node-scoped definition with no owner yet.
    pub fn new(
        id: MessageId,
        symbol: impl Into<String>,
        msg: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            msg: msg.into(),
            description: description.into(),
            scope: WarningScope::Node,
            old_names: Vec::new(),
            checker: String::new(),
        }
    }

    /// Sets the emission scope.
    pub fn with_scope(mut self, scope: WarningScope) -> Self {
        self.scope = scope;
        self
    }

    /// Records a previous id/symbol pair for this message.
    pub fn with_old_name(mut self, id: MessageId, symbol: impl Into<String>) -> Self {
        self.old_names.push((id, symbol.into()));
        self
    }

    /// Sets the owning checker.
    pub fn owned_by(mut self, checker: impl Into<String>) -> Self {
        self.checker = checker.into();
        self
    }

    /// The category of this message.
    pub fn category(&self) -> Category {
        self.id.category
    }
}
