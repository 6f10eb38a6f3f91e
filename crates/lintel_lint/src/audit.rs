//! Log of messages controlled by numeric id instead of symbolic name.

use lintel_diagnostics::MessageId;
use serde::Serialize;
use std::sync::{Mutex, PoisonError};

/// One enable/disable directive that named a kind by its numeric id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ManagedMessage {
    /// The module that was current, `None` outside any module.
    pub module: Option<String>,
    /// The numeric id used.
    pub msg_id: MessageId,
    /// The symbol that should have been used instead.
    pub symbol: String,
    /// The directive's line, if it had one.
    pub line: Option<u32>,
    /// `true` for a disable, `false` for an enable.
    pub disabled: bool,
}

/// Shared, insertion-ordered audit log.
///
/// Entries are informational only and never influence enablement.
#[derive(Debug, Default)]
pub struct ManagedMessageLog {
    entries: Mutex<Vec<ManagedMessage>>,
}

impl ManagedMessageLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Appends an entry.
    pub fn record(&self, entry: ManagedMessage) {
        self.lock().push(entry);
    }

    /// A snapshot of every entry in insertion order.
    pub fn list(&self) -> Vec<ManagedMessage> {
        self.lock().clone()
    }

    /// A snapshot of the entries recorded while `module` was current.
    pub fn for_module(&self, module: &str) -> Vec<ManagedMessage> {
        self.lock()
            .iter()
            .filter(|e| e.module.as_deref() == Some(module))
            .cloned()
            .collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ManagedMessage>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
