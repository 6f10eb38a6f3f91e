//! Per-module line overrides and suppression bookkeeping.

use crate::state::StateScope;
use lintel_diagnostics::MessageId;
use std::collections::{BTreeMap, BTreeSet};

/// Where a module-table answer came from.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ModuleStatus {
    /// Whether the kind is enabled.
    pub enabled: bool,
    /// The line of the override that answered, `None` for a whole-module
    /// default.
    pub origin: Option<u32>,
}

/// Line-level and module-level enablement state for one module.
///
/// A fresh `FileState` is created for every module, so overrides never
/// carry over from one module to the next.
#[derive(Debug, Clone, Default)]
pub struct FileState {
    module_name: String,
    lines: BTreeMap<MessageId, BTreeMap<u32, bool>>,
    defaults: BTreeMap<MessageId, bool>,
    effective_max_line: Option<u32>,
    /// Suppressed hits keyed by the override that suppressed them.
    ignored: BTreeMap<(MessageId, Option<u32>), BTreeSet<u32>>,
}

impl FileState {
    /// Creates the state of a freshly opened module.
    pub fn new(module_name: impl Into<String>, effective_max_line: Option<u32>) -> Self {
        Self {
            module_name: module_name.into(),
            effective_max_line,
            ..Self::default()
        }
    }

    /// The module this state belongs to.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The last line that carries code, if the module has any.
    pub fn effective_max_line(&self) -> Option<u32> {
        self.effective_max_line
    }

    /// Sets a per-line override, or the whole-module default when `line`
    /// is `None`.
    pub fn set_msg_status(&mut self, id: MessageId, line: Option<u32>, enabled: bool) {
        match line {
            Some(line) => {
                self.lines.entry(id).or_default().insert(line, enabled);
            }
            None => {
                self.defaults.insert(id, enabled);
            }
        }
    }

    /// The override set at exactly `line`.
    pub fn line_status(&self, id: MessageId, line: u32) -> Option<bool> {
        self.lines.get(&id)?.get(&line).copied()
    }

    /// The nearest override at or before `line`, with its line.
    pub fn preceding_status(&self, id: MessageId, line: u32) -> Option<(u32, bool)> {
        self.lines
            .get(&id)?
            .range(..=line)
            .next_back()
            .map(|(&l, &enabled)| (l, enabled))
    }

    /// The whole-module default for `id`.
    pub fn module_status(&self, id: MessageId) -> Option<bool> {
        self.defaults.get(&id).copied()
    }

    /// Resolves `id` at `line` against this module's table.
    ///
    /// Exact override first. Past the effective max line the nearest
    /// preceding override applies. The whole-module default answers only
    /// when no per-line override does. An unknown max line disables the
    /// fallback.
    pub fn status_at(&self, id: MessageId, line: u32) -> Option<ModuleStatus> {
        if let Some(enabled) = self.line_status(id, line) {
            return Some(ModuleStatus {
                enabled,
                origin: Some(line),
            });
        }
        if self.effective_max_line.is_some_and(|max| line > max) {
            if let Some((origin, enabled)) = self.preceding_status(id, line) {
                return Some(ModuleStatus {
                    enabled,
                    origin: Some(origin),
                });
            }
        }
        self.module_status(id).map(|enabled| ModuleStatus {
            enabled,
            origin: None,
        })
    }

    /// Records a suppressed hit when the module table was responsible.
    pub fn handle_ignored_message(&mut self, scope: StateScope, id: MessageId, line: Option<u32>) {
        if scope != StateScope::Module {
            return;
        }
        let Some(line) = line else { return };
        if let Some(status) = self.status_at(id, line) {
            self.ignored
                .entry((id, status.origin))
                .or_default()
                .insert(line);
        }
    }

    /// Every suppressed hit as `(id, origin line, hit line)`.
    pub fn suppressed_hits(&self) -> Vec<(MessageId, Option<u32>, u32)> {
        self.ignored
            .iter()
            .flat_map(|(&(id, origin), hits)| hits.iter().map(move |&line| (id, origin, line)))
            .collect()
    }

    /// Per-line disables that never suppressed anything.
    pub fn useless_suppressions(&self) -> Vec<(MessageId, u32)> {
        self.lines
            .iter()
            .flat_map(|(&id, lines)| {
                lines
                    .iter()
                    .filter(|(_, &enabled)| !enabled)
                    .map(move |(&line, _)| (id, line))
            })
            .filter(|key| !self.ignored.contains_key(&(key.0, Some(key.1))))
            .collect()
    }

    /// Every per-line override as `(id, line, enabled)`, sorted.
    pub fn overrides(&self) -> Vec<(MessageId, u32, bool)> {
        self.lines
            .iter()
            .flat_map(|(&id, lines)| lines.iter().map(move |(&line, &enabled)| (id, line, enabled)))
            .collect()
    }

    /// Every whole-module default as `(id, enabled)`, sorted.
    pub fn module_defaults(&self) -> Vec<(MessageId, bool)> {
        self.defaults.iter().map(|(&id, &enabled)| (id, enabled)).collect()
    }
}
