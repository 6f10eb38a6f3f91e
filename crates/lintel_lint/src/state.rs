//! Run-wide suppression state.

use lintel_diagnostics::MessageId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Which layer of suppression state answered an enablement query.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StateScope {
    /// The run-wide state (configuration and run-scope directives).
    Config,
    /// The current module's line overrides or whole-module defaults.
    Module,
    /// The confidence filter.
    Confidence,
}

impl StateScope {
    /// The numeric code of the scope (`0` config, `1` module, `2` confidence).
    pub fn code(self) -> u8 {
        match self {
            StateScope::Config => 0,
            StateScope::Module => 1,
            StateScope::Confidence => 2,
        }
    }
}

/// Explicit run-scope enable/disable decisions keyed by message id.
///
/// Absence of an entry means enabled.
#[derive(Debug, Clone, Default)]
pub struct SuppressionState {
    states: BTreeMap<MessageId, bool>,
}

impl SuppressionState {
    /// Creates an empty state where every kind is enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an explicit decision for `id`.
    pub fn set(&mut self, id: MessageId, enabled: bool) {
        self.states.insert(id, enabled);
    }

    /// The explicit decision for `id`, if any.
    pub fn get(&self, id: MessageId) -> Option<bool> {
        self.states.get(&id).copied()
    }

    /// Whether `id` is enabled at run scope.
    pub fn is_enabled(&self, id: MessageId) -> bool {
        self.get(id).unwrap_or(true)
    }

    /// Ids explicitly enabled, sorted.
    pub fn enabled(&self) -> Vec<MessageId> {
        self.with_status(true)
    }

    /// Ids explicitly disabled, sorted.
    pub fn disabled(&self) -> Vec<MessageId> {
        self.with_status(false)
    }

    fn with_status(&self, wanted: bool) -> Vec<MessageId> {
        self.states
            .iter()
            .filter(|(_, &enabled)| enabled == wanted)
            .map(|(&id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintel_diagnostics::Category;

    #[test]
    fn absent_means_enabled() {
        let state = SuppressionState::new();
        assert!(state.is_enabled(MessageId::new(Category::Warning, 613)));
        assert!(state.enabled().is_empty());
    }

    #[test]
    fn subsets_are_sorted_and_disjoint() {
        let mut state = SuppressionState::new();
        let w = MessageId::new(Category::Warning, 613);
        let c = MessageId::new(Category::Convention, 301);
        let e = MessageId::new(Category::Error, 602);
        state.set(w, false);
        state.set(c, false);
        state.set(e, true);
        assert_eq!(state.disabled(), vec![c, w]);
        assert_eq!(state.enabled(), vec![e]);

        state.set(w, true);
        assert_eq!(state.disabled(), vec![c]);
        assert_eq!(state.enabled(), vec![e, w]);
    }

    #[test]
    fn scope_codes() {
        assert_eq!(StateScope::Config.code(), 0);
        assert_eq!(StateScope::Module.code(), 1);
        assert_eq!(StateScope::Confidence.code(), 2);
    }
}
