//! Run statistics aggregated from emitted and suppressed messages.

use crate::state::StateScope;
use lintel_diagnostics::Category;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counters updated by the emission pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStatistics {
    by_category: BTreeMap<Category, usize>,
    by_module: BTreeMap<String, BTreeMap<Category, usize>>,
    by_msg: BTreeMap<String, usize>,
    ignored: BTreeMap<StateScope, usize>,
    msg_status: u8,
}

impl RunStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts per-module counters for `module`, all at zero.
    pub fn init_module(&mut self, module: &str) {
        let counts = self.by_module.entry(module.to_string()).or_default();
        for category in Category::ALL {
            counts.entry(category).or_insert(0);
        }
    }

    /// Counts one emitted message.
    pub fn record_emitted(&mut self, category: Category, module: &str, symbol: &str) {
        self.msg_status |= category.status_bit();
        *self.by_category.entry(category).or_insert(0) += 1;
        *self
            .by_module
            .entry(module.to_string())
            .or_default()
            .entry(category)
            .or_insert(0) += 1;
        *self.by_msg.entry(symbol.to_string()).or_insert(0) += 1;
    }

    /// Counts one suppressed message by the layer that suppressed it.
    pub fn record_ignored(&mut self, scope: StateScope) {
        *self.ignored.entry(scope).or_insert(0) += 1;
    }

    /// Emitted messages of `category`.
    pub fn count(&self, category: Category) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }

    /// Emitted messages of `category` in `module`.
    pub fn module_count(&self, module: &str, category: Category) -> usize {
        self.by_module
            .get(module)
            .and_then(|counts| counts.get(&category))
            .copied()
            .unwrap_or(0)
    }

    /// Emitted messages with `symbol`.
    pub fn msg_count(&self, symbol: &str) -> usize {
        self.by_msg.get(symbol).copied().unwrap_or(0)
    }

    /// Messages suppressed by `scope`.
    pub fn ignored_count(&self, scope: StateScope) -> usize {
        self.ignored.get(&scope).copied().unwrap_or(0)
    }

    /// Total emitted messages.
    pub fn total(&self) -> usize {
        self.by_category.values().sum()
    }

    /// Bitwise OR of the status bits of every emitted category.
    pub fn msg_status(&self) -> u8 {
        self.msg_status
    }

    /// Modules with counters, in name order.
    pub fn modules(&self) -> impl Iterator<Item = &str> {
        self.by_module.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitted_counters() {
        let mut stats = RunStatistics::new();
        stats.init_module("pkg.a");
        stats.record_emitted(Category::Warning, "pkg.a", "unused-argument");
        stats.record_emitted(Category::Warning, "pkg.a", "unused-argument");
        stats.record_emitted(Category::Convention, "pkg.b", "line-too-long");

        assert_eq!(stats.count(Category::Warning), 2);
        assert_eq!(stats.module_count("pkg.a", Category::Warning), 2);
        assert_eq!(stats.module_count("pkg.a", Category::Error), 0);
        assert_eq!(stats.module_count("pkg.b", Category::Convention), 1);
        assert_eq!(stats.msg_count("unused-argument"), 2);
        assert_eq!(stats.msg_count("never-emitted"), 0);
        assert_eq!(stats.total(), 3);
        assert_eq!(stats.modules().collect::<Vec<_>>(), vec!["pkg.a", "pkg.b"]);
    }

    #[test]
    fn status_bits_accumulate() {
        let mut stats = RunStatistics::new();
        stats.record_emitted(Category::Info, "m", "locally-disabled");
        assert_eq!(stats.msg_status(), 0);
        stats.record_emitted(Category::Warning, "m", "unused-argument");
        stats.record_emitted(Category::Error, "m", "undefined-variable");
        assert_eq!(stats.msg_status(), 4 | 2);
    }

    #[test]
    fn ignored_by_scope() {
        let mut stats = RunStatistics::new();
        stats.record_ignored(StateScope::Module);
        stats.record_ignored(StateScope::Module);
        stats.record_ignored(StateScope::Confidence);
        assert_eq!(stats.ignored_count(StateScope::Module), 2);
        assert_eq!(stats.ignored_count(StateScope::Config), 0);
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn serializes_for_reports() {
        let mut stats = RunStatistics::new();
        stats.record_emitted(Category::Fatal, "m", "fatal");
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["by_category"]["fatal"], 1);
        assert_eq!(json["msg_status"], 1);
    }
}
