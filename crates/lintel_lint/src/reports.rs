//! Report enablement toggles.

use std::collections::BTreeMap;

/// Whether `identifier` names a report (`RP` prefix, any case).
pub fn is_report_id(identifier: &str) -> bool {
    identifier
        .get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("rp"))
}

/// Per-report enable/disable switches. Reports are enabled unless switched off.
#[derive(Debug, Clone, Default)]
pub struct ReportState {
    toggles: BTreeMap<String, bool>,
}

impl ReportState {
    /// Creates a state with every report enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches report `id` on or off.
    pub fn set(&mut self, id: &str, enabled: bool) {
        self.toggles.insert(id.to_ascii_uppercase(), enabled);
    }

    /// Whether report `id` is enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.toggles
            .get(&id.to_ascii_uppercase())
            .copied()
            .unwrap_or(true)
    }

    /// Report ids switched off, sorted.
    pub fn disabled(&self) -> Vec<&str> {
        self.toggles
            .iter()
            .filter(|(_, &enabled)| !enabled)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_report_ids() {
        assert!(is_report_id("RP0001"));
        assert!(is_report_id("rp0401"));
        assert!(!is_report_id("R0801"));
        assert!(!is_report_id("r"));
    }

    #[test]
    fn toggles_are_case_insensitive() {
        let mut reports = ReportState::new();
        assert!(reports.is_enabled("RP0001"));
        reports.set("rp0001", false);
        assert!(!reports.is_enabled("RP0001"));
        assert_eq!(reports.disabled(), vec!["RP0001"]);
        reports.set("RP0001", true);
        assert!(reports.is_enabled("rp0001"));
    }
}
