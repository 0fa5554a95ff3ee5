//! The aggregate outcome of one or more runs of an initialized suite.

use chrono::Local;

use crate::ledger::AssertList;

/// Suite-level run report.
///
/// Counters are additive across runs of the same initialized suite; only
/// re-initialization clears them. The engine hands out shared references
/// once a run has completed, so all fields are public for reading.
#[derive(Debug, Clone)]
pub struct Report {
    /// Name of the suite this report covers.
    pub name: &'static str,
    /// Date stamp taken when the suite was initialized.
    pub date: String,
    /// Time stamp taken when the suite was initialized.
    pub time: String,
    /// Cases presented to the run loop, summed over every run.
    pub total: u32,
    /// Cases skipped as disabled, summed over every run.
    pub disabled: u32,
    /// Cases actually executed, summed over every run.
    pub executed: u32,
    /// Executed cases that finished in Pass.
    pub passed: u32,
    /// Executed cases that finished in any other state.
    pub failed: u32,
    /// Locations of passing assertions, in order.
    pub pass_records: AssertList,
    /// Locations of failing assertions, in order.
    pub fail_records: AssertList,
}

impl Report {
    pub const fn new() -> Self {
        Self {
            name: "",
            date: String::new(),
            time: String::new(),
            total: 0,
            disabled: 0,
            executed: 0,
            passed: 0,
            failed: 0,
            pass_records: AssertList::new(),
            fail_records: AssertList::new(),
        }
    }

    /// True when every case accounted for either ran and passed or was
    /// disabled. The counter identities are checked in full rather than
    /// trusting any single one.
    pub fn all_passed(&self) -> bool {
        self.total != 0
            && self.total == self.disabled + self.executed
            && self.executed == self.passed
            && self.failed == 0
    }

    /// Zero every counter and both ledgers, then stamp the suite name and
    /// the moment of initialization.
    pub(crate) fn clear_for(&mut self, name: &'static str) {
        let now = Local::now();
        *self = Report::new();
        self.name = name;
        self.date = now.format("%b %e %Y").to_string();
        self.time = now.format("%H:%M:%S").to_string();
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
