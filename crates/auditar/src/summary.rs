//! Run-level counter accumulation.
//!
//! One `RunSummary` is shared across every category in a run. It is created
//! zeroed, mutated by exactly one `run_category` call at a time under the
//! sequential model, and read once at report time. Counters never decrement
//! and are never reset mid-run.

use crate::record::TestStatus;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// Cross-category counters for one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests completed, passed or failed
    pub total_tests: u64,
    /// Tests that passed
    pub passed_tests: u64,
    /// Tests that failed (including errored and timed-out checks)
    pub failed_tests: u64,
    /// Failed tests with critical severity
    pub critical_issues: u64,
    /// Failed tests with high severity
    pub high_issues: u64,
}

impl RunSummary {
    /// Create a zeroed summary
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one completed test
    ///
    /// `total_tests` increments unconditionally; exactly one of
    /// `passed_tests`/`failed_tests` increments; the issue counters increment
    /// only for failed critical/high tests.
    pub(crate) fn record(&mut self, status: TestStatus, severity: Severity) {
        self.total_tests += 1;
        if status.is_passed() {
            self.passed_tests += 1;
        } else {
            self.failed_tests += 1;
            if severity.is_critical() {
                self.critical_issues += 1;
            } else if severity.is_high() {
                self.high_issues += 1;
            }
        }
    }

    /// Check if every test in the run passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed_tests == 0
    }

    /// Get pass rate (0.0 to 1.0); an empty run counts as passing
    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        if self.total_tests == 0 {
            return 1.0;
        }
        self.passed_tests as f64 / self.total_tests as f64
    }

    /// Counter consistency: `total == passed + failed`
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.total_tests == self.passed_tests + self.failed_tests
    }
}
