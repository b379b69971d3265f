//! Per-test records and per-category results.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// Terminal status of one executed test
///
/// A test moves `PENDING -> RUNNING -> {PASSED, FAILED}`; only the terminal
/// states are recorded. Each test runs exactly once, no retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    /// Check completed and reported success
    Passed,
    /// Check reported failure, errored, or timed out
    Failed,
}

impl TestStatus {
    /// Check if status is passing
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Check if status is failing
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Record of one completed test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    /// Test name
    pub name: String,
    /// Terminal status
    pub status: TestStatus,
    /// Severity fixed by the descriptor
    pub severity: Severity,
    /// Detail message from the outcome, or `ERROR - <message>` on check error
    pub details: String,
    /// Supporting evidence, if the check supplied any
    pub evidence: Option<String>,
    /// Wall-clock duration of the check
    pub duration: Duration,
    /// Timestamp when the test completed
    pub timestamp: SystemTime,
}

impl TestRecord {
    /// Create a passing record
    #[must_use]
    pub fn passed(name: impl Into<String>, severity: Severity, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Passed,
            severity,
            details: details.into(),
            evidence: None,
            duration: Duration::ZERO,
            timestamp: SystemTime::now(),
        }
    }

    /// Create a failing record
    #[must_use]
    pub fn failed(name: impl Into<String>, severity: Severity, details: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: TestStatus::Failed,
            severity,
            details: details.into(),
            evidence: None,
            duration: Duration::ZERO,
            timestamp: SystemTime::now(),
        }
    }

    /// Attach evidence
    #[must_use]
    pub fn with_evidence(mut self, evidence: Option<String>) -> Self {
        self.evidence = evidence;
        self
    }

    /// Set the measured duration
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Finalized results of one category run
///
/// `tests` preserves descriptor declaration order, and
/// `passed_count + failed_count == tests.len()` holds after every insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category name
    pub category: String,
    /// Records in declaration order
    pub tests: Vec<TestRecord>,
    /// Number of passing records
    pub passed_count: usize,
    /// Number of failing records
    pub failed_count: usize,
}

impl CategoryResult {
    /// Create an empty result for a category
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            tests: Vec::new(),
            passed_count: 0,
            failed_count: 0,
        }
    }

    /// Append a record, bumping exactly one leaf counter
    pub(crate) fn push(&mut self, record: TestRecord) {
        if record.status.is_passed() {
            self.passed_count += 1;
        } else {
            self.failed_count += 1;
        }
        self.tests.push(record);
    }

    /// Total number of recorded tests
    #[must_use]
    pub fn total(&self) -> usize {
        self.tests.len()
    }

    /// Check if all tests in this category passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed_count == 0
    }

    /// Get the failing records
    #[must_use]
    pub fn failures(&self) -> Vec<&TestRecord> {
        self.tests
            .iter()
            .filter(|r| r.status.is_failed())
            .collect()
    }
}
