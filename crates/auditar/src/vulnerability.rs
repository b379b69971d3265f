//! Vulnerability accumulation for security-flavored runs.
//!
//! A vulnerability entry is appended for every `FAILED` record when a run
//! carries a log. Entries live for the duration of one run and are handed
//! to the report renderers at the end.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// One finding derived from a failed test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    /// Category the failing test belonged to
    pub category: String,
    /// Failing test name
    pub test: String,
    /// Severity from the descriptor
    pub severity: Severity,
    /// Detail message from the failing record
    pub description: String,
    /// Impact statement from the descriptor, if one was declared
    pub impact: Option<String>,
}

impl Vulnerability {
    /// Create a new finding
    #[must_use]
    pub fn new(
        category: impl Into<String>,
        test: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        impact: Option<String>,
    ) -> Self {
        Self {
            category: category.into(),
            test: test.into(),
            severity,
            description: description.into(),
            impact,
        }
    }
}

/// Append-only log of findings for one run
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct VulnerabilityLog {
    entries: Vec<Vulnerability>,
}

impl VulnerabilityLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finding
    pub fn record(&mut self, finding: Vulnerability) {
        self.entries.push(finding);
    }

    /// All findings, in the order they were recorded
    #[must_use]
    pub fn entries(&self) -> &[Vulnerability] {
        &self.entries
    }

    /// Number of findings
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count findings with the given severity
    #[must_use]
    pub fn count_of(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Findings sorted highest severity first, stable within a severity
    #[must_use]
    pub fn by_severity(&self) -> Vec<&Vulnerability> {
        let mut sorted: Vec<&Vulnerability> = self.entries.iter().collect();
        sorted.sort_by_key(|v| v.severity.rank());
        sorted
    }

    pub(crate) fn into_entries(self) -> Vec<Vulnerability> {
        self.entries
    }
}
