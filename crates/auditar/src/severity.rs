//! Severity classification for audit tests.
//!
//! Severity is a property of the descriptor, fixed before the run; it is
//! never inferred from a check's outcome. The runner only routes
//! already-known severities into the run-level issue counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed severity classification attached to a test descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Exploitable or data-loss class issue; tallied in `critical_issues`
    Critical,
    /// Serious issue; tallied in `high_issues`
    High,
    /// Tracked per-record only
    Medium,
    /// Tracked per-record only
    Low,
}

impl Severity {
    /// String form used in reports
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Whether a failure with this severity counts as a critical issue
    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }

    /// Whether a failure with this severity counts as a high issue
    #[must_use]
    pub const fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }

    /// Rank for sorting, highest severity first (critical = 0)
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Critical => 0,
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Severity::Critical.as_str(), "critical");
        assert_eq!(Severity::High.as_str(), "high");
        assert_eq!(Severity::Medium.as_str(), "medium");
        assert_eq!(Severity::Low.as_str(), "low");
    }

    #[test]
    fn test_issue_classification() {
        assert!(Severity::Critical.is_critical());
        assert!(!Severity::Critical.is_high());
        assert!(Severity::High.is_high());
        assert!(!Severity::Medium.is_critical());
        assert!(!Severity::Low.is_high());
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Severity::Critical.rank() < Severity::High.rank());
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
        let back: Severity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, Severity::High);
    }
}
