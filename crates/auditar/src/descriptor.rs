//! Test descriptors.
//!
//! A descriptor names one test within a category, fixes its severity before
//! the run, and carries the check that decides pass/fail. Descriptors are
//! immutable once a run starts.

use crate::check::{from_async_fn, Check, CheckResult};
use crate::severity::Severity;
use std::fmt;
use std::future::Future;
use std::time::Duration;

/// A single named test within a category
pub struct TestDescriptor {
    /// Test name, unique within its category
    pub name: String,
    /// Severity tallied if this test fails
    pub severity: Severity,
    /// Impact statement carried into the vulnerability log on failure
    pub impact: Option<String>,
    /// Per-test deadline; `None` means the runner's default (or no limit)
    pub timeout: Option<Duration>,
    check: Box<dyn Check>,
}

impl TestDescriptor {
    /// Create a descriptor from any [`Check`] implementation
    #[must_use]
    pub fn new(name: impl Into<String>, severity: Severity, check: impl Check + 'static) -> Self {
        Self {
            name: name.into(),
            severity,
            impact: None,
            timeout: None,
            check: Box::new(check),
        }
    }

    /// Create a descriptor from an async closure
    #[must_use]
    pub fn from_fn<F, Fut>(name: impl Into<String>, severity: Severity, f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CheckResult> + Send + 'static,
    {
        Self::new(name, severity, from_async_fn(f))
    }

    /// Attach an impact statement used when the failure is logged as a
    /// vulnerability
    #[must_use]
    pub fn with_impact(mut self, impact: impl Into<String>) -> Self {
        self.impact = Some(impact.into());
        self
    }

    /// Bound the check with a deadline
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Invoke the check once
    pub(crate) async fn run_check(&self) -> CheckResult {
        self.check.run().await
    }
}

impl fmt::Debug for TestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDescriptor")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .field("impact", &self.impact)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
