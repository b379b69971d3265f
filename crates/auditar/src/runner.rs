//! Sequential category runner.
//!
//! The runner executes one category's descriptors in declaration order,
//! awaiting each check to completion before the next starts. There is no
//! intra-category concurrency and no reordering: report readability depends
//! on stable order.
//!
//! Failure isolation lives at exactly one call site here: a check's `Err`
//! (or deadline expiry) becomes a `FAILED` record with an `ERROR - `
//! prefixed detail string, never a propagated error. A run therefore never
//! crashes because of a flaky or broken check; worst case every test in a
//! category is recorded `FAILED` and the run proceeds to reporting.

use crate::check::CheckError;
use crate::descriptor::TestDescriptor;
use crate::record::{CategoryResult, TestRecord};
use crate::result::{AuditarError, AuditarResult};
use crate::summary::RunSummary;
use crate::vulnerability::{Vulnerability, VulnerabilityLog};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Run one category's descriptors in declaration order
///
/// `summary` is the mutable accumulator shared across every category in one
/// run; `total_tests` increments unconditionally once per test, and the
/// issue counters increment for failed critical/high tests only. An empty
/// descriptor list is valid and leaves `summary` untouched.
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty category name; nothing is recorded
/// in that case. Check errors never surface here.
pub async fn run_category(
    category: &str,
    descriptors: &[TestDescriptor],
    summary: &mut RunSummary,
) -> AuditarResult<CategoryResult> {
    run_category_with_deadline(category, descriptors, summary, None).await
}

/// Run one category, bounding each check that lacks its own timeout with
/// `default_timeout`
///
/// # Errors
///
/// Returns `InvalidArgument` for an empty category name.
pub async fn run_category_with_deadline(
    category: &str,
    descriptors: &[TestDescriptor],
    summary: &mut RunSummary,
    default_timeout: Option<Duration>,
) -> AuditarResult<CategoryResult> {
    if category.is_empty() {
        return Err(AuditarError::InvalidArgument {
            message: "category name must be non-empty".to_string(),
        });
    }

    info!(category, tests = descriptors.len(), "running category");
    let mut result = CategoryResult::new(category);

    for descriptor in descriptors {
        let record = execute(descriptor, default_timeout).await;
        summary.record(record.status, record.severity);
        result.push(record);
    }

    debug_assert!(summary.is_consistent());
    Ok(result)
}

/// Execute one descriptor's check and classify the outcome
async fn execute(descriptor: &TestDescriptor, default_timeout: Option<Duration>) -> TestRecord {
    debug!(test = %descriptor.name, severity = %descriptor.severity, "check started");
    let start = Instant::now();

    let deadline = descriptor.timeout.or(default_timeout);
    let outcome = match deadline {
        Some(limit) => match tokio::time::timeout(limit, descriptor.run_check()).await {
            Ok(result) => result,
            Err(_) => Err(CheckError::new(format!(
                "timed out after {}ms",
                limit.as_millis()
            ))),
        },
        None => descriptor.run_check().await,
    };
    let duration = start.elapsed();

    let record = match outcome {
        Ok(outcome) => {
            let evidence = outcome.evidence;
            if outcome.passed {
                TestRecord::passed(&descriptor.name, descriptor.severity, outcome.details)
            } else {
                TestRecord::failed(&descriptor.name, descriptor.severity, outcome.details)
            }
            .with_evidence(evidence)
        }
        Err(err) => {
            warn!(test = %descriptor.name, error = %err, "check errored");
            TestRecord::failed(
                &descriptor.name,
                descriptor.severity,
                format!("ERROR - {err}"),
            )
        }
    };

    debug!(test = %descriptor.name, status = ?record.status, "check finished");
    record.with_duration(duration)
}

/// One full audit run: categories executed back to back against a shared
/// summary, optionally accumulating vulnerabilities on failures
///
/// # Example
///
/// ```ignore
/// let mut run = AuditRun::new("Authentication Security Audit")
///     .with_vulnerability_log();
///
/// run.run_category("passwordSecurity", &password_tests).await?;
/// run.run_category("sessionManagement", &session_tests).await?;
///
/// let report = run.finish();
/// ```
#[derive(Debug)]
pub struct AuditRun {
    title: String,
    run_id: Uuid,
    started_at: SystemTime,
    summary: RunSummary,
    categories: Vec<CategoryResult>,
    vulnerabilities: Option<VulnerabilityLog>,
    default_timeout: Option<Duration>,
}

impl AuditRun {
    /// Create a new run
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            run_id: Uuid::new_v4(),
            started_at: SystemTime::now(),
            summary: RunSummary::new(),
            categories: Vec::new(),
            vulnerabilities: None,
            default_timeout: None,
        }
    }

    /// Accumulate a [`Vulnerability`] for every failed test
    #[must_use]
    pub fn with_vulnerability_log(mut self) -> Self {
        self.vulnerabilities = Some(VulnerabilityLog::new());
        self
    }

    /// Bound every check that lacks its own timeout with a run-wide deadline
    #[must_use]
    pub const fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = Some(timeout);
        self
    }

    /// Unique identifier of this run
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Current cross-category counters
    #[must_use]
    pub const fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Categories completed so far, in execution order
    #[must_use]
    pub fn categories(&self) -> &[CategoryResult] {
        &self.categories
    }

    /// Run one category and fold its results into the run
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty category name.
    pub async fn run_category(
        &mut self,
        category: &str,
        descriptors: &[TestDescriptor],
    ) -> AuditarResult<&CategoryResult> {
        let result =
            run_category_with_deadline(category, descriptors, &mut self.summary, self.default_timeout)
                .await?;

        if let Some(log) = self.vulnerabilities.as_mut() {
            // One record per descriptor, same order, so a positional zip is
            // enough to recover the descriptor's impact statement.
            for (record, descriptor) in result.tests.iter().zip(descriptors) {
                if record.status.is_failed() {
                    log.record(Vulnerability::new(
                        &result.category,
                        &record.name,
                        record.severity,
                        &record.details,
                        descriptor.impact.clone(),
                    ));
                }
            }
        }

        self.categories.push(result);
        Ok(self.categories.last().expect("category just recorded"))
    }

    /// Freeze the run into an immutable report
    #[must_use]
    pub fn finish(self) -> RunReport {
        info!(
            run_id = %self.run_id,
            total = self.summary.total_tests,
            passed = self.summary.passed_tests,
            failed = self.summary.failed_tests,
            "run finished"
        );
        RunReport {
            title: self.title,
            run_id: self.run_id,
            started_at: self.started_at,
            finished_at: SystemTime::now(),
            summary: self.summary,
            categories: self.categories,
            vulnerabilities: self
                .vulnerabilities
                .map(VulnerabilityLog::into_entries)
                .unwrap_or_default(),
        }
    }
}

/// Immutable snapshot of a completed run, handed to the report renderers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Run title shown in report headers
    pub title: String,
    /// Unique identifier of the run
    pub run_id: Uuid,
    /// When the run started
    pub started_at: SystemTime,
    /// When the run was finalized
    pub finished_at: SystemTime,
    /// Final cross-category counters
    pub summary: RunSummary,
    /// Category results in execution order
    pub categories: Vec<CategoryResult>,
    /// Findings accumulated from failed tests (empty without a log)
    pub vulnerabilities: Vec<Vulnerability>,
}

impl RunReport {
    /// Check if every test in the run passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.summary.all_passed()
    }

    /// Wall-clock duration of the whole run
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.finished_at
            .duration_since(self.started_at)
            .unwrap_or(Duration::ZERO)
    }
}
