//! Check function interface.
//!
//! A check is the unit of work that determines pass/fail for one named test.
//! The aggregator imposes no constraints on what a check does internally
//! (HTTP probes, static analysis, anything async); it only consumes the
//! returned [`CheckOutcome`] or the error.
//!
//! An `Err` return is the recoverable failure path: the runner converts it
//! to a `FAILED` record with an `ERROR - ` prefixed detail string and moves
//! on to the next descriptor. It never aborts the category.

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Outcome produced by invoking a check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the check passed
    pub passed: bool,
    /// Human-readable detail message
    pub details: String,
    /// Optional supporting evidence (response body, matched line, etc.)
    pub evidence: Option<String>,
}

impl CheckOutcome {
    /// Create a passing outcome
    #[must_use]
    pub fn pass(details: impl Into<String>) -> Self {
        Self {
            passed: true,
            details: details.into(),
            evidence: None,
        }
    }

    /// Create a failing outcome
    #[must_use]
    pub fn fail(details: impl Into<String>) -> Self {
        Self {
            passed: false,
            details: details.into(),
            evidence: None,
        }
    }

    /// Attach evidence to the outcome
    #[must_use]
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

/// Error raised by a check that could not complete
///
/// Displays as the bare message so the runner's `ERROR - {message}` detail
/// string carries no extra framing.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct CheckError {
    /// Error message
    pub message: String,
}

impl CheckError {
    /// Create a new check error
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for CheckError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for CheckError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl From<std::io::Error> for CheckError {
    fn from(err: std::io::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Result type returned by checks
pub type CheckResult = Result<CheckOutcome, CheckError>;

/// Abstract check trait
///
/// This trait is the seam between the aggregator and whatever actually
/// performs the probe. Implement it directly for stateful checks, or use
/// [`FnCheck`] / `TestDescriptor::from_fn` for plain async closures.
#[async_trait]
pub trait Check: Send + Sync {
    /// Run the check once to completion
    async fn run(&self) -> CheckResult;
}

/// Adapter that turns an async closure into a [`Check`]
pub struct FnCheck<F> {
    f: F,
}

impl<F> FnCheck<F>
where
    F: Fn() -> BoxFuture<'static, CheckResult> + Send + Sync,
{
    /// Wrap a boxed-future factory
    #[must_use]
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

/// Box an async closure into an [`FnCheck`]
pub fn from_async_fn<F, Fut>(
    f: F,
) -> FnCheck<impl Fn() -> BoxFuture<'static, CheckResult> + Send + Sync>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = CheckResult> + Send + 'static,
{
    FnCheck::new(move || f().boxed())
}

#[async_trait]
impl<F> Check for FnCheck<F>
where
    F: Fn() -> BoxFuture<'static, CheckResult> + Send + Sync,
{
    async fn run(&self) -> CheckResult {
        (self.f)().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod outcome_tests {
        use super::*;

        #[test]
        fn test_pass_outcome() {
            let outcome = CheckOutcome::pass("ok");
            assert!(outcome.passed);
            assert_eq!(outcome.details, "ok");
            assert!(outcome.evidence.is_none());
        }

        #[test]
        fn test_fail_outcome() {
            let outcome = CheckOutcome::fail("bad");
            assert!(!outcome.passed);
            assert_eq!(outcome.details, "bad");
        }

        #[test]
        fn test_with_evidence() {
            let outcome = CheckOutcome::fail("header missing").with_evidence("HTTP/1.1 200 OK");
            assert_eq!(outcome.evidence, Some("HTTP/1.1 200 OK".to_string()));
        }
    }

    mod check_error_tests {
        use super::*;

        #[test]
        fn test_display_is_bare_message() {
            let err = CheckError::new("boom");
            assert_eq!(err.to_string(), "boom");
        }

        #[test]
        fn test_from_str() {
            let err: CheckError = "connection refused".into();
            assert_eq!(err.message, "connection refused");
        }

        #[test]
        fn test_from_io_error() {
            let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
            let err: CheckError = io.into();
            assert!(err.message.contains("no such file"));
        }
    }

    mod fn_check_tests {
        use super::*;

        #[tokio::test]
        async fn test_closure_check_runs() {
            let check = from_async_fn(|| async { Ok(CheckOutcome::pass("closure ran")) });
            let outcome = check.run().await.unwrap();
            assert!(outcome.passed);
        }

        #[tokio::test]
        async fn test_closure_check_error() {
            let check = from_async_fn(|| async { Err(CheckError::new("probe failed")) });
            let err = check.run().await.unwrap_err();
            assert_eq!(err.message, "probe failed");
        }
    }
}
