//! Auditar: Audit-Suite Aggregation Pipeline
//!
//! Auditar (Spanish: "to audit") is the reusable core of a category-based
//! audit runner: a fixed taxonomy of test descriptors per category, a
//! sequential executor that classifies pass/fail and routes severities into
//! run-level issue counters, and renderers that turn the frozen results into
//! Markdown/JSON/HTML reports.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    AUDITAR Pipeline                               │
//! ├──────────────────────────────────────────────────────────────────┤
//! │   ┌─────────────┐    ┌─────────────┐    ┌─────────────┐          │
//! │   │ Descriptors │    │ Sequential  │    │ Report      │          │
//! │   │ (per        │───►│ Runner +    │───►│ Renderers   │          │
//! │   │  category)  │    │ RunSummary  │    │ (md/json/   │          │
//! │   └─────────────┘    └─────────────┘    │  html)      │          │
//! │                                          └─────────────┘          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Checks run strictly in declaration order, one at a time; a check's error
//! becomes a `FAILED` record with an `ERROR - ` detail prefix and never
//! aborts the category. The only shared mutable state is the [`RunSummary`]
//! accumulator, written by one category run at a time.
//!
//! # Example
//!
//! ```ignore
//! use auditar::{AuditRun, CheckOutcome, Severity, TestDescriptor};
//!
//! let mut run = AuditRun::new("Authentication Security Audit")
//!     .with_vulnerability_log();
//!
//! let descriptors = vec![
//!     TestDescriptor::from_fn("password-hashing", Severity::Critical, || async {
//!         Ok(CheckOutcome::pass("bcrypt cost 12"))
//!     }),
//!     TestDescriptor::from_fn("rate-limiting", Severity::High, || async {
//!         Ok(CheckOutcome::fail("no limiter on /login"))
//!     })
//!     .with_impact("Brute-force amplification"),
//! ];
//!
//! run.run_category("passwordSecurity", &descriptors).await?;
//! let report = run.finish();
//! auditar::report::write_markdown(&report, "audit-report.md".as_ref())?;
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod check;
mod descriptor;
mod record;
/// Report rendering (Markdown/JSON/HTML) over a frozen run
pub mod report;
mod result;
mod runner;
mod severity;
mod summary;
mod vulnerability;

pub use check::{from_async_fn, Check, CheckError, CheckOutcome, CheckResult, FnCheck};
pub use descriptor::TestDescriptor;
pub use record::{CategoryResult, TestRecord, TestStatus};
pub use result::{AuditarError, AuditarResult};
pub use runner::{run_category, run_category_with_deadline, AuditRun, RunReport};
pub use severity::Severity;
pub use summary::RunSummary;
pub use vulnerability::{Vulnerability, VulnerabilityLog};
