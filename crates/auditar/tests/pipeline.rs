//! End-to-end pipeline tests for auditar
//!
//! These drive a full run the way an audit script would: several categories
//! back to back against one summary, vulnerability accumulation on failures,
//! then rendering and writing every report format.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use auditar::{
    report, AuditRun, CheckError, CheckOutcome, RunSummary, Severity, TestDescriptor, TestStatus,
};
use std::time::Duration;

fn authentication_suite() -> Vec<TestDescriptor> {
    vec![
        TestDescriptor::from_fn("password-hashing", Severity::Critical, || async {
            Ok(CheckOutcome::pass("argon2id with tuned parameters"))
        }),
        TestDescriptor::from_fn("brute-force-lockout", Severity::High, || async {
            Ok(CheckOutcome::fail("no lockout after 100 attempts"))
        })
        .with_impact("Account takeover via credential stuffing"),
        TestDescriptor::from_fn("session-rotation", Severity::Medium, || async {
            Err(CheckError::new("login probe returned 502"))
        }),
    ]
}

fn header_suite() -> Vec<TestDescriptor> {
    vec![
        TestDescriptor::from_fn("csp-header", Severity::High, || async {
            Ok(CheckOutcome::pass("default-src 'self'"))
        }),
        TestDescriptor::from_fn("hsts-header", Severity::Medium, || async {
            Ok(CheckOutcome::pass("max-age=63072000"))
        }),
    ]
}

// ============================================================================
// Full run: categories, counters, findings
// ============================================================================

#[tokio::test]
async fn test_full_run_accumulates_across_categories() {
    let mut run = AuditRun::new("Security Audit").with_vulnerability_log();

    run.run_category("authentication", &authentication_suite())
        .await
        .unwrap();
    run.run_category("securityHeaders", &header_suite())
        .await
        .unwrap();

    let report = run.finish();

    assert_eq!(report.summary.total_tests, 5);
    assert_eq!(report.summary.passed_tests, 3);
    assert_eq!(report.summary.failed_tests, 2);
    assert_eq!(report.summary.critical_issues, 0);
    assert_eq!(report.summary.high_issues, 1);
    assert!(report.summary.is_consistent());

    // Category order matches invocation order; record order matches
    // declaration order.
    assert_eq!(report.categories[0].category, "authentication");
    assert_eq!(report.categories[1].category, "securityHeaders");
    let names: Vec<&str> = report.categories[0]
        .tests
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["password-hashing", "brute-force-lockout", "session-rotation"]
    );

    // Both failures (one reported, one errored) became findings.
    assert_eq!(report.vulnerabilities.len(), 2);
    assert_eq!(report.vulnerabilities[0].test, "brute-force-lockout");
    assert_eq!(
        report.vulnerabilities[0].impact.as_deref(),
        Some("Account takeover via credential stuffing")
    );
    assert_eq!(report.vulnerabilities[1].test, "session-rotation");
    assert!(report.vulnerabilities[1].description.starts_with("ERROR - "));
}

#[tokio::test]
async fn test_erroring_check_isolated_mid_category() {
    let mut summary = RunSummary::new();
    let result = auditar::run_category("authentication", &authentication_suite(), &mut summary)
        .await
        .unwrap();

    assert_eq!(result.total(), 3);
    assert_eq!(result.passed_count + result.failed_count, 3);
    assert_eq!(result.tests[2].status, TestStatus::Failed);
    assert_eq!(result.tests[2].details, "ERROR - login probe returned 502");
}

#[tokio::test]
async fn test_run_with_default_deadline_survives_hung_check() {
    let mut run =
        AuditRun::new("Deadline Audit").with_default_timeout(Duration::from_millis(20));

    let descriptors = vec![
        TestDescriptor::from_fn("hung-probe", Severity::Critical, || async {
            tokio::time::sleep(Duration::from_secs(300)).await;
            Ok(CheckOutcome::pass("unreachable"))
        }),
        TestDescriptor::from_fn("quick-probe", Severity::Low, || async {
            Ok(CheckOutcome::pass("ok"))
        }),
    ];

    run.run_category("availability", &descriptors).await.unwrap();
    let report = run.finish();

    assert_eq!(report.summary.failed_tests, 1);
    assert_eq!(report.summary.critical_issues, 1);
    assert_eq!(report.summary.passed_tests, 1);
    assert_eq!(
        report.categories[0].tests[0].details,
        "ERROR - timed out after 20ms"
    );
}

// ============================================================================
// Rendering and writing
// ============================================================================

#[tokio::test]
async fn test_render_and_write_all_formats() {
    let mut run = AuditRun::new("Security Audit").with_vulnerability_log();
    run.run_category("authentication", &authentication_suite())
        .await
        .unwrap();
    let run_report = run.finish();

    let md = report::render_markdown(&run_report);
    assert!(md.contains("# Security Audit"));
    assert!(md.contains("| High issues | 1 |"));
    assert!(md.contains("## Vulnerabilities"));

    let html = report::render_html(&run_report);
    assert!(html.contains("brute-force-lockout"));
    assert!(html.contains(r#"class="test fail""#));

    let json = report::render_json(&run_report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["summary"]["total_tests"], 3);

    let dir = tempfile::tempdir().unwrap();
    report::write_markdown(&run_report, &dir.path().join("audit.md")).unwrap();
    report::write_json(&run_report, &dir.path().join("audit.json")).unwrap();
    report::write_html(&run_report, &dir.path().join("audit.html")).unwrap();
    assert!(dir.path().join("audit.md").exists());
    assert!(dir.path().join("audit.json").exists());
    assert!(dir.path().join("audit.html").exists());
}

#[tokio::test]
async fn test_empty_run_renders_cleanly() {
    let run = AuditRun::new("Empty Audit");
    let run_report = run.finish();

    assert!(run_report.all_passed());
    let md = report::render_markdown(&run_report);
    assert!(md.contains("| Total tests | 0 |"));
    assert!(md.contains("Pass rate: 100.0%"));
    assert!(!md.contains("## Vulnerabilities"));
}
