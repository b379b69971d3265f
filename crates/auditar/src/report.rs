//! Report rendering.
//!
//! Rendering is pure over a frozen [`RunReport`]; only the `write_*`
//! functions touch the filesystem. The runner itself never performs I/O.

use crate::record::TestStatus;
use crate::result::AuditarResult;
use crate::runner::RunReport;
use crate::severity::Severity;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::path::Path;
use std::time::SystemTime;

fn format_timestamp(ts: SystemTime) -> String {
    DateTime::<Utc>::from(ts)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn status_label(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Passed => "PASSED",
        TestStatus::Failed => "FAILED",
    }
}

/// Render a Markdown report
#[must_use]
pub fn render_markdown(report: &RunReport) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# {}\n", report.title);
    let _ = writeln!(
        md,
        "Generated: {} | Run ID: `{}`\n",
        format_timestamp(report.finished_at),
        report.run_id
    );

    md.push_str("## Summary\n\n");
    md.push_str("| Metric | Count |\n|---|---|\n");
    let summary = &report.summary;
    let _ = writeln!(md, "| Total tests | {} |", summary.total_tests);
    let _ = writeln!(md, "| Passed | {} |", summary.passed_tests);
    let _ = writeln!(md, "| Failed | {} |", summary.failed_tests);
    let _ = writeln!(md, "| Critical issues | {} |", summary.critical_issues);
    let _ = writeln!(md, "| High issues | {} |", summary.high_issues);
    let _ = writeln!(md, "\nPass rate: {:.1}%\n", summary.pass_rate() * 100.0);

    for category in &report.categories {
        let _ = writeln!(
            md,
            "## {} ({}/{} passed)\n",
            category.category,
            category.passed_count,
            category.total()
        );
        md.push_str("| Test | Status | Severity | Details |\n|---|---|---|---|\n");
        for record in &category.tests {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} |",
                record.name,
                status_label(record.status),
                record.severity,
                record.details.replace('|', "\\|")
            );
        }
        md.push('\n');
    }

    if !report.vulnerabilities.is_empty() {
        md.push_str("## Vulnerabilities\n\n");
        md.push_str("| Severity | Category | Test | Description | Impact |\n|---|---|---|---|---|\n");
        for finding in &report.vulnerabilities {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {} | {} |",
                finding.severity,
                finding.category,
                finding.test,
                finding.description.replace('|', "\\|"),
                finding.impact.as_deref().unwrap_or("-")
            );
        }
        md.push('\n');
    }

    md
}

/// Render the report as pretty-printed JSON
///
/// # Errors
///
/// Returns error if serialization fails
pub fn render_json(report: &RunReport) -> AuditarResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render a self-contained HTML report
#[must_use]
pub fn render_html(report: &RunReport) -> String {
    let mut html = String::new();

    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Auditar Report</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 20px; }
        .summary { background: #f5f5f5; padding: 20px; border-radius: 8px; margin-bottom: 20px; }
        .progress-bar { background: #ddd; height: 20px; border-radius: 10px; overflow: hidden; }
        .passed { background: #4caf50; height: 100%; }
        .test { padding: 10px; margin: 5px 0; border-radius: 4px; }
        .test.pass { background: #e8f5e9; border-left: 4px solid #4caf50; }
        .test.fail { background: #ffebee; border-left: 4px solid #f44336; }
        .severity { font-size: 0.85em; color: #555; text-transform: uppercase; }
        .details { color: #333; font-family: monospace; white-space: pre-wrap; }
        .finding { background: #fff3e0; border-left: 4px solid #ff9800; padding: 10px; margin: 5px 0; }
    </style>
</head>
<body>
"#,
    );

    let summary = &report.summary;
    let _ = write!(
        html,
        r#"<div class="summary">
    <h1>{}</h1>
    <h2>Results: {}/{} passed ({:.1}%)</h2>
    <div class="progress-bar">
        <div class="passed" style="width: {:.1}%"></div>
    </div>
    <p>Critical issues: {} | High issues: {}</p>
    <p>Generated: {} | Run ID: {}</p>
</div>
"#,
        escape_html(&report.title),
        summary.passed_tests,
        summary.total_tests,
        summary.pass_rate() * 100.0,
        summary.pass_rate() * 100.0,
        summary.critical_issues,
        summary.high_issues,
        format_timestamp(report.finished_at),
        report.run_id
    );

    for category in &report.categories {
        let _ = writeln!(
            html,
            "<h2>{} ({}/{} passed)</h2>",
            escape_html(&category.category),
            category.passed_count,
            category.total()
        );
        for record in &category.tests {
            let class = if record.status.is_passed() {
                "pass"
            } else {
                "fail"
            };
            let _ = write!(
                html,
                r#"<div class="test {}">
    <strong>{}</strong> - {} <span class="severity">{}</span>
    <div class="details">{}</div>
"#,
                class,
                escape_html(&record.name),
                status_label(record.status),
                record.severity,
                escape_html(&record.details)
            );
            if let Some(evidence) = &record.evidence {
                let _ = writeln!(
                    html,
                    "    <div class=\"details\">{}</div>",
                    escape_html(evidence)
                );
            }
            html.push_str("</div>\n");
        }
    }

    if !report.vulnerabilities.is_empty() {
        html.push_str("<h2>Vulnerabilities</h2>\n");
        for finding in &report.vulnerabilities {
            let _ = write!(
                html,
                r#"<div class="finding">
    <span class="severity">{}</span> <strong>{}</strong> / {}
    <div class="details">{}</div>
"#,
                finding.severity,
                escape_html(&finding.category),
                escape_html(&finding.test),
                escape_html(&finding.description)
            );
            if let Some(impact) = &finding.impact {
                let _ = writeln!(
                    html,
                    "    <div class=\"details\">Impact: {}</div>",
                    escape_html(impact)
                );
            }
            html.push_str("</div>\n");
        }
    }

    html.push_str(
        r#"
<footer>
    <p>Generated by Auditar</p>
</footer>
</body>
</html>
"#,
    );

    html
}

/// Render and write the Markdown report
///
/// # Errors
///
/// Returns error if file writing fails
pub fn write_markdown(report: &RunReport, output_path: &Path) -> AuditarResult<()> {
    std::fs::write(output_path, render_markdown(report))?;
    Ok(())
}

/// Render and write the JSON report
///
/// # Errors
///
/// Returns error if serialization or file writing fails
pub fn write_json(report: &RunReport, output_path: &Path) -> AuditarResult<()> {
    std::fs::write(output_path, render_json(report)?)?;
    Ok(())
}

/// Render and write the HTML report
///
/// # Errors
///
/// Returns error if file writing fails
pub fn write_html(report: &RunReport, output_path: &Path) -> AuditarResult<()> {
    std::fs::write(output_path, render_html(report))?;
    Ok(())
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Count findings of a severity, for report headers
#[must_use]
pub fn severity_count(report: &RunReport, severity: Severity) -> usize {
    report
        .vulnerabilities
        .iter()
        .filter(|v| v.severity == severity)
        .count()
}
