//! Plain-text data-quality report.

use recast_model::QualityFinding;

/// Render the findings block printed after a run. Findings arrive already
/// deduplicated, in first-seen order.
pub fn render_quality_report(findings: &[QualityFinding]) -> String {
    if findings.is_empty() {
        return String::new();
    }
    let mut out = String::from("--- DATA QUALITY REPORT ---\n");
    for finding in findings {
        out.push_str("[!] ");
        out.push_str(&finding.message);
        out.push('\n');
    }
    out
}
