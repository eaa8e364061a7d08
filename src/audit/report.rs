//! Plain-text feedback report
//!
//! Derives the copy-to-clipboard report from an [`AuditResult`]. Pure
//! formatting; the clipboard write itself happens in the webview.

use crate::audit::types::AuditResult;
use std::fmt::Write;

/// Format the detailed feedback report.
///
/// Every criterion name, score, max score, and feedback string from the
/// breakdown appears verbatim exactly once.
pub fn format_feedback_report(result: &AuditResult) -> String {
    let mut text = String::from("DETAILED FEEDBACK REPORT\n\n");
    let _ = write!(
        text,
        "Overall Grade: {} ({}/100)\n\n",
        result.overall_grade, result.overall_score
    );

    for item in &result.rubric_breakdown {
        let _ = write!(
            text,
            "### {}\nScore: {}/{} ({})\nFeedback: {}\n\n",
            item.criterion,
            item.score,
            item.max_score,
            item.performance.as_str(),
            item.feedback
        );
    }

    text
}
