//! Shared types for the audit pipeline

use serde::{Deserialize, Serialize};

/// Categorical performance tier for one rubric criterion.
///
/// The model supplies this value and it is authoritative: no layer of the
/// app recomputes a tier from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Performance {
    Excellent,
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Poor,
}

impl Performance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Poor => "Poor",
        }
    }
}

/// One graded criterion from the brief's rubric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RubricItem {
    /// Criterion name, verbatim from the brief's rubric
    pub criterion: String,

    /// Raw score awarded for this criterion
    pub score: f64,

    /// Maximum marks available for this criterion
    pub max_score: f64,

    /// Model-supplied performance tier
    pub performance: Performance,

    /// Feedback text; may contain `**bold**` and `` `code` `` markers
    pub feedback: String,
}

/// The full structured feedback for one analysis run.
///
/// Constructed atomically from one parsed response and never mutated; a new
/// run replaces the whole record. All eight fields are mandatory, so a
/// response missing any of them fails deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    /// Qualitative grade label, e.g. "Distinction" or "High 2:1"
    pub overall_grade: String,

    /// Weighted total score, 0 to 100
    pub overall_score: u32,

    /// Executive summary of the audit
    pub summary: String,

    /// Core tasks extracted from the assignment brief
    pub assignment_task_summary: String,

    /// Summary of the grading criteria structure found in the brief
    pub rubric_context: String,

    /// Graded criteria, in the order the brief's rubric lists them
    pub rubric_breakdown: Vec<RubricItem>,

    /// Top issues dragging the grade down (3-5 items)
    pub critical_improvements: Vec<String>,

    /// Bonus suggestions to elevate the work (exactly 3 items)
    pub reaching_for_the_stars: Vec<String>,
}
