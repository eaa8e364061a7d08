//! Structured-output schema for the audit response
//!
//! Declares the strict JSON shape the model must return, in the Gemini
//! `responseSchema` dialect. All eight top-level fields are required, and
//! every rubric item must carry its five fields with `performance` pinned
//! to the four-value tier enum.

use serde_json::{json, Value};

/// Build the response schema attached to every audit request.
pub fn audit_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "overallGrade": {
                "type": "STRING",
                "description": "The qualitative grade (e.g., 'Distinction', 'High 2:1', 'B+')."
            },
            "overallScore": {
                "type": "INTEGER",
                "description": "A weighted total score from 0 to 100 representing the overall quality."
            },
            "summary": {
                "type": "STRING",
                "description": "A brief executive summary of the audit."
            },
            "assignmentTaskSummary": {
                "type": "STRING",
                "description": "A concise summary of the core tasks/questions required by the assignment brief."
            },
            "rubricContext": {
                "type": "STRING",
                "description": "A summary of the grading criteria structure and weightings found in the brief."
            },
            "rubricBreakdown": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "criterion": {
                            "type": "STRING",
                            "description": "Name of the criterion directly from the brief's rubric."
                        },
                        "score": {
                            "type": "NUMBER",
                            "description": "The raw score awarded for this specific criterion."
                        },
                        "maxScore": {
                            "type": "NUMBER",
                            "description": "The maximum marks available for this criterion as per the brief. If not specified, default to 100."
                        },
                        "performance": {
                            "type": "STRING",
                            "enum": ["Excellent", "Good", "Needs Improvement", "Poor"]
                        },
                        "feedback": {
                            "type": "STRING",
                            "description": "Comprehensive feedback. USE MARKDOWN BOLD (**text**) to highlight the specific reason for the score deduction or success."
                        }
                    },
                    "required": ["criterion", "score", "maxScore", "performance", "feedback"]
                }
            },
            "criticalImprovements": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Specific, actionable bullet points. USE BACKTICKS (`variable_name`) for code snippets, file names, or technical terms."
            },
            "reachingForTheStars": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Advanced, optional suggestions to elevate the work to a professional or publication standard."
            }
        },
        "required": [
            "overallGrade",
            "overallScore",
            "summary",
            "assignmentTaskSummary",
            "rubricContext",
            "rubricBreakdown",
            "criticalImprovements",
            "reachingForTheStars"
        ]
    })
}
