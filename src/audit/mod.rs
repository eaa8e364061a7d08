pub mod client;
pub mod http;
pub mod markup;
pub mod prompts;
pub mod report;
pub mod schema;
pub mod types;

pub use client::{GeminiClient, GeminiConfig};
pub use markup::{split_emphasis, Span, SpanKind};
pub use report::format_feedback_report;
pub use types::{AuditResult, Performance, RubricItem};
