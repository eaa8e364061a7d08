//! Inline emphasis splitting
//!
//! Feedback strings from the model carry `**bold**` and `` `code` ``
//! markers. Every renderer used to re-implement this split with its own
//! regex; this is the single shared implementation.

use serde::Serialize;

/// How a span of feedback text should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Plain,
    Bold,
    Code,
}

/// One run of text with a single rendering style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
}

impl Span {
    fn new(kind: SpanKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// Split feedback text into plain/bold/code spans.
///
/// `**…**` becomes a bold span, `` `…` `` a code span. An unterminated
/// marker is not emphasis; it stays in the surrounding plain text and
/// scanning continues past it, so later well-formed markers still match.
/// Empty spans are never emitted.
pub fn split_emphasis(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let (marker, kind): (&str, SpanKind) = if text[i..].starts_with("**") {
            ("**", SpanKind::Bold)
        } else if text[i..].starts_with('`') {
            ("`", SpanKind::Code)
        } else {
            i += utf8_len(bytes[i]);
            continue;
        };

        let body_start = i + marker.len();
        match text[body_start..].find(marker) {
            Some(rel_end) => {
                if i > plain_start {
                    spans.push(Span::new(SpanKind::Plain, &text[plain_start..i]));
                }
                let body = &text[body_start..body_start + rel_end];
                if !body.is_empty() {
                    spans.push(Span::new(kind, body));
                }
                i = body_start + rel_end + marker.len();
                plain_start = i;
            }
            // Unterminated marker: leave it as plain text and keep scanning
            None => {
                i = body_start;
            }
        }
    }

    if plain_start < text.len() {
        spans.push(Span::new(SpanKind::Plain, &text[plain_start..]));
    }

    spans
}

fn utf8_len(first_byte: u8) -> usize {
    match first_byte {
        b if b < 0x80 => 1,
        b if b >= 0xF0 => 4,
        b if b >= 0xE0 => 3,
        _ => 2,
    }
}
