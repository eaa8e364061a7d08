//! Input Normalizer
//!
//! Converts a user-supplied document (picked file, dropped file, pasted
//! text, or an explicit clear) into a canonical [`InputData`] record the
//! dispatcher can embed in a model request.
//!
//! ## Strategy
//! - Text-readable formats (`.ipynb`, `.txt`, `.md`, `.json`, `.py`) are
//!   read as UTF-8 and sent to the model as plain text.
//! - Everything else (PDFs, images, unknown extensions) is read as raw
//!   bytes and base64-encoded with a MIME tag so the model receives the
//!   original document inline.

use crate::error::AuditError;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name suffixes that are read as text rather than attached as binary.
/// The check is case-sensitive on purpose: an uppercase `.TXT` falls through
/// to the binary branch, matching the picker's advertised allow-list.
const TEXT_SUFFIXES: [&str; 5] = [".ipynb", ".txt", ".md", ".json", ".py"];

/// Extensions the file-picker dialog offers. Drag-and-drop is not filtered
/// by this list; dropped files of any type go through the same branch logic.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["pdf", "ipynb", "txt", "md", "json", "py"];

/// How the `content` field of an [`InputData`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    File,
}

/// One user-supplied document, normalized for the model request.
///
/// A fresh record is produced on every input event; records are never
/// mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    /// Discriminates `content`: raw text vs. base64-encoded bytes
    #[serde(rename = "type")]
    pub kind: InputKind,

    /// Raw text when `kind` is `text`; base64 (no data-URL prefix) when
    /// `kind` is `file`
    pub content: String,

    /// MIME type, present iff `kind` is `file`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Display label only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl InputData {
    /// Normalize a file on disk.
    ///
    /// Text-readable suffixes are read as UTF-8; everything else is read as
    /// bytes and base64-encoded, with the MIME type guessed from the path.
    pub fn from_path(path: &Path) -> Result<Self, AuditError> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        if TEXT_SUFFIXES.iter().any(|s| file_name.ends_with(s)) {
            let content = std::fs::read_to_string(path)?;
            return Ok(Self {
                kind: InputKind::Text,
                content,
                mime_type: None,
                file_name: Some(file_name),
            });
        }

        let bytes = std::fs::read(path)?;
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self {
            kind: InputKind::File,
            content: base64::engine::general_purpose::STANDARD.encode(&bytes),
            mime_type: Some(mime_type),
            file_name: Some(file_name),
        })
    }

    /// Normalize pasted text.
    pub fn pasted(text: &str) -> Self {
        Self {
            kind: InputKind::Text,
            content: text.to_string(),
            mime_type: None,
            file_name: Some("Pasted Text".to_string()),
        }
    }

    /// The empty sentinel produced by an explicit clear action.
    pub fn cleared() -> Self {
        Self {
            kind: InputKind::Text,
            content: String::new(),
            mime_type: None,
            file_name: None,
        }
    }
}
