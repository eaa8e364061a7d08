//! Audit commands
//!
//! Webview-facing surface of the analysis dispatcher. The configuration is
//! resolved once at startup and managed as Tauri state; a missing credential
//! fails `run_audit` before any network activity.

use crate::audit::client::MISSING_KEY_HINT;
use crate::audit::markup::{split_emphasis, Span};
use crate::audit::{format_feedback_report, AuditResult, GeminiClient, GeminiConfig};
use crate::error::AuditError;
use crate::input::InputData;
use std::sync::Arc;

/// Credential state resolved at startup.
///
/// `None` means no key was found; every audit request fails fast with the
/// configuration error until the app is restarted with a key.
#[derive(Default)]
pub struct AuditState {
    pub config: Option<Arc<GeminiConfig>>,
}

impl AuditState {
    pub fn from_env() -> Self {
        match GeminiConfig::from_env() {
            Ok(config) => Self {
                config: Some(Arc::new(config)),
            },
            Err(e) => {
                tracing::warn!("No API credential configured: {e}");
                Self { config: None }
            }
        }
    }
}

/// Run one audit: brief + submission in, complete result out.
///
/// One logical request at a time: the webview keeps its `isAnalyzing` flag
/// and disables re-submission while a call is outstanding.
#[tauri::command]
pub async fn run_audit(
    brief: InputData,
    submission: InputData,
    state: tauri::State<'_, AuditState>,
) -> Result<AuditResult, String> {
    let config = state
        .config
        .as_ref()
        .cloned()
        .ok_or_else(|| AuditError::Configuration(MISSING_KEY_HINT.to_string()).to_string())?;

    let client = GeminiClient::new((*config).clone());
    client
        .analyze(&brief, &submission)
        .await
        .map_err(|e| e.to_string())
}

/// Whether an API credential was found at startup.
#[tauri::command]
pub fn has_api_key(state: tauri::State<'_, AuditState>) -> bool {
    state.config.is_some()
}

/// Derive the plain-text clipboard report from a result.
#[tauri::command]
pub fn feedback_report(result: AuditResult) -> String {
    format_feedback_report(&result)
}

/// Split feedback text into plain/bold/code spans for rendering.
#[tauri::command]
pub fn emphasis_spans(text: String) -> Vec<Span> {
    split_emphasis(&text)
}
