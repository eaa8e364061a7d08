//! Error types for the audit pipeline

use thiserror::Error;

/// Errors surfaced by input normalization and the analysis dispatcher.
///
/// No variant is recovered locally: every failure propagates to the webview,
/// which presents it and lets the user resubmit.
#[derive(Error, Debug)]
pub enum AuditError {
    /// No usable API credential was configured at startup
    #[error("API key is missing: {0}")]
    Configuration(String),

    /// Network, auth, or remote-side failure during the model call
    #[error("Analysis request failed: {0}")]
    Transport(String),

    /// Empty response body, or JSON that does not match the audit schema
    #[error("Could not read the analysis response: {0}")]
    Schema(String),

    /// File read failure while normalizing an upload
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AuditError {
    fn from(err: reqwest::Error) -> Self {
        AuditError::Transport(err.to_string())
    }
}
