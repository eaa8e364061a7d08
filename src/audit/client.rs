//! Gemini API Client
//!
//! Handles the single request/response exchange behind an audit run:
//! builds the ordered part list (instruction, labeled brief, labeled
//! submission), attaches the strict response schema, and parses the JSON
//! body into an [`AuditResult`].
//!
//! No retries, no streaming, no partial results: either a complete
//! `AuditResult` comes back or the call fails with one of the
//! [`AuditError`] variants.

use crate::audit::http::gemini_client;
use crate::audit::prompts::{AUDIT_INSTRUCTION, BRIEF_LABEL, SUBMISSION_LABEL};
use crate::audit::schema::audit_response_schema;
use crate::audit::types::AuditResult;
use crate::error::AuditError;
use crate::input::{InputData, InputKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Low sampling temperature: audits should lean deterministic.
const AUDIT_TEMPERATURE: f32 = 0.2;

/// Hint attached to every missing-credential error, whichever path raises it.
pub const MISSING_KEY_HINT: &str = "set GEMINI_API_KEY (or API_KEY) in the environment";

/// Explicit client configuration.
///
/// The credential is resolved once at startup and handed to the client at
/// construction, so nothing in the audit path reads process state and tests
/// can inject a fake key or a local base URL.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
}

impl GeminiConfig {
    /// Build a config from an API key, failing on an empty credential.
    pub fn new(api_key: impl Into<String>) -> Result<Self, AuditError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AuditError::Configuration(
                "no API key provided".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: AUDIT_TEMPERATURE,
        })
    }

    /// Resolve the credential from the environment (`GEMINI_API_KEY`, with
    /// `API_KEY` as a fallback). Absence is a hard configuration error.
    pub fn from_env() -> Result<Self, AuditError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| AuditError::Configuration(MISSING_KEY_HINT.to_string()))?;
        Self::new(api_key)
    }
}

/// Gemini API client for audit runs.
pub struct GeminiClient {
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self { config }
    }

    /// Audit a submission against a brief.
    ///
    /// Issues exactly one `generateContent` request and awaits it to
    /// completion or failure. Re-submission guarding (`isAnalyzing`) is the
    /// caller's job.
    pub async fn analyze(
        &self,
        brief: &InputData,
        submission: &InputData,
    ) -> Result<AuditResult, AuditError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: build_parts(brief, submission),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: audit_response_schema(),
                temperature: self.config.temperature,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        tracing::info!(model = %self.config.model, "Submitting audit request");

        let response = gemini_client()
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Audit request rejected");
            return Err(AuditError::Transport(format!("API error ({status}): {body}")));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AuditError::Schema(format!("unreadable response body: {e}")))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuditError::Schema("empty response from model".to_string()))?;

        parse_audit_result(&text)
    }
}

/// Build the ordered part list for one audit request: the fixed instruction,
/// then the labeled brief, then the labeled submission. Text inputs are
/// embedded verbatim; file inputs ride along as inline base64 tagged with
/// their MIME type.
pub fn build_parts(brief: &InputData, submission: &InputData) -> Vec<Part> {
    let mut parts = vec![Part::text(AUDIT_INSTRUCTION)];

    parts.push(Part::text(BRIEF_LABEL));
    parts.push(Part::from_input(brief));

    parts.push(Part::text(SUBMISSION_LABEL));
    parts.push(Part::from_input(submission));

    parts
}

/// Parse the raw response text as an [`AuditResult`].
pub fn parse_audit_result(text: &str) -> Result<AuditResult, AuditError> {
    serde_json::from_str(text).map_err(|e| AuditError::Schema(e.to_string()))
}

// Wire types for the generateContent call

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
    temperature: f32,
}

/// One unit of the multi-part request: plain text or tagged inline binary.
#[derive(Debug, Serialize)]
pub enum Part {
    #[serde(rename = "text")]
    Text(String),
    #[serde(rename = "inlineData")]
    InlineData(InlineData),
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

impl Part {
    fn text(text: &str) -> Self {
        Part::Text(text.to_string())
    }

    /// A text input is embedded verbatim; a file input becomes an inline
    /// blob with its MIME tag and base64 payload.
    fn from_input(input: &InputData) -> Self {
        match (&input.kind, &input.mime_type) {
            (InputKind::File, Some(mime_type)) => Part::InlineData(InlineData {
                mime_type: mime_type.clone(),
                data: input.content.clone(),
            }),
            _ => Part::Text(input.content.clone()),
        }
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_input(content: &str) -> InputData {
        InputData::pasted(content)
    }

    fn file_input() -> InputData {
        InputData {
            kind: InputKind::File,
            content: "JVBERi0xLjc=".to_string(),
            mime_type: Some("application/pdf".to_string()),
            file_name: Some("brief.pdf".to_string()),
        }
    }

    #[test]
    fn parts_are_ordered_instruction_brief_submission() {
        let brief = text_input("Write 500 words on X. Rubric: Intro 20, Body 60, Conclusion 20.");
        let submission = text_input("student text");
        let parts = build_parts(&brief, &submission);

        assert_eq!(parts.len(), 5);
        assert!(matches!(&parts[0], Part::Text(t) if t == AUDIT_INSTRUCTION));
        assert!(matches!(&parts[1], Part::Text(t) if t == BRIEF_LABEL));
        assert!(matches!(&parts[2], Part::Text(t) if t.starts_with("Write 500 words")));
        assert!(matches!(&parts[3], Part::Text(t) if t == SUBMISSION_LABEL));
        assert!(matches!(&parts[4], Part::Text(t) if t == "student text"));
    }

    #[test]
    fn file_inputs_become_inline_data() {
        let parts = build_parts(&file_input(), &text_input("essay"));
        match &parts[2] {
            Part::InlineData(blob) => {
                assert_eq!(blob.mime_type, "application/pdf");
                assert_eq!(blob.data, "JVBERi0xLjc=");
            }
            other => panic!("expected inline data, got {other:?}"),
        }
    }

    #[test]
    fn parts_serialize_to_gemini_wire_shape() {
        let json = serde_json::to_value(Part::text("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "hi"}));

        let json = serde_json::to_value(Part::from_input(&file_input())).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"inlineData": {"mimeType": "application/pdf", "data": "JVBERi0xLjc="}})
        );
    }

    #[test]
    fn empty_api_key_is_a_configuration_error() {
        let err = GeminiConfig::new("   ").unwrap_err();
        assert!(matches!(err, AuditError::Configuration(_)));
    }

    #[test]
    fn missing_env_credential_carries_the_shared_hint() {
        std::env::remove_var("GEMINI_API_KEY");
        std::env::remove_var("API_KEY");
        let err = GeminiConfig::from_env().unwrap_err();
        assert!(matches!(&err, AuditError::Configuration(msg) if msg == MISSING_KEY_HINT));
    }

    #[test]
    fn config_defaults() {
        let config = GeminiConfig::new("test-key").unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.base_url.starts_with("https://generativelanguage"));
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn unparseable_body_is_a_schema_error() {
        let err = parse_audit_result("not json").unwrap_err();
        assert!(matches!(err, AuditError::Schema(_)));
    }

    #[test]
    fn request_body_carries_schema_and_json_mime() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: build_parts(&text_input("brief"), &text_input("work")),
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: audit_response_schema(),
                temperature: AUDIT_TEMPERATURE,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");
        assert!(json["generationConfig"]["responseSchema"]["required"].is_array());
        assert_eq!(json["contents"][0]["parts"].as_array().unwrap().len(), 5);
    }

    // Async-path tests against a local one-shot HTTP server

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one request with a canned response, returning the base
    /// URL to point the client at.
    async fn spawn_one_shot_server(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 8192];

            // Drain headers plus the declared body before answering
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if let Some(header_end) = find_blank_line(&request) {
                    let headers = String::from_utf8_lossy(&request[..header_end]);
                    let content_length = headers
                        .lines()
                        .find_map(|line| {
                            let (name, value) = line.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())?
                        })
                        .unwrap_or(0);
                    if request.len() - (header_end + 4) >= content_length {
                        break;
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{addr}")
    }

    fn find_blank_line(bytes: &[u8]) -> Option<usize> {
        bytes.windows(4).position(|w| w == b"\r\n\r\n")
    }

    fn client_against(base_url: String) -> GeminiClient {
        let mut config = GeminiConfig::new("test-key").unwrap();
        config.base_url = base_url;
        GeminiClient::new(config)
    }

    fn audit_result_json() -> String {
        serde_json::json!({
            "overallGrade": "High 2:1",
            "overallScore": 68,
            "summary": "Solid work.",
            "assignmentTaskSummary": "Write 500 words on X.",
            "rubricContext": "Intro 20, Body 60, Conclusion 20.",
            "rubricBreakdown": [{
                "criterion": "Intro",
                "score": 14.0,
                "maxScore": 20.0,
                "performance": "Good",
                "feedback": "**Clear thesis** but weak hook."
            }],
            "criticalImprovements": ["Cite sources."],
            "reachingForTheStars": ["Charts.", "Papers.", "Style guide."]
        })
        .to_string()
    }

    #[tokio::test]
    async fn analyze_parses_a_structured_response() {
        let body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": audit_result_json()}]}}]
        })
        .to_string();
        let base_url = spawn_one_shot_server("200 OK", body).await;

        let client = client_against(base_url);
        let result = client
            .analyze(&text_input("brief"), &text_input("work"))
            .await
            .unwrap();

        assert_eq!(result.overall_score, 68);
        assert_eq!(result.rubric_breakdown[0].criterion, "Intro");
    }

    #[tokio::test]
    async fn http_failure_is_a_transport_error() {
        let base_url =
            spawn_one_shot_server("403 Forbidden", r#"{"error": "denied"}"#.to_string()).await;

        let client = client_against(base_url);
        let err = client
            .analyze(&text_input("brief"), &text_input("work"))
            .await
            .unwrap_err();

        assert!(matches!(&err, AuditError::Transport(msg) if msg.contains("403")));
    }

    #[tokio::test]
    async fn empty_candidate_list_is_a_schema_error() {
        let base_url = spawn_one_shot_server("200 OK", r#"{"candidates": []}"#.to_string()).await;

        let client = client_against(base_url);
        let err = client
            .analyze(&text_input("brief"), &text_input("work"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuditError::Schema(_)));
    }
}
