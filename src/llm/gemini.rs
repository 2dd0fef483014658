//! Gemini scan client — non-streaming `generateContent` via Google AI API.
//!
//! Call shape:
//! - API key in URL query param, not header
//! - Request: `{contents: [{parts: [{text}]}], safetySettings: [...]}`
//! - Reply text in `candidates[0].content.parts[0].text`
//!
//! A malformed *success* response never errors: missing candidate text
//! degrades to the `unsure` fallback verdict before parsing.

use super::prompts::{build_scan_prompt, safety_settings, GEMINI_MODEL};
use super::types::Verdict;
use crate::error::ScanError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fallback reply text substituted when the response carries no candidate.
const FALLBACK_REPLY: &str = "unsure|No reason provided.";

/// Client for the Gemini classification endpoint.
///
/// Holds the HTTP client and endpoint base so hosts (and tests) can
/// inject their own instead of reading ambient globals.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

impl GeminiClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint base (transport tests point this at a
    /// loopback listener).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Classify one message's text. One POST, no retries.
    ///
    /// Fails with `MissingApiKey` before any I/O when the key is empty,
    /// `Api` on a non-success status (body kept as diagnostic text), and
    /// `Http` when the request doesn't complete.
    pub async fn classify(&self, content: &str, api_key: &str) -> Result<Verdict, ScanError> {
        if api_key.is_empty() {
            log::warn!("[LLM] No API key — refusing to call Gemini");
            return Err(ScanError::MissingApiKey);
        }

        let prompt = build_scan_prompt(content);

        log::info!("[LLM] Model: {}", GEMINI_MODEL);
        log::info!("[LLM] Scanning {} chars", content.len());

        let start = std::time::Instant::now();

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, GEMINI_MODEL, api_key
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "contents": [
                    {
                        "parts": [
                            {
                                "text": prompt
                            }
                        ]
                    }
                ],
                "safetySettings": safety_settings()
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("[LLM] Gemini API returned {}: {}", status, body);
            return Err(ScanError::Api { status, body });
        }

        let body: serde_json::Value = response.json().await?;
        log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

        let reply = match extract_candidate_text(&body) {
            Some(text) if !text.is_empty() => text,
            _ => {
                log::warn!("[LLM] Response had no candidate text — using fallback");
                FALLBACK_REPLY.to_string()
            }
        };

        let verdict = Verdict::parse(&reply);
        log::info!("[LLM] Verdict: {:?}", verdict.rating);
        Ok(verdict)
    }
}

/// Extract the reply text from a Gemini response body.
///
/// Gemini format: candidates[0].content.parts[0].text
fn extract_candidate_text(body: &serde_json::Value) -> Option<String> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}
