//! Google Gemini `generateContent` REST client.

use super::{prompt, FallbackReason, MessageGenerator, TicketMessage};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
enum GeminiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generateContent returned {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },
    #[error("response contained no text")]
    Empty,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect::<String>())
            .unwrap_or_default()
    }
}

pub struct GeminiGenerator {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiGenerator {
    pub fn new(api_key: String, model: String, base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let request = GenerateRequest {
            contents: [Content {
                parts: [RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body: String = response.text().await.unwrap_or_default().chars().take(300).collect();
            return Err(GeminiError::Status { status, body });
        }

        let data: GenerateResponse = response.json().await?;
        let text = data.text().trim().to_string();
        if text.is_empty() {
            return Err(GeminiError::Empty);
        }
        Ok(text)
    }
}

#[async_trait]
impl MessageGenerator for GeminiGenerator {
    async fn ticket_message(&self, student_name: &str, pdb_class: &str, room_name: &str) -> TicketMessage {
        match self.generate(&prompt(student_name, pdb_class, room_name)).await {
            Ok(text) => TicketMessage::Generated(text),
            Err(e) => {
                tracing::warn!(error = %e, model = %self.model, "ticket message generation failed; using fallback");
                TicketMessage::fallback(FallbackReason::ServiceError(e.to_string()))
            }
        }
    }
}
