//! Generative AI client
//!
//! Single request/response calls against the Gemini generateContent
//! endpoint, text-only for the assistant and text+image for diagnosis.
//! No retry, no streaming; callers apply their own backpressure.

use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Generative AI API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    vision_model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a new GeminiClient
    pub fn new(
        api_key: String,
        base_url: String,
        text_model: String,
        vision_model: String,
    ) -> Self {
        // Vision calls carry image payloads and can be slow
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            base_url,
            text_model,
            vision_model,
        }
    }

    /// Send a free-text prompt to the text model and return the raw reply.
    pub async fn generate_text(&self, prompt: &str) -> AppResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
        };
        self.generate(&self.text_model, &request).await
    }

    /// Send a prompt plus an inline image to the vision model and return
    /// the free-form text reply.
    pub async fn generate_vision(
        &self,
        prompt: &str,
        image: &[u8],
        mime_type: &str,
    ) -> AppResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: mime_type.to_string(),
                            data: BASE64.encode(image),
                        },
                    },
                ],
            }],
        };
        self.generate(&self.vision_model, &request).await
    }

    async fn generate(&self, model: &str, request: &GenerateContentRequest) -> AppResult<String> {
        if self.api_key.is_empty() {
            return Err(AppError::AssistantUnavailable(
                "no API key configured".to_string(),
            ));
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::AssistantUnavailable(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AssistantUnavailable(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let data: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::AssistantUnavailable(format!("malformed response: {}", e)))?;

        extract_text(data)
    }
}

/// Join the text parts of the first candidate
fn extract_text(data: GenerateContentResponse) -> AppResult<String> {
    let text: String = data
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AppError::AssistantUnavailable(
            "response contained no text".to_string(),
        ));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_joined_candidate_text() {
        let data: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "Use neem "}, {"text": "oil spray."}]}
            }]
        }))
        .unwrap();

        assert_eq!(extract_text(data).unwrap(), "Use neem oil spray.");
    }

    #[test]
    fn empty_candidates_is_unavailable() {
        let data: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({"candidates": []})).unwrap();
        assert!(matches!(
            extract_text(data),
            Err(AppError::AssistantUnavailable(_))
        ));
    }

    #[test]
    fn inline_data_serializes_with_snake_case_keys() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "aGVsbG8=".to_string(),
            },
        };
        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value["inline_data"]["mime_type"], "image/jpeg");
        assert_eq!(value["inline_data"]["data"], "aGVsbG8=");
    }
}
