/// Gemini API provider
///
/// API Flow:
/// 1. POST {api_url}/models/{model}:generateContent, key in `x-goog-api-key`
/// 2. Reply text = text parts of the first candidate, concatenated
use crate::{
    error::{AppError, AppResult},
    services::providers::GenerativeModel,
};
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

/// Header Gemini reads the API key from. Kept out of the URL so transport
/// errors, which carry the URL, never contain the key.
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: Option<String>, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url: api_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    fn build_request(prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }

    /// Joins the text parts of the first candidate
    fn extract_text(response: GenerateContentResponse) -> AppResult<String> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or(AppError::EmptyCompletion)?;

        let text: String = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.is_empty() {
            return Err(AppError::EmptyCompletion);
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl GenerativeModel for GeminiProvider {
    async fn generate_content(&self, prompt: &str) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AppError::MissingCredential)?;

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, api_key)
            .json(&Self::build_request(prompt))
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Gemini API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;
        tracing::debug!(response = %response_text, "Raw Gemini API response");

        let parsed: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                AppError::ExternalApi(format!("Failed to parse Gemini response: {}", e))
            })?;

        Self::extract_text(parsed)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

// ============================================================================
// Gemini API Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}
