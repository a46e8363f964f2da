//! Question source backed by the Gemini `generateContent` REST endpoint.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

use super::QuestionSource;
use super::prompt::{daily_prompt, response_schema};
use super::schema::parse_questions;
use crate::error::GenerationError;
use crate::models::Question;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

pub struct GeminiSource {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    temperature: f32,
}

impl GeminiSource {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(&self, date: NaiveDate) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": daily_prompt(date) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "temperature": self.temperature,
            }
        })
    }
}

#[async_trait]
impl QuestionSource for GeminiSource {
    async fn generate_daily_questions(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Question>, GenerationError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| GenerationError::Request("no API key configured".to_string()))?;

        log::info!("Requesting daily questions from {} for {}", self.model, date);

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key.expose_secret())
            .json(&self.request_body(date))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Upstream { status, body });
        }

        let response_json: Value = response.json().await?;
        let text = extract_text(&response_json).ok_or(GenerationError::EmptyResponse)?;

        let questions = parse_questions(text)?;
        log::info!("Received {} questions", questions.len());
        Ok(questions)
    }
}

/// The generated text of the first candidate, if there is any.
fn extract_text(response: &Value) -> Option<&str> {
    response
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_trims_trailing_slash() {
        let source = GeminiSource::new(None)
            .with_base_url("http://localhost:1234/")
            .with_model("test-model");
        assert_eq!(
            source.url(),
            "http://localhost:1234/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let source = GeminiSource::new(None).with_temperature(0.3);
        let date = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        let body = source.request_body(date);

        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.3).abs() < 1e-6);
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(text.contains("2024-03-25"));
    }

    #[test]
    fn test_extract_text() {
        let response = json!({
            "candidates": [{ "content": { "parts": [{ "text": "[]" }] } }]
        });
        assert_eq!(extract_text(&response), Some("[]"));
        assert_eq!(extract_text(&json!({ "candidates": [] })), None);

        let blank = json!({
            "candidates": [{ "content": { "parts": [{ "text": "  " }] } }]
        });
        assert_eq!(extract_text(&blank), None);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let source = GeminiSource::new(None).with_base_url("http://127.0.0.1:9");
        let date = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        let err = source.generate_daily_questions(date).await.unwrap_err();
        assert!(matches!(err, GenerationError::Request(_)));
    }
}
