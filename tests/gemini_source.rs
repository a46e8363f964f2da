//! Gemini question source against a mock HTTP server.

use chrono::NaiveDate;
use greek_daily::{GeminiSource, GenerationError, QuestionSource};
use mockito::{Matcher, Server};
use secrecy::SecretString;
use serde_json::{Value, json};

const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
}

fn source(base_url: String) -> GeminiSource {
    GeminiSource::new(Some(SecretString::from("test-key".to_string()))).with_base_url(base_url)
}

fn question_items(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "questionText": format!("Ερώτηση {}", i + 1),
                    "options": ["α", "β", "γ", "δ"],
                    "correctAnswerIndex": i % 4,
                    "explanation": "εξήγηση"
                })
            })
            .collect(),
    )
}

fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_generates_validated_batch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::Regex("Date Context: 2024-03-25".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(&question_items(7).to_string()))
        .create_async()
        .await;

    let questions = source(server.url())
        .generate_daily_questions(date())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(questions.len(), 7);
    assert_eq!(questions[0].id, 1);
    assert_eq!(questions[6].id, 7);
    assert_eq!(questions[5].correct_answer_index, 1);
}

#[tokio::test]
async fn test_upstream_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(500)
        .with_body("internal")
        .create_async()
        .await;

    let err = source(server.url())
        .generate_daily_questions(date())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Upstream { status: 500, .. }));
}

#[tokio::test]
async fn test_missing_text_is_empty_response() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates": []}"#)
        .create_async()
        .await;

    let err = source(server.url())
        .generate_daily_questions(date())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::EmptyResponse));
}

#[tokio::test]
async fn test_short_batch_is_rejected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(&question_items(5).to_string()))
        .create_async()
        .await;

    let err = source(server.url())
        .generate_daily_questions(date())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Schema(_)));
}

#[tokio::test]
async fn test_non_json_text_is_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope("Sorry, I cannot help with that."))
        .create_async()
        .await;

    let err = source(server.url())
        .generate_daily_questions(date())
        .await
        .unwrap_err();

    assert!(matches!(err, GenerationError::Parse(_)));
}
