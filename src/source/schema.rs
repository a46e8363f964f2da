use serde::Deserialize;
use serde_json::Value;

use crate::error::GenerationError;
use crate::models::{DAILY_QUESTION_COUNT, OPTION_COUNT, Question};

/// Question as the model returns it: no id yet, loosely typed.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    question_text: String,
    options: Vec<String>,
    correct_answer_index: i64,
    explanation: String,
}

/// Parse the model's JSON text into a validated batch with ids `1..=7`.
///
/// Anything short of an exact match fails the whole batch.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, GenerationError> {
    let value: Value = serde_json::from_str(text.trim())?;
    let raw: Vec<RawQuestion> =
        serde_json::from_value(value).map_err(|e| GenerationError::Schema(e.to_string()))?;

    if raw.len() != DAILY_QUESTION_COUNT {
        return Err(GenerationError::Schema(format!(
            "expected {} questions, got {}",
            DAILY_QUESTION_COUNT,
            raw.len()
        )));
    }

    raw.into_iter()
        .enumerate()
        .map(|(index, raw)| into_question(index as u32 + 1, raw))
        .collect()
}

fn into_question(id: u32, raw: RawQuestion) -> Result<Question, GenerationError> {
    let schema_err = |reason: String| GenerationError::Schema(format!("question {}: {}", id, reason));

    if raw.question_text.trim().is_empty() {
        return Err(schema_err("empty question text".to_string()));
    }
    if raw.options.iter().any(|option| option.trim().is_empty()) {
        return Err(schema_err("empty option".to_string()));
    }

    let option_count = raw.options.len();
    let options: [String; OPTION_COUNT] = raw
        .options
        .try_into()
        .map_err(|_| schema_err(format!("expected {} options, got {}", OPTION_COUNT, option_count)))?;

    let correct_answer_index = usize::try_from(raw.correct_answer_index)
        .ok()
        .filter(|index| *index < OPTION_COUNT)
        .ok_or_else(|| schema_err(format!("answer index {} out of range", raw.correct_answer_index)))?;

    Ok(Question {
        id,
        question_text: raw.question_text,
        options,
        correct_answer_index,
        explanation: raw.explanation,
    })
}
