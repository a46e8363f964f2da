use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::models::DAILY_QUESTION_COUNT;

/// Instruction sent to the model. The date only salts the request.
pub fn daily_prompt(date: NaiveDate) -> String {
    format!(
        "Generate {count} unique, challenging, and educational multiple-choice questions for a Greek language learner at B1 (Intermediate) level.
Focus on:
- B1 Grammar (Subjunctive, Future Continuous, Passive Voice, etc.)
- Essential Vocabulary
- Idioms common in Greece

The output must be a JSON array of objects.
Date Context: {date}
",
        count = DAILY_QUESTION_COUNT,
        date = date.format("%Y-%m-%d"),
    )
}

/// Structured-output schema for one batch.
pub(crate) fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "questionText": {
                    "type": "STRING",
                    "description": "The question in Greek, suitable for B1 level (grammar, vocabulary, or comprehension)."
                },
                "options": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "A list of exactly 4 possible answers in Greek."
                },
                "correctAnswerIndex": {
                    "type": "INTEGER",
                    "description": "The zero-based index (0-3) of the correct answer in the options array."
                },
                "explanation": {
                    "type": "STRING",
                    "description": "A brief explanation of why the answer is correct, in English or simple Greek."
                }
            },
            "required": ["questionText", "options", "correctAnswerIndex", "explanation"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_date_and_count() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 25).unwrap();
        let prompt = daily_prompt(date);
        assert!(prompt.starts_with("Generate 7 unique"));
        assert!(prompt.contains("Date Context: 2024-03-25"));
        assert!(prompt.contains("Idioms common in Greece"));
    }

    #[test]
    fn test_schema_requires_every_field() {
        let schema = response_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
        assert_eq!(schema["type"], "ARRAY");
    }
}
