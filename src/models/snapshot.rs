use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::Question;

/// The persisted form of one day's batch: the questions plus when they were
/// generated. Progress is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSnapshot {
    pub questions: Vec<Question>,
    pub date_generated: String,
}

impl QuizSnapshot {
    pub fn new(questions: Vec<Question>, generated_at: DateTime<Utc>) -> Self {
        Self {
            questions,
            date_generated: iso_timestamp(generated_at),
        }
    }
}

/// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
pub(crate) fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
