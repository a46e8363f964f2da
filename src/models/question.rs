use serde::{Deserialize, Serialize};

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

/// Number of questions in one daily batch.
pub const DAILY_QUESTION_COUNT: usize = 7;

/// A single multiple-choice question.
///
/// Serialized with camelCase field names so stored snapshots keep the
/// `questionText` / `correctAnswerIndex` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub question_text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_answer_index
    }

    pub fn correct_option(&self) -> &str {
        self.options
            .get(self.correct_answer_index)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
