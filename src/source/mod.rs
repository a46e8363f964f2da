//! Where daily questions come from.

mod gemini;
mod prompt;
mod schema;

pub use gemini::{GeminiSource, DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use prompt::daily_prompt;
pub use schema::parse_questions;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::GenerationError;
use crate::models::Question;

/// Produces one daily batch of questions.
///
/// Implementations return exactly [`DAILY_QUESTION_COUNT`] questions with ids
/// `1..=7`, or fail. They never retry on their own.
///
/// [`DAILY_QUESTION_COUNT`]: crate::models::DAILY_QUESTION_COUNT
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionSource: Send + Sync {
    async fn generate_daily_questions(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<Question>, GenerationError>;
}
