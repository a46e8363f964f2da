use std::io;

use thiserror::Error;

/// Top-level error for running the quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failure of the key-value store backing the daily cache.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access key {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Any fault while obtaining a question batch. All variants surface to the
/// user as the same generic message.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("upstream returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("no data returned from the model")]
    EmptyResponse,

    #[error("response is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response does not match the question schema: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(err: reqwest::Error) -> Self {
        GenerationError::Request(err.to_string())
    }
}

pub type QuizResult<T> = Result<T, QuizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GenerationError::Upstream {
            status: 503,
            body: "overloaded".into(),
        };
        assert_eq!(err.to_string(), "upstream returned 503: overloaded");

        let err = QuizError::Config("model name is empty".into());
        assert_eq!(err.to_string(), "Configuration error: model name is empty");
    }

    #[test]
    fn test_storage_error_wraps_into_quiz_error() {
        let storage = StorageError::Io {
            key: "greek_b1_quiz_2024-03-25".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        let err: QuizError = storage.into();
        assert!(err.to_string().starts_with("Storage error: failed to access key greek_b1_quiz_2024-03-25"));
    }
}
