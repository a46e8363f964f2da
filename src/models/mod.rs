mod question;
mod snapshot;

pub use question::{Question, DAILY_QUESTION_COUNT, OPTION_COUNT};
pub use snapshot::QuizSnapshot;
pub(crate) use snapshot::iso_timestamp;

/// Top-level screen currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppView {
    #[default]
    Home,
    Quiz,
    Results,
}
