//! The quiz state machine.
//!
//! One `QuizSession` lives for the whole run. It owns the daily cache, loads
//! today's batch on construction and persists only the batch, never the
//! progress through it.

use chrono::{NaiveDate, Utc};

use crate::cache::{DailyCache, key_for};
use crate::error::{GenerationError, QuizResult};
use crate::models::{AppView, OPTION_COUNT, Question, QuizSnapshot};
use crate::scoring::{Progress, ScoreSummary};
use crate::source::QuestionSource;
use crate::storage::KeyValueStore;

/// Message shown for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate quiz. Please check your connection or API key and try again.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: usize,
    pub answers: Vec<usize>,
    pub is_finished: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub date_generated: String,
}

impl QuizState {
    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    pub fn in_progress(&self) -> bool {
        self.current_index < self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    fn reset_progress(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.answers.clear();
        self.is_finished = false;
    }
}

/// What the synchronous half of `Start` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRequest {
    /// Questions were already loaded; the quiz is on screen.
    Started,
    /// No questions yet; the caller must run the source for this date and
    /// hand the date and outcome to [`QuizSession::complete_start`].
    Generate(NaiveDate),
    /// A generation is already in flight.
    Busy,
}

/// Result of recording one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub finished: bool,
}

pub struct QuizSession<S> {
    state: QuizState,
    view: AppView,
    cache: DailyCache<S>,
}

impl<S: KeyValueStore> QuizSession<S> {
    /// Build a session and adopt today's cached batch, if there is one.
    pub fn initialize(mut cache: DailyCache<S>) -> Self {
        let mut state = QuizState::default();

        let key = cache.key_for_today();
        if let Some(snapshot) = cache.load(&key) {
            if snapshot.questions.is_empty() {
                log::debug!("Cached quiz {} has no questions, ignoring", key);
            } else {
                state.questions = snapshot.questions;
                state.date_generated = snapshot.date_generated;
            }
        }

        Self {
            state,
            view: AppView::Home,
            cache,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn view(&self) -> AppView {
        self.view
    }

    pub fn cache(&self) -> &DailyCache<S> {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut DailyCache<S> {
        &mut self.cache
    }

    pub fn progress(&self) -> Progress {
        Progress::new(self.state.current_index, self.state.questions.len())
    }

    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::new(self.state.score, self.state.questions.len())
    }

    /// Synchronous half of `Start`.
    pub fn begin_start(&mut self) -> StartRequest {
        if self.state.has_questions() {
            self.state.reset_progress();
            self.state.error = None;
            self.view = AppView::Quiz;
            log::debug!("Starting quiz from loaded questions");
            return StartRequest::Started;
        }

        if self.state.loading {
            log::debug!("Start ignored, generation already in flight");
            return StartRequest::Busy;
        }

        self.state.loading = true;
        self.state.error = None;
        StartRequest::Generate(self.cache.today())
    }

    /// Apply the outcome of the generation that `begin_start` requested for
    /// `date`. The batch is stored under that date's key even if the day has
    /// rolled over since.
    ///
    /// Generation failures end up in `state().error`; only a failure to
    /// persist the new batch is returned.
    pub fn complete_start(
        &mut self,
        date: NaiveDate,
        outcome: Result<Vec<Question>, GenerationError>,
    ) -> QuizResult<()> {
        self.state.loading = false;

        let questions = match outcome {
            Ok(questions) => questions,
            Err(err) => {
                log::error!("Error generating quiz: {}", err);
                self.state.error = Some(GENERATION_FAILED_MESSAGE.to_string());
                return Ok(());
            }
        };

        let snapshot = QuizSnapshot::new(questions, Utc::now());
        self.cache.save(&key_for(date), &snapshot)?;

        self.state.questions = snapshot.questions;
        self.state.date_generated = snapshot.date_generated;
        self.state.reset_progress();
        self.view = AppView::Quiz;
        Ok(())
    }

    /// `Start`, awaiting the source inline when a generation is needed.
    pub async fn start<Q>(&mut self, source: &Q) -> QuizResult<()>
    where
        Q: QuestionSource + ?Sized,
    {
        match self.begin_start() {
            StartRequest::Generate(date) => {
                let outcome = source.generate_daily_questions(date).await;
                self.complete_start(date, outcome)
            }
            StartRequest::Started | StartRequest::Busy => Ok(()),
        }
    }

    /// Record `answer` for the current question. A no-op when no question is
    /// on screen or the index is not an option.
    pub fn answer(&mut self, answer: usize) -> Option<AnswerOutcome> {
        if answer >= OPTION_COUNT {
            log::warn!("Ignoring out-of-range answer {}", answer);
            return None;
        }
        let correct = self.state.current_question()?.is_correct(answer);

        self.state.answers.push(answer);
        if correct {
            self.state.score += 1;
        }
        self.state.current_index += 1;

        let finished = self.state.current_index == self.state.questions.len();
        if finished {
            self.state.is_finished = true;
            self.view = AppView::Results;
            log::info!(
                "Quiz finished with {}/{}",
                self.state.score,
                self.state.questions.len()
            );
        }

        Some(AnswerOutcome { correct, finished })
    }

    /// Restart the same batch from the first question.
    pub fn retry(&mut self) {
        self.state.reset_progress();
        self.view = AppView::Quiz;
    }

    pub fn dismiss_error(&mut self) {
        self.state.error = None;
    }

    pub fn go_home(&mut self) {
        self.view = AppView::Home;
    }
}
