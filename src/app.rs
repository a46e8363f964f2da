use chrono::NaiveDate;

use crate::card::QuestionCard;
use crate::error::{GenerationError, QuizResult};
use crate::i18n::Locale;
use crate::models::{AppView, Question};
use crate::session::{QuizSession, StartRequest};
use crate::storage::KeyValueStore;

/// Everything the terminal UI needs: the session plus screen-local state.
pub struct App<S> {
    session: QuizSession<S>,
    card: QuestionCard,
    result_scroll: usize,
    result_scroll_max: usize,
    locale: Locale,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(session: QuizSession<S>, locale: Locale) -> Self {
        Self {
            session,
            card: QuestionCard::new(),
            result_scroll: 0,
            result_scroll_max: 0,
            locale,
        }
    }

    pub fn session(&self) -> &QuizSession<S> {
        &self.session
    }

    pub fn view(&self) -> AppView {
        self.session.view()
    }

    pub fn card(&self) -> &QuestionCard {
        &self.card
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.state().current_question()
    }

    pub fn today(&self) -> NaiveDate {
        self.session.cache().today()
    }

    /// Start or review the quiz. Returns the date to generate for when the
    /// caller has to run the question source.
    pub fn start_quiz(&mut self) -> Option<NaiveDate> {
        match self.session.begin_start() {
            StartRequest::Started => {
                self.card = QuestionCard::new();
                None
            }
            StartRequest::Generate(date) => Some(date),
            StartRequest::Busy => None,
        }
    }

    pub fn finish_generation(
        &mut self,
        date: NaiveDate,
        outcome: Result<Vec<Question>, GenerationError>,
    ) -> QuizResult<()> {
        self.session.complete_start(date, outcome)?;
        self.card = QuestionCard::new();
        Ok(())
    }

    pub fn select_next_option(&mut self) {
        self.card.move_cursor_down();
    }

    pub fn select_previous_option(&mut self) {
        self.card.move_cursor_up();
    }

    pub fn select_highlighted_option(&mut self) {
        self.card.select_cursor();
    }

    pub fn select_option(&mut self, option: usize) {
        self.card.select(option);
    }

    /// Enter on the quiz screen: submit, or go to the next question once
    /// submitted.
    pub fn confirm(&mut self) {
        if !self.card.is_submitted() {
            if self.card.selected().is_none() {
                self.card.select_cursor();
            }
            self.card.submit();
            return;
        }

        let Some(answer) = self.card.advance() else {
            return;
        };
        if let Some(outcome) = self.session.answer(answer) {
            if outcome.finished {
                self.result_scroll = 0;
            }
        }
    }

    /// Back into the same batch from the results screen.
    pub fn restart(&mut self) {
        self.session.retry();
        self.card = QuestionCard::new();
        self.result_scroll = 0;
    }

    pub fn go_home(&mut self) {
        self.session.go_home();
    }

    pub fn dismiss_error(&mut self) {
        self.session.dismiss_error();
    }

    pub fn scroll_results_down(&mut self) {
        self.result_scroll = (self.result_scroll + 1).min(self.result_scroll_max);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    /// Bound the review scroll by what was last rendered: `content_lines`
    /// wrapped lines shown through a viewport `viewport` lines tall.
    pub fn fit_result_scroll(&mut self, content_lines: usize, viewport: usize) {
        self.result_scroll_max = content_lines.saturating_sub(viewport);
        self.result_scroll = self.result_scroll.min(self.result_scroll_max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{DailyCache, DayBoundary};
    use crate::models::QuizSnapshot;
    use crate::storage::MemoryStore;

    fn app_with_batch() -> App<MemoryStore> {
        let questions: Vec<Question> = (0..7)
            .map(|i| Question {
                id: i + 1,
                question_text: format!("q{}", i + 1),
                options: ["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer_index: (i % 4) as usize,
                explanation: "e".into(),
            })
            .collect();
        let mut cache = DailyCache::new(MemoryStore::new(), DayBoundary::Utc);
        let key = cache.key_for_today();
        cache
            .save(&key, &QuizSnapshot::new(questions, chrono::Utc::now()))
            .unwrap();
        App::new(QuizSession::initialize(cache), Locale::En)
    }

    #[test]
    fn test_confirm_submits_then_advances() {
        let mut app = app_with_batch();
        assert_eq!(app.start_quiz(), None);
        assert_eq!(app.view(), AppView::Quiz);

        app.select_option(0);
        app.confirm();
        assert!(app.card().is_submitted());
        assert_eq!(app.session().state().current_index, 0);

        app.confirm();
        assert!(!app.card().is_submitted());
        assert_eq!(app.session().state().answers, vec![0]);
        assert_eq!(app.session().state().score, 1);
    }

    #[test]
    fn test_enter_without_selection_takes_highlight() {
        let mut app = app_with_batch();
        app.start_quiz();
        app.select_next_option();
        app.confirm();
        assert_eq!(app.card().selected(), Some(1));
    }

    #[test]
    fn test_full_run_reaches_results_and_restart() {
        let mut app = app_with_batch();
        app.start_quiz();
        for _ in 0..7 {
            app.select_option(0);
            app.confirm();
            app.confirm();
        }
        assert_eq!(app.view(), AppView::Results);
        assert_eq!(app.session().state().score, 2);

        app.fit_result_scroll(49, 10);
        app.scroll_results_down();
        assert_eq!(app.result_scroll(), 1);

        app.restart();
        assert_eq!(app.view(), AppView::Quiz);
        assert_eq!(app.result_scroll(), 0);
        assert!(app.session().state().answers.is_empty());
    }

    #[test]
    fn test_result_scroll_follows_rendered_height() {
        let mut app = app_with_batch();
        // Nothing rendered yet.
        app.scroll_results_down();
        assert_eq!(app.result_scroll(), 0);

        // Wrapped text makes the review longer than seven lines a question.
        app.fit_result_scroll(80, 12);
        for _ in 0..100 {
            app.scroll_results_down();
        }
        assert_eq!(app.result_scroll(), 68);

        // A wider terminal shortens the review again.
        app.fit_result_scroll(49, 12);
        assert_eq!(app.result_scroll(), 37);
        app.scroll_results_up();
        assert_eq!(app.result_scroll(), 36);
    }

    #[test]
    fn test_start_without_questions_requests_generation() {
        let cache = DailyCache::new(MemoryStore::new(), DayBoundary::Utc);
        let mut app = App::new(QuizSession::initialize(cache), Locale::En);
        let date = app.start_quiz();
        assert_eq!(date, Some(app.today()));
        assert!(app.session().state().loading);
        assert_eq!(app.start_quiz(), None);
    }
}
