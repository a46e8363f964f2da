//! # greek-daily
//!
//! A daily Greek B1 multiple-choice quiz for the terminal. Seven questions are
//! generated once per calendar day by a language model, cached on disk, and
//! reviewed one at a time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use greek_daily::{DailyCache, DailyQuiz, DayBoundary, FileStore, GeminiSource, Locale, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let store = FileStore::open(".greek-daily")?;
//!     let cache = DailyCache::new(store, DayBoundary::Utc);
//!     let source = Arc::new(GeminiSource::new(None));
//!
//!     DailyQuiz::new(cache, source, Locale::En).run().await
//! }
//! ```

mod app;
pub mod cache;
mod card;
pub mod config;
mod error;
pub mod i18n;
mod models;
pub mod scoring;
pub mod session;
pub mod source;
pub mod storage;
pub mod terminal;
mod ui;

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tokio::sync::mpsc;

pub use app::App;
pub use cache::{DailyCache, DayBoundary};
pub use card::QuestionCard;
pub use config::{Cli, Config};
pub use error::{GenerationError, QuizError, QuizResult, StorageError};
pub use i18n::Locale;
pub use models::{AppView, DAILY_QUESTION_COUNT, OPTION_COUNT, Question, QuizSnapshot};
pub use session::{QuizSession, QuizState};
pub use source::{GeminiSource, QuestionSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

type GenerationOutcome = (NaiveDate, Result<Vec<Question>, GenerationError>);

/// A daily quiz that can be run in the terminal.
pub struct DailyQuiz<S> {
    app: App<S>,
    source: Arc<dyn QuestionSource>,
}

impl<S: KeyValueStore> DailyQuiz<S> {
    /// Load today's batch from `cache`, if any, and wire up the source used
    /// when a new batch is needed.
    pub fn new(cache: DailyCache<S>, source: Arc<dyn QuestionSource>, locale: Locale) -> Self {
        Self {
            app: App::new(QuizSession::initialize(cache), locale),
            source,
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, &self.source).await;
        terminal::restore()?;
        result
    }

    pub fn app(&self) -> &App<S> {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App<S> {
        &mut self.app
    }
}

async fn run_event_loop<S: KeyValueStore>(
    terminal: &mut terminal::AppTerminal,
    app: &mut App<S>,
    source: &Arc<dyn QuestionSource>,
) -> Result<(), QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<GenerationOutcome>();

    loop {
        if let Ok((date, outcome)) = rx.try_recv() {
            app.finish_generation(date, outcome)?;
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(app, key.code) {
                Intent::Quit => break,
                Intent::Generate(date) => spawn_generation(Arc::clone(source), date, tx.clone()),
                Intent::None => {}
            }
        }
    }

    Ok(())
}

fn spawn_generation(
    source: Arc<dyn QuestionSource>,
    date: NaiveDate,
    tx: mpsc::UnboundedSender<GenerationOutcome>,
) {
    tokio::spawn(async move {
        let outcome = source.generate_daily_questions(date).await;
        if tx.send((date, outcome)).is_err() {
            log::warn!("Generation finished after the quiz closed");
        }
    });
}

enum Intent {
    None,
    Quit,
    Generate(NaiveDate),
}

fn handle_input<S: KeyValueStore>(app: &mut App<S>, key: KeyCode) -> Intent {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return Intent::Quit;
    }
    if matches!(key, KeyCode::Char('x') | KeyCode::Char('X')) {
        app.dismiss_error();
        return Intent::None;
    }
    if app.session().state().loading {
        return Intent::None;
    }

    match app.view() {
        AppView::Home => handle_home_input(app, key),
        AppView::Quiz => {
            handle_quiz_input(app, key);
            Intent::None
        }
        AppView::Results => {
            handle_results_input(app, key);
            Intent::None
        }
    }
}

fn handle_home_input<S: KeyValueStore>(app: &mut App<S>, key: KeyCode) -> Intent {
    match key {
        KeyCode::Enter => match app.start_quiz() {
            Some(date) => Intent::Generate(date),
            None => Intent::None,
        },
        KeyCode::Esc => Intent::Quit,
        _ => Intent::None,
    }
}

fn handle_quiz_input<S: KeyValueStore>(app: &mut App<S>, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Char(' ') => app.select_highlighted_option(),
        KeyCode::Char(c @ 'a'..='d') => app.select_option(c as usize - 'a' as usize),
        KeyCode::Char(c @ '1'..='4') => app.select_option(c as usize - '1' as usize),
        KeyCode::Enter => app.confirm(),
        KeyCode::Char('h') | KeyCode::Esc => app.go_home(),
        _ => {}
    }
}

fn handle_results_input<S: KeyValueStore>(app: &mut App<S>, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.scroll_results_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_results_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        KeyCode::Char('h') | KeyCode::Esc => app.go_home(),
        _ => {}
    }
}
