use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use greek_daily::{Cli, Config, DailyCache, DailyQuiz, FileStore, GeminiSource, QuizError};

#[tokio::main]
async fn main() {
    // Load .env before parsing so its values act as env fallbacks.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), QuizError> {
    let config = Config::from_cli(cli)?;
    init_logging(&config.log_file)?;
    log::info!(
        "Starting with cache at {} (model {})",
        config.cache_dir.display(),
        config.model
    );
    if config.api_key.is_none() {
        log::warn!("No API key configured, only cached quizzes can be played");
    }

    let store = FileStore::open(&config.cache_dir)?;
    let cache = DailyCache::new(store, config.day_boundary);
    let source = GeminiSource::new(config.api_key.clone())
        .with_base_url(config.api_base_url.clone())
        .with_model(config.model.clone())
        .with_temperature(config.temperature);

    DailyQuiz::new(cache, Arc::new(source), config.locale)
        .run()
        .await
}

// The terminal is in raw mode while the quiz runs, so logs go to a file.
fn init_logging(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
