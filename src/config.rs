use std::path::PathBuf;

use clap::Parser;
use secrecy::SecretString;

use crate::cache::DayBoundary;
use crate::error::{QuizError, QuizResult};
use crate::i18n::Locale;
use crate::source::{DEFAULT_API_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

const APP_DIR_NAME: &str = "greek-daily";
const LOG_FILE_NAME: &str = "greek-daily.log";

/// Daily Greek B1 quiz in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used to generate questions
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the Gemini API
    #[arg(long, env = "GEMINI_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    /// Sampling temperature for generation
    #[arg(long, env = "GREEK_DAILY_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Directory holding the daily question cache
    #[arg(long, env = "GREEK_DAILY_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// File receiving log output
    #[arg(long, env = "GREEK_DAILY_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Interface language
    #[arg(long, env = "GREEK_DAILY_LOCALE", value_enum, default_value_t = Locale::En)]
    pub locale: Locale,

    /// Which calendar day counts as today
    #[arg(long, env = "GREEK_DAILY_DAY_BOUNDARY", value_enum, default_value_t = DayBoundary::Utc)]
    pub day_boundary: DayBoundary,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<SecretString>,
    pub model: String,
    pub api_base_url: String,
    pub temperature: f32,
    pub cache_dir: PathBuf,
    pub log_file: PathBuf,
    pub locale: Locale,
    pub day_boundary: DayBoundary,
}

impl Config {
    pub fn from_cli(cli: Cli) -> QuizResult<Self> {
        let cache_dir = cli.cache_dir.unwrap_or_else(default_cache_dir);
        let log_file = cli
            .log_file
            .unwrap_or_else(|| cache_dir.join(LOG_FILE_NAME));

        let config = Self {
            api_key: cli
                .api_key
                .filter(|key| !key.trim().is_empty())
                .map(SecretString::from),
            model: cli.model,
            api_base_url: cli.api_base_url,
            temperature: cli.temperature,
            cache_dir,
            log_file,
            locale: cli.locale,
            day_boundary: cli.day_boundary,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> QuizResult<()> {
        if self.model.trim().is_empty() {
            return Err(QuizError::Config("model name is empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(QuizError::Config(format!(
                "temperature {} is outside 0.0..=2.0",
                self.temperature
            )));
        }
        Ok(())
    }
}

fn default_cache_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".greek-daily"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["greek-daily"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_explicit_flags() {
        let cli = parse(&[
            "--api-key",
            "secret",
            "--model",
            "gemini-test",
            "--cache-dir",
            "/tmp/greek",
            "--locale",
            "el",
            "--day-boundary",
            "local",
        ]);
        let config = Config::from_cli(cli).unwrap();

        assert!(config.api_key.is_some());
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.cache_dir, PathBuf::from("/tmp/greek"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/greek/greek-daily.log"));
        assert_eq!(config.locale, Locale::El);
        assert_eq!(config.day_boundary, DayBoundary::Local);
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let cli = parse(&["--api-key", "  ", "--cache-dir", "/tmp/greek"]);
        let config = Config::from_cli(cli).unwrap();
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_rejects_bad_temperature() {
        let cli = parse(&["--temperature", "3.5", "--cache-dir", "/tmp/greek"]);
        assert!(matches!(Config::from_cli(cli), Err(QuizError::Config(_))));
    }

    #[test]
    fn test_rejects_empty_model() {
        let cli = parse(&["--model", " ", "--cache-dir", "/tmp/greek"]);
        assert!(matches!(Config::from_cli(cli), Err(QuizError::Config(_))));
    }
}
