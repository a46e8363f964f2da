//! Date-keyed cache of the daily question batch.

use chrono::{Local, NaiveDate, Utc};
use clap::ValueEnum;
use serde_json::Value;

use crate::error::StorageError;
use crate::models::{DAILY_QUESTION_COUNT, OPTION_COUNT, Question, QuizSnapshot, iso_timestamp};
use crate::storage::KeyValueStore;

/// Prefix of every cache key; the rest is the `YYYY-MM-DD` date.
pub const KEY_PREFIX: &str = "greek_b1_quiz_";

/// Which calendar day "today" refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DayBoundary {
    /// The UTC date, the same day for every user.
    #[default]
    Utc,
    /// The date on the local clock.
    Local,
}

impl DayBoundary {
    pub fn today(self) -> NaiveDate {
        match self {
            DayBoundary::Utc => Utc::now().date_naive(),
            DayBoundary::Local => Local::now().date_naive(),
        }
    }
}

/// Cache key for a given calendar day.
pub fn key_for(date: NaiveDate) -> String {
    format!("{}{}", KEY_PREFIX, date.format("%Y-%m-%d"))
}

pub struct DailyCache<S> {
    store: S,
    boundary: DayBoundary,
}

impl<S: KeyValueStore> DailyCache<S> {
    pub fn new(store: S, boundary: DayBoundary) -> Self {
        Self { store, boundary }
    }

    pub fn today(&self) -> NaiveDate {
        self.boundary.today()
    }

    pub fn key_for_today(&self) -> String {
        key_for(self.today())
    }

    /// Load the snapshot stored under `key`.
    ///
    /// Malformed entries are removed and reported as absent. Read failures of
    /// the store are logged and also reported as absent.
    pub fn load(&mut self, key: &str) -> Option<QuizSnapshot> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No cached quiz under {}", key);
                return None;
            }
            Err(err) => {
                log::warn!("Could not read cached quiz: {}", err);
                return None;
            }
        };

        match parse_snapshot(&raw) {
            Ok(snapshot) => {
                log::info!(
                    "Loaded cached quiz {} ({} questions)",
                    key,
                    snapshot.questions.len()
                );
                Some(snapshot)
            }
            Err(reason) => {
                log::warn!("Discarding corrupt cache entry {}: {}", key, reason);
                if let Err(err) = self.store.remove(key) {
                    log::warn!("Could not remove corrupt cache entry: {}", err);
                }
                None
            }
        }
    }

    /// Persist `snapshot` under `key`, replacing whatever was there.
    pub fn save(&mut self, key: &str, snapshot: &QuizSnapshot) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set(key, &json)?;
        log::info!(
            "Saved quiz {} ({} questions)",
            key,
            snapshot.questions.len()
        );
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

fn parse_snapshot(raw: &str) -> Result<QuizSnapshot, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let questions = match value.get("questions") {
        Some(questions @ Value::Array(_)) => questions.clone(),
        Some(_) => return Err("questions is not a list".to_string()),
        None => return Err("questions is missing".to_string()),
    };
    let questions: Vec<Question> =
        serde_json::from_value(questions).map_err(|e| e.to_string())?;

    // A batch is either not generated yet or complete.
    if !questions.is_empty() && questions.len() != DAILY_QUESTION_COUNT {
        return Err(format!(
            "expected {} questions, found {}",
            DAILY_QUESTION_COUNT,
            questions.len()
        ));
    }

    if let Some(bad) = questions
        .iter()
        .find(|q| q.correct_answer_index >= OPTION_COUNT)
    {
        return Err(format!(
            "question {} has answer index {}",
            bad.id, bad.correct_answer_index
        ));
    }

    let date_generated = value
        .get("dateGenerated")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| iso_timestamp(Utc::now()));

    Ok(QuizSnapshot {
        questions,
        date_generated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn question(id: u32, correct: usize) -> Question {
        Question {
            id,
            question_text: format!("Ερώτηση {}", id),
            options: ["α".into(), "β".into(), "γ".into(), "δ".into()],
            correct_answer_index: correct,
            explanation: "εξήγηση".into(),
        }
    }

    fn full_batch() -> Vec<Question> {
        (1..=7).map(|id| question(id, (id % 4) as usize)).collect()
    }

    fn cache_with(key: &str, raw: &str) -> DailyCache<MemoryStore> {
        let mut store = MemoryStore::new();
        store.set(key, raw).unwrap();
        DailyCache::new(store, DayBoundary::Utc)
    }

    #[test]
    fn test_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(key_for(date), "greek_b1_quiz_2024-03-05");
    }

    #[test]
    fn test_key_for_today_uses_prefix() {
        let cache = DailyCache::new(MemoryStore::new(), DayBoundary::Utc);
        let key = cache.key_for_today();
        assert!(key.starts_with(KEY_PREFIX));
        assert_eq!(key.len(), KEY_PREFIX.len() + "YYYY-MM-DD".len());
    }

    #[test]
    fn test_save_then_load() {
        let mut cache = DailyCache::new(MemoryStore::new(), DayBoundary::Utc);
        let snapshot = QuizSnapshot {
            questions: full_batch(),
            date_generated: "2024-03-25T08:30:00.000Z".into(),
        };
        cache.save("k", &snapshot).unwrap();
        assert_eq!(cache.load("k"), Some(snapshot));
    }

    #[test]
    fn test_missing_entry_is_absent() {
        let mut cache = DailyCache::new(MemoryStore::new(), DayBoundary::Utc);
        assert_eq!(cache.load("k"), None);
    }

    #[test]
    fn test_unparseable_entry_is_removed() {
        let mut cache = cache_with("k", "{not json");
        assert_eq!(cache.load("k"), None);
        assert!(!cache.store().contains("k"));
    }

    #[test]
    fn test_non_list_questions_is_removed() {
        let mut cache = cache_with("k", r#"{"questions": "not-a-list"}"#);
        assert_eq!(cache.load("k"), None);
        assert!(!cache.store().contains("k"));
    }

    #[test]
    fn test_malformed_question_is_removed() {
        let mut cache = cache_with(
            "k",
            r#"{"questions": [{"id": 1, "questionText": "q"}], "dateGenerated": "x"}"#,
        );
        assert_eq!(cache.load("k"), None);
        assert!(!cache.store().contains("k"));
    }

    #[test]
    fn test_out_of_range_answer_index_is_removed() {
        let mut questions = full_batch();
        questions[3].correct_answer_index = 9;
        let raw = serde_json::json!({
            "questions": questions,
            "dateGenerated": "2024-03-25T08:30:00.000Z",
        })
        .to_string();
        let mut cache = cache_with("k", &raw);
        assert_eq!(cache.load("k"), None);
        assert!(cache.store().is_empty());
    }

    #[test]
    fn test_incomplete_batch_is_removed() {
        for count in [1, 6, 8] {
            let questions: Vec<Question> =
                (1..=count).map(|id| question(id, 0)).collect();
            let raw = serde_json::json!({
                "questions": questions,
                "dateGenerated": "2024-03-25T08:30:00.000Z",
            })
            .to_string();
            let mut cache = cache_with("k", &raw);
            assert_eq!(cache.load("k"), None);
            assert!(!cache.store().contains("k"));
        }
    }

    #[test]
    fn test_missing_date_is_stamped() {
        let raw = serde_json::json!({ "questions": full_batch() }).to_string();
        let mut cache = cache_with("k", &raw);
        let snapshot = cache.load("k").unwrap();
        assert_eq!(snapshot.questions.len(), 7);
        assert!(snapshot.date_generated.ends_with('Z'));
    }

    #[test]
    fn test_empty_list_is_kept() {
        let mut cache = cache_with("k", r#"{"questions": [], "dateGenerated": "x"}"#);
        let snapshot = cache.load("k").unwrap();
        assert!(snapshot.questions.is_empty());
        assert!(cache.store().contains("k"));
    }
}
