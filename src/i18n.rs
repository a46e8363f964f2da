//! The two bundled UI locales.

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

use crate::scoring::ResultTier;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    El,
}

pub struct Strings {
    pub level_badge: &'static str,
    pub home_title: &'static str,
    pub home_tagline: &'static str,
    pub start_label: &'static str,
    pub review_label: &'static str,
    pub stat_questions: &'static str,
    pub stat_level: &'static str,
    pub stat_options: &'static str,
    pub loading_title: &'static str,
    pub loading_body: &'static str,
    pub question_word: &'static str,
    pub of_word: &'static str,
    pub completed: &'static str,
    pub explanation: &'static str,
    pub results_title: &'static str,
    pub review_mode: &'static str,
    pub review_answers: &'static str,
    pub your_answer: &'static str,
    pub correct_answer: &'static str,
    pub error_title: &'static str,
    pub home_controls: &'static str,
    pub select_controls: &'static str,
    pub next_controls: &'static str,
    pub results_controls: &'static str,
    pub dismiss_hint: &'static str,
    pub tier_excellent: &'static str,
    pub tier_very_good: &'static str,
    pub tier_good: &'static str,
    pub tier_keep_practicing: &'static str,
}

const EN: Strings = Strings {
    level_badge: "B1 Level",
    home_title: "Greek B1 Daily",
    home_tagline: "Enhance your Greek skills with 7 new B1-level interactive questions every day.",
    start_label: "Start Daily Challenge",
    review_label: "Review Today's Quiz",
    stat_questions: "Questions",
    stat_level: "Level",
    stat_options: "Options",
    loading_title: "Generating Daily Quiz",
    loading_body: "Consulting the AI Oracles to prepare 7 fresh Greek B1 questions for you...",
    question_word: "Question",
    of_word: "of",
    completed: "Completed",
    explanation: "Explanation",
    results_title: "Quiz Complete",
    review_mode: "Review Mode",
    review_answers: "Review Answers",
    your_answer: "Your answer",
    correct_answer: "Correct answer",
    error_title: "Something went wrong",
    home_controls: "enter start  ·  q quit",
    select_controls: "j/k navigate  ·  space or a-d select  ·  enter submit  ·  h home  ·  q quit",
    next_controls: "enter next question  ·  h home  ·  q quit",
    results_controls: "j/k scroll  ·  r review mode  ·  h home  ·  q quit",
    dismiss_hint: "x dismiss",
    tier_excellent: "Άριστα! (Excellent!)",
    tier_very_good: "Πολύ καλά! (Very Good!)",
    tier_good: "Καλά. (Good.)",
    tier_keep_practicing: "Keep practicing!",
};

const EL: Strings = Strings {
    level_badge: "Επίπεδο B1",
    home_title: "Ελληνικά B1 Daily",
    home_tagline: "Βελτίωσε τα ελληνικά σου με 7 νέες ερωτήσεις επιπέδου B1 κάθε μέρα.",
    start_label: "Ξεκίνα τη σημερινή πρόκληση",
    review_label: "Επανάληψη σημερινού κουίζ",
    stat_questions: "Ερωτήσεις",
    stat_level: "Επίπεδο",
    stat_options: "Επιλογές",
    loading_title: "Δημιουργία ημερήσιου κουίζ",
    loading_body: "Ετοιμάζουμε 7 νέες ερωτήσεις επιπέδου B1 για σένα...",
    question_word: "Ερώτηση",
    of_word: "από",
    completed: "Ολοκληρώθηκε",
    explanation: "Εξήγηση",
    results_title: "Το κουίζ ολοκληρώθηκε",
    review_mode: "Λειτουργία επανάληψης",
    review_answers: "Ανασκόπηση απαντήσεων",
    your_answer: "Η απάντησή σου",
    correct_answer: "Σωστή απάντηση",
    error_title: "Κάτι πήγε στραβά",
    home_controls: "enter έναρξη  ·  q έξοδος",
    select_controls: "j/k πλοήγηση  ·  space ή a-d επιλογή  ·  enter υποβολή  ·  h αρχική  ·  q έξοδος",
    next_controls: "enter επόμενη ερώτηση  ·  h αρχική  ·  q έξοδος",
    results_controls: "j/k κύλιση  ·  r επανάληψη  ·  h αρχική  ·  q έξοδος",
    dismiss_hint: "x κλείσιμο",
    tier_excellent: "Άριστα!",
    tier_very_good: "Πολύ καλά!",
    tier_good: "Καλά.",
    tier_keep_practicing: "Συνέχισε την εξάσκηση!",
};

const EL_WEEKDAYS: [&str; 7] = [
    "Δευτέρα",
    "Τρίτη",
    "Τετάρτη",
    "Πέμπτη",
    "Παρασκευή",
    "Σάββατο",
    "Κυριακή",
];

// Genitive forms, as used after a day number.
const EL_MONTHS: [&str; 12] = [
    "Ιανουαρίου",
    "Φεβρουαρίου",
    "Μαρτίου",
    "Απριλίου",
    "Μαΐου",
    "Ιουνίου",
    "Ιουλίου",
    "Αυγούστου",
    "Σεπτεμβρίου",
    "Οκτωβρίου",
    "Νοεμβρίου",
    "Δεκεμβρίου",
];

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::En => &EN,
            Locale::El => &EL,
        }
    }

    pub fn tier_message(self, tier: ResultTier) -> &'static str {
        let strings = self.strings();
        match tier {
            ResultTier::Excellent => strings.tier_excellent,
            ResultTier::VeryGood => strings.tier_very_good,
            ResultTier::Good => strings.tier_good,
            ResultTier::KeepPracticing => strings.tier_keep_practicing,
        }
    }

    /// Long date for the home screen.
    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            Locale::En => date.format("%A, %B %-d, %Y").to_string(),
            Locale::El => format!(
                "{}, {} {} {}",
                EL_WEEKDAYS[date.weekday().num_days_from_monday() as usize],
                date.day(),
                EL_MONTHS[date.month0() as usize],
                date.year()
            ),
        }
    }
}
