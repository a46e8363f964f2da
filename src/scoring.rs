//! Progress and result figures shown on the quiz and results screens.

/// Progress through the current batch.
///
/// The label reports answered questions, while the bar already counts the
/// question on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub question_number: usize,
    pub total: usize,
    pub completed_percent: u32,
    pub bar_ratio: f64,
}

impl Progress {
    pub fn new(current_index: usize, total: usize) -> Self {
        if total == 0 {
            return Self {
                question_number: 0,
                total: 0,
                completed_percent: 0,
                bar_ratio: 0.0,
            };
        }

        Self {
            question_number: current_index + 1,
            total,
            completed_percent: rounded_percent(current_index, total),
            bar_ratio: ((current_index + 1) as f64 / total as f64).min(1.0),
        }
    }
}

/// Message tier for a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Excellent,
    VeryGood,
    Good,
    KeepPracticing,
}

impl ResultTier {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100.. => ResultTier::Excellent,
            70..=99 => ResultTier::VeryGood,
            50..=69 => ResultTier::Good,
            _ => ResultTier::KeepPracticing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ResultTier,
}

impl ScoreSummary {
    pub fn new(score: usize, total: usize) -> Self {
        let percentage = rounded_percent(score, total);
        Self {
            score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
        }
    }
}

fn rounded_percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
