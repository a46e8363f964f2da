//! Per-question interaction: pick an option, submit it, then move on.
//!
//! A card exists for exactly one question and is replaced for the next.

use crate::models::OPTION_COUNT;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionCard {
    cursor: usize,
    selected: Option<usize>,
    submitted: bool,
}

impl QuestionCard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn move_cursor_down(&mut self) {
        if !self.submitted {
            self.cursor = (self.cursor + 1) % OPTION_COUNT;
        }
    }

    pub fn move_cursor_up(&mut self) {
        if !self.submitted {
            self.cursor = (self.cursor + OPTION_COUNT - 1) % OPTION_COUNT;
        }
    }

    /// Select `option`. Ignored once submitted or when out of range.
    pub fn select(&mut self, option: usize) {
        if self.submitted || option >= OPTION_COUNT {
            return;
        }
        self.cursor = option;
        self.selected = Some(option);
    }

    pub fn select_cursor(&mut self) {
        self.select(self.cursor);
    }

    /// Freeze the selection. Returns false when nothing is selected yet.
    pub fn submit(&mut self) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.submitted = true;
        true
    }

    /// The frozen selection to record, only available after submitting.
    /// Resets the card.
    pub fn advance(&mut self) -> Option<usize> {
        if !self.submitted {
            return None;
        }
        let answer = self.selected;
        *self = Self::new();
        answer
    }
}
