//! Core types for the flashcard store.

use serde::{Deserialize, Serialize};

/// Highest value a card's progress counter can reach.
pub const MAX_PROGRESS: u8 = 5;

/// A single question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub category: String,
    pub question: String,
    pub answer: String,
    pub progress: u8,
}

impl Card {
    /// Create a fresh card with zero progress.
    pub fn new(id: i64, category: String, question: String, answer: String) -> Self {
        Self {
            id,
            category,
            question,
            answer,
            progress: 0,
        }
    }

    /// Bump progress after a correct answer, saturating at [`MAX_PROGRESS`].
    /// Returns true if the counter moved.
    pub fn record_correct_answer(&mut self) -> bool {
        if self.progress < MAX_PROGRESS {
            self.progress += 1;
            true
        } else {
            false
        }
    }

    pub fn is_mastered(&self) -> bool {
        self.progress >= MAX_PROGRESS
    }

    pub(crate) fn in_category(&self, lowered_category: &str) -> bool {
        self.category.to_lowercase() == lowered_category
    }

    pub(crate) fn contains_keyword(&self, lowered_keyword: &str) -> bool {
        self.question.to_lowercase().contains(lowered_keyword)
            || self.answer.to_lowercase().contains(lowered_keyword)
            || self.category.to_lowercase().contains(lowered_keyword)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

/// Number of cards filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub card_count: usize,
}

/// Matching mode for practice answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingMode {
    Exact,
    CaseInsensitive,
    Fuzzy,
}

impl Default for MatchingMode {
    fn default() -> Self {
        Self::CaseInsensitive
    }
}

impl MatchingMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CaseInsensitive => "case_insensitive",
            Self::Fuzzy => "fuzzy",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "exact" => Some(Self::Exact),
            "case_insensitive" => Some(Self::CaseInsensitive),
            "fuzzy" => Some(Self::Fuzzy),
            _ => None,
        }
    }
}

/// How a practice session judges answers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PracticeOptions {
    pub matching_mode: MatchingMode,
    /// Only consulted in [`MatchingMode::Fuzzy`].
    pub fuzzy_threshold: f64,
}

impl Default for PracticeOptions {
    fn default() -> Self {
        Self {
            matching_mode: MatchingMode::default(),
            fuzzy_threshold: 0.8,
        }
    }
}

/// Outcome of a finished (or abandoned) practice session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeReport {
    pub category: String,
    pub correct: usize,
    /// Questions actually answered.
    pub answered: usize,
    /// Cards selected for the session.
    pub session_size: usize,
    /// False when the answer source ran dry before the last question.
    pub completed: bool,
}

impl PracticeReport {
    /// Share of answered questions that were correct, from 0.0 to 100.0.
    pub fn percentage(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        self.correct as f64 / self.answered as f64 * 100.0
    }
}
