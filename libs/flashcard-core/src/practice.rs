//! Seam between a practice session and whoever answers the questions.

use crate::types::Card;

/// A question handed to the answer source.
#[derive(Debug, Clone, Copy)]
pub struct PracticePrompt<'a> {
    /// 1-based position in the session.
    pub position: usize,
    pub session_size: usize,
    pub card: &'a Card,
}

/// How one question went.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionOutcome {
    pub card_id: i64,
    pub is_correct: bool,
    pub correct_answer: String,
    pub progress: u8,
}

/// Supplies answers during a practice session.
pub trait AnswerSource {
    /// Return the user's answer, or `None` once input is exhausted.
    fn answer(&mut self, prompt: &PracticePrompt<'_>) -> Option<String>;

    /// Called after each answer is judged.
    fn reveal(&mut self, _outcome: &QuestionOutcome) {}
}

/// Scripted answers, mostly for tests.
impl AnswerSource for std::vec::IntoIter<String> {
    fn answer(&mut self, _prompt: &PracticePrompt<'_>) -> Option<String> {
        self.next()
    }
}
