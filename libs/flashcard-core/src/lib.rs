//! Core flashcard library used by the terminal front end.
//!
//! Provides:
//! - The file-backed card store (add, update, delete, list, search, practice)
//! - Codec for the five-line plain-text data file
//! - Answer matching for practice sessions
//! - Shared types (Card, CategorySummary, PracticeReport, etc.)

pub mod error;
pub mod matching;
pub mod parser;
pub mod practice;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use matching::{compare_answers, levenshtein_distance, normalized_similarity, MatchResult};
pub use parser::{parse, serialize, CorruptReason, CorruptRecord, ParsedFile};
pub use practice::{AnswerSource, PracticePrompt, QuestionOutcome};
pub use store::FlashcardStore;
pub use types::{Card, CategorySummary, MatchingMode, PracticeOptions, PracticeReport, MAX_PROGRESS};
