//! File-backed flashcard store.
//!
//! Cards live in an id-keyed ordered map, so every listing comes out in
//! ascending id order. Each mutation rewrites the whole data file before
//! returning. A write failure leaves the in-memory change in place and
//! reports [`StoreError::Persistence`]; the next successful write catches
//! the file up.

use crate::error::{Result, StoreError};
use crate::matching::compare_answers;
use crate::parser;
use crate::practice::{AnswerSource, PracticePrompt, QuestionOutcome};
use crate::types::{Card, CategorySummary, PracticeOptions, PracticeReport};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory card collection mirrored to a plain-text file.
#[derive(Debug)]
pub struct FlashcardStore {
    path: PathBuf,
    cards: BTreeMap<i64, Card>,
    /// `None` once the id space is used up.
    next_id: Option<i64>,
}

impl FlashcardStore {
    /// Load the store from `path`. A missing file yields an empty store.
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<Self> {
        let path = path.into();
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no data file yet, starting empty");
                Vec::new()
            }
            Err(source) => return Err(StoreError::Persistence { path, source }),
        };
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            tracing::warn!(path = %path.display(), "data file is not valid UTF-8, replacing invalid bytes");
        }

        let parsed = parser::parse(&content);
        for skipped in &parsed.skipped {
            tracing::warn!(
                path = %path.display(),
                line = skipped.line,
                reason = %skipped.reason,
                "skipping corrupt flashcard record"
            );
        }

        let mut cards = BTreeMap::new();
        for card in parsed.cards {
            let id = card.id;
            if cards.insert(id, card).is_some() {
                tracing::warn!(id, "duplicate flashcard id in data file, keeping the later record");
            }
        }
        let next_id = match cards.keys().next_back() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        if next_id.is_none() {
            tracing::warn!(path = %path.display(), "highest id is i64::MAX, no new cards can be added");
        }

        tracing::debug!(path = %path.display(), cards = cards.len(), ?next_id, "loaded flashcards");
        Ok(Self {
            path,
            cards,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Id the next added card will receive, or `None` when ids are exhausted.
    pub fn next_id(&self) -> Option<i64> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Add a card and persist. Returns the stored card.
    pub fn add(&mut self, category: &str, question: &str, answer: &str) -> Result<Card> {
        validate_fields(category, question, answer)?;

        let id = self.next_id.ok_or(StoreError::IdSpaceExhausted)?;
        self.next_id = id.checked_add(1);
        let card = Card::new(id, category.to_string(), question.to_string(), answer.to_string());
        self.cards.insert(id, card.clone());
        tracing::info!(id, category, "added flashcard");

        self.persist()?;
        Ok(card)
    }

    /// Replace the text of an existing card. Id and progress are kept.
    pub fn update(&mut self, id: i64, category: &str, question: &str, answer: &str) -> Result<Card> {
        let card = self.cards.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        validate_fields(category, question, answer)?;

        card.category = category.to_string();
        card.question = question.to_string();
        card.answer = answer.to_string();
        let updated = card.clone();
        tracing::info!(id, "updated flashcard");

        self.persist()?;
        Ok(updated)
    }

    /// Remove a card and persist. Its id is never handed out again.
    pub fn delete(&mut self, id: i64) -> Result<Card> {
        let removed = self.cards.remove(&id).ok_or(StoreError::NotFound(id))?;
        tracing::info!(id, "deleted flashcard");

        self.persist()?;
        Ok(removed)
    }

    pub fn get(&self, id: i64) -> Option<Card> {
        self.cards.get(&id).cloned()
    }

    /// Every card, ascending by id. Empty when the store is empty.
    pub fn list_all(&self) -> Vec<Card> {
        self.cards.values().cloned().collect()
    }

    /// Case-insensitive substring search over question, answer and category.
    pub fn search(&self, keyword: &str) -> Result<Vec<Card>> {
        let lowered = keyword.to_lowercase();
        let matches: Vec<Card> = self
            .cards
            .values()
            .filter(|card| card.contains_keyword(&lowered))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(StoreError::no_matches(keyword));
        }
        Ok(matches)
    }

    /// Cards whose category equals `category`, ignoring case. May be empty.
    pub fn filter_by_category(&self, category: &str) -> Vec<Card> {
        let lowered = category.to_lowercase();
        self.cards
            .values()
            .filter(|card| card.in_category(&lowered))
            .cloned()
            .collect()
    }

    /// Card counts per exact category name, sorted by name.
    pub fn show_categories(&self) -> Vec<CategorySummary> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for card in self.cards.values() {
            *counts.entry(card.category.as_str()).or_default() += 1;
        }

        counts
            .into_iter()
            .map(|(category, card_count)| CategorySummary {
                category: category.to_string(),
                card_count,
            })
            .collect()
    }

    /// Drill every card in `category` once, in id order.
    ///
    /// Progress changes are written in one batch after the last question,
    /// or after the source runs out of answers.
    pub fn practice_category<S: AnswerSource + ?Sized>(
        &mut self,
        category: &str,
        source: &mut S,
        options: PracticeOptions,
    ) -> Result<PracticeReport> {
        let lowered = category.to_lowercase();
        let session: Vec<i64> = self
            .cards
            .values()
            .filter(|card| card.in_category(&lowered))
            .map(|card| card.id)
            .collect();

        if session.is_empty() {
            return Err(StoreError::no_matches(category));
        }

        let mut report = PracticeReport {
            category: category.to_string(),
            correct: 0,
            answered: 0,
            session_size: session.len(),
            completed: true,
        };

        for (idx, id) in session.iter().enumerate() {
            let Some(card) = self.cards.get_mut(id) else {
                continue;
            };

            let prompt = PracticePrompt {
                position: idx + 1,
                session_size: report.session_size,
                card: &*card,
            };
            let Some(typed) = source.answer(&prompt) else {
                tracing::debug!(answered = report.answered, "answer source exhausted, ending session");
                report.completed = false;
                break;
            };

            let result = compare_answers(
                &typed,
                &card.answer,
                options.matching_mode,
                options.fuzzy_threshold,
            );
            if result.is_correct {
                card.record_correct_answer();
                report.correct += 1;
            }
            report.answered += 1;

            source.reveal(&QuestionOutcome {
                card_id: card.id,
                is_correct: result.is_correct,
                correct_answer: card.answer.clone(),
                progress: card.progress,
            });
        }

        tracing::info!(
            category,
            correct = report.correct,
            answered = report.answered,
            "practice session finished"
        );
        if report.answered > 0 {
            self.persist()?;
        }
        Ok(report)
    }

    /// Rewrite the data file with every card, ascending by id.
    fn persist(&self) -> Result<()> {
        let content = parser::serialize(self.cards.values());
        write_replacing(&self.path, &content).map_err(|source| StoreError::Persistence {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), cards = self.cards.len(), "saved flashcards");
        Ok(())
    }
}

/// Write to a sibling temp file, then rename it over `path`.
fn write_replacing(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content)?;
    if let Err(e) = fs::rename(&tmp, path) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            tracing::warn!(path = %tmp.display(), error = %cleanup, "failed to remove temp file");
        }
        return Err(e);
    }
    Ok(())
}

fn validate_fields(category: &str, question: &str, answer: &str) -> Result<()> {
    validate_text("category", category)?;
    validate_text("question", question)?;
    validate_text("answer", answer)
}

/// Reject text the line-based file format cannot hold.
fn validate_text(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::InvalidField {
            field,
            reason: "cannot be empty".to_string(),
        });
    }
    if value.contains(['\n', '\r']) {
        return Err(StoreError::InvalidField {
            field,
            reason: "cannot contain line breaks".to_string(),
        });
    }
    Ok(())
}
