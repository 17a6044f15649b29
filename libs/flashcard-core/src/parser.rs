//! Codec for the plain-text flashcard data file.
//!
//! # Format
//! Each card is five consecutive lines, cards are concatenated with no
//! separator, and there is no header or checksum:
//! ```text
//! 1
//! Geography
//! Capital of France?
//! Paris
//! 0
//! ```
//!
//! Reading never fails as a whole. Records that cannot be decoded are
//! reported in [`ParsedFile::skipped`] and the rest of the file still loads.

use crate::types::{Card, MAX_PROGRESS};
use thiserror::Error;

/// Lines per record.
const RECORD_LINES: usize = 5;

/// Why a record was dropped while reading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorruptReason {
    #[error("invalid ID format: {0:?}")]
    InvalidId(String),

    #[error("ID must be positive, got {0}")]
    NonPositiveId(i64),

    #[error("invalid progress value: {0:?}")]
    InvalidProgress(String),

    #[error("record ends after {0} of 5 lines")]
    Truncated(usize),
}

/// A record that was skipped, with the 1-based line its ID sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptRecord {
    pub line: usize,
    pub reason: CorruptReason,
}

/// Cards decoded from a file, in file order.
#[derive(Debug, Default)]
pub struct ParsedFile {
    pub cards: Vec<Card>,
    pub skipped: Vec<CorruptRecord>,
}

/// Decode file content into cards.
pub fn parse(content: &str) -> ParsedFile {
    let lines: Vec<&str> = content.lines().collect();
    let mut parsed = ParsedFile::default();
    let mut idx = 0;

    loop {
        // Blank lines between records carry no data
        while idx < lines.len() && lines[idx].trim().is_empty() {
            idx += 1;
        }
        if idx >= lines.len() {
            break;
        }

        let line = idx + 1;
        let available = (lines.len() - idx).min(RECORD_LINES);
        if available < RECORD_LINES {
            parsed.skipped.push(CorruptRecord {
                line,
                reason: CorruptReason::Truncated(available),
            });
            break;
        }

        match decode_record(&lines[idx..idx + RECORD_LINES]) {
            Ok(card) => parsed.cards.push(card),
            Err(reason) => parsed.skipped.push(CorruptRecord { line, reason }),
        }
        idx += RECORD_LINES;
    }

    parsed
}

fn decode_record(fields: &[&str]) -> Result<Card, CorruptReason> {
    let id_str = fields[0].trim();
    let id = id_str
        .parse::<i64>()
        .map_err(|_| CorruptReason::InvalidId(id_str.to_string()))?;
    if id <= 0 {
        return Err(CorruptReason::NonPositiveId(id));
    }

    let progress_str = fields[4].trim();
    let progress = progress_str
        .parse::<i64>()
        .map_err(|_| CorruptReason::InvalidProgress(progress_str.to_string()))?
        .clamp(0, i64::from(MAX_PROGRESS)) as u8;

    Ok(Card {
        id,
        category: fields[1].to_string(),
        question: fields[2].to_string(),
        answer: fields[3].to_string(),
        progress,
    })
}

/// Encode cards in the order given. Every record ends with a newline.
pub fn serialize<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&format!(
            "{}\n{}\n{}\n{}\n{}\n",
            card.id, card.category, card.question, card.answer, card.progress
        ));
    }
    out
}
