//! One-shot subcommands.

use crate::cli::{Command, OutputFormat};
use crate::menu::Menu;
use crate::render::{self, Color};
use crate::terminal::Terminal;
use flashcard_core::{Card, FlashcardStore, PracticeOptions, StoreError};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    /// Errors that only need a message, not a crash report.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_recoverable())
    }
}

/// Run a single command against the store.
pub fn execute<R: BufRead, W: Write>(
    store: &mut FlashcardStore,
    command: Command,
    practice: PracticeOptions,
    format: OutputFormat,
    term: &mut Terminal<R, W>,
) -> Result<(), CommandError> {
    match command {
        Command::Menu => Menu::new(store, practice, term).run()?,
        Command::Add {
            category,
            question,
            answer,
        } => {
            let card = store.add(&category, &question, &answer)?;
            match format {
                OutputFormat::Json => emit_json(term, &card)?,
                OutputFormat::Plain => term.success(&format!("Flashcard {} added successfully!", card.id))?,
            }
        }
        Command::Edit {
            id,
            category,
            question,
            answer,
        } => {
            let card = store.update(id, &category, &question, &answer)?;
            match format {
                OutputFormat::Json => emit_json(term, &card)?,
                OutputFormat::Plain => term.success("Flashcard updated successfully!")?,
            }
        }
        Command::Delete { id } => {
            let card = store.delete(id)?;
            match format {
                OutputFormat::Json => emit_json(term, &card)?,
                OutputFormat::Plain => term.success("Flashcard deleted successfully!")?,
            }
        }
        Command::List => {
            let cards = store.list_all();
            emit_cards(term, format, &cards, "No flashcards available!")?;
        }
        Command::Search { keyword } => {
            let cards = store.search(&keyword)?;
            if format == OutputFormat::Plain {
                term.colored(&format!("Search Results ({} matches):", cards.len()), Color::BLUE)?;
            }
            emit_cards(term, format, &cards, "")?;
        }
        Command::Filter { category } => {
            let cards = store.filter_by_category(&category);
            let empty = format!("No cards in category: {}", category);
            emit_cards(term, format, &cards, &empty)?;
        }
        Command::Categories => {
            let summary = store.show_categories();
            match format {
                OutputFormat::Json => emit_json(term, &summary)?,
                OutputFormat::Plain if summary.is_empty() => term.notice("No categories available!")?,
                OutputFormat::Plain => {
                    let text = render::render_categories(&summary, term.use_color());
                    term.line(&text)?;
                }
            }
        }
        Command::Practice { category } => {
            let session_size = store.filter_by_category(&category).len();
            if session_size > 0 && format == OutputFormat::Plain {
                term.colored(&format!("Practicing: {} ({} cards)\n", category, session_size), Color::BLUE)?;
            }
            match format {
                OutputFormat::Json => {
                    // Keep stdout for the JSON report alone
                    let mut prompts = term.with_output(io::stderr());
                    let report = store.practice_category(&category, &mut prompts, practice)?;
                    emit_json(term, &report)?;
                }
                OutputFormat::Plain => {
                    let report = store.practice_category(&category, term, practice)?;
                    let text = render::render_report(&report, term.use_color());
                    term.line(&text)?;
                }
            }
        }
    }
    Ok(())
}

fn emit_cards<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    format: OutputFormat,
    cards: &[Card],
    empty_message: &str,
) -> Result<(), CommandError> {
    match format {
        OutputFormat::Json => emit_json(term, cards)?,
        OutputFormat::Plain if cards.is_empty() => term.notice(empty_message)?,
        OutputFormat::Plain => {
            let text = render::render_cards(cards, term.use_color());
            term.line(&text)?;
        }
    }
    Ok(())
}

fn emit_json<R: BufRead, W: Write, T: Serialize + ?Sized>(
    term: &mut Terminal<R, W>,
    value: &T,
) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    term.line(&json)?;
    Ok(())
}
