//! Terminal rendering for cards, categories and session results.

use flashcard_core::{Card, CategorySummary, PracticeReport, QuestionOutcome, MAX_PROGRESS};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Wrap `text` in `color` when colors are enabled.
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

pub fn render_card(card: &Card, use_color: bool) -> String {
    [
        paint(&format!("ID: {}", card.id), Color::YELLOW, use_color),
        paint(&format!("Category: {}", card.category), Color::BLUE, use_color),
        paint(&format!("Question: {}", card.question), Color::CYAN, use_color),
        paint(&format!("Answer: {}", card.answer), Color::GREEN, use_color),
        format!("Progress: {}/{}", card.progress, MAX_PROGRESS),
    ]
    .join("\n")
}

/// Cards separated by blank lines.
pub fn render_cards(cards: &[Card], use_color: bool) -> String {
    cards
        .iter()
        .map(|card| render_card(card, use_color))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_categories(categories: &[CategorySummary], use_color: bool) -> String {
    let mut lines = vec![paint("Categories:", Color::BLUE, use_color)];
    for entry in categories {
        let unit = if entry.card_count == 1 { "card" } else { "cards" };
        lines.push(format!(
            "{}: {}",
            paint(&format!("{:<20}", entry.category), Color::YELLOW, use_color),
            paint(&format!("{} {}", entry.card_count, unit), Color::GREEN, use_color),
        ));
    }
    lines.join("\n")
}

pub fn render_outcome(outcome: &QuestionOutcome, use_color: bool) -> String {
    if outcome.is_correct {
        paint("Correct!", Color::GREEN, use_color)
    } else {
        paint(
            &format!("Wrong! Correct answer: {}", outcome.correct_answer),
            Color::RED,
            use_color,
        )
    }
}

pub fn render_report(report: &PracticeReport, use_color: bool) -> String {
    let mut summary = format!(
        "Session Results: {}/{} ({:.1}%)",
        report.correct,
        report.answered,
        report.percentage()
    );
    if !report.completed {
        summary.push_str(&format!(
            ", stopped after {} of {} cards",
            report.answered, report.session_size
        ));
    }
    paint(&summary, Color::BLUE, use_color)
}
