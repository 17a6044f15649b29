//! Interactive numbered menu.

use crate::render::{self, Color};
use crate::terminal::Terminal;
use flashcard_core::{FlashcardStore, PracticeOptions, StoreError};
use std::io::{self, BufRead, Write};

/// Menu entries in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Edit,
    Delete,
    ViewAll,
    Practice,
    Search,
    Categories,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        Self::Add,
        Self::Edit,
        Self::Delete,
        Self::ViewAll,
        Self::Practice,
        Self::Search,
        Self::Categories,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add New Flashcard",
            Self::Edit => "Edit Flashcard",
            Self::Delete => "Delete Flashcard",
            Self::ViewAll => "View All Flashcards",
            Self::Practice => "Practice Category",
            Self::Search => "Search Flashcards",
            Self::Categories => "Show Categories",
            Self::Exit => "Exit",
        }
    }

    /// Create from the 1-based number shown in the menu.
    pub fn from_number(number: i64) -> Option<Self> {
        let idx = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(idx).copied()
    }
}

pub struct Menu<'a, R, W> {
    store: &'a mut FlashcardStore,
    practice: PracticeOptions,
    term: &'a mut Terminal<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        store: &'a mut FlashcardStore,
        practice: PracticeOptions,
        term: &'a mut Terminal<R, W>,
    ) -> Self {
        Self {
            store,
            practice,
            term,
        }
    }

    /// Loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.term.clear()?;
            self.show_menu()?;

            let max = MenuChoice::ALL.len() as i64;
            let label = format!("Enter choice (1-{}): ", max);
            let Some(number) = self.term.prompt_number(&label, 1, max)? else {
                break;
            };
            let Some(choice) = MenuChoice::from_number(number) else {
                continue;
            };

            if choice == MenuChoice::Exit {
                self.term.clear()?;
                self.term.success("Thank you for using the Flashcard System!")?;
                return Ok(());
            }

            if !self.dispatch(choice)? {
                break;
            }

            let pause = render::paint("\nPress enter to continue...", Color::CYAN, self.term.use_color());
            self.term.line(&pause)?;
            if self.term.read_line()?.is_none() {
                break;
            }
        }

        tracing::debug!("input closed, leaving menu");
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.term.colored("INTERACTIVE FLASHCARD SYSTEM\n", Color::BLUE)?;
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            let color = if *choice == MenuChoice::Exit { Color::RED } else { Color::CYAN };
            self.term.colored(&format!("{}. {}", idx + 1, choice.label()), color)?;
        }
        self.term.line("")
    }

    /// Run one action. Returns false when input ran out mid-action.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::ViewAll => self.view_all().map(|_| true),
            MenuChoice::Practice => self.practice(),
            MenuChoice::Search => self.search(),
            MenuChoice::Categories => self.categories().map(|_| true),
            MenuChoice::Exit => Ok(true),
        }
    }

    fn add(&mut self) -> io::Result<bool> {
        let labels = ["Category: ", "Question: ", "Answer: "];
        let Some((category, question, answer)) = self.read_card_text(labels)? else {
            return Ok(false);
        };
        match self.store.add(&category, &question, &answer) {
            Ok(card) => self.term.success(&format!("Flashcard {} added successfully!", card.id))?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn edit(&mut self) -> io::Result<bool> {
        let Some(id) = self.term.prompt_number("Enter card ID: ", 1, i64::MAX)? else {
            return Ok(false);
        };
        // Fail before asking for new text
        if self.store.get(id).is_none() {
            self.report(&StoreError::NotFound(id))?;
            return Ok(true);
        }
        let labels = ["New category: ", "New question: ", "New answer: "];
        let Some((category, question, answer)) = self.read_card_text(labels)? else {
            return Ok(false);
        };
        match self.store.update(id, &category, &question, &answer) {
            Ok(_) => self.term.success("Flashcard updated successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn delete(&mut self) -> io::Result<bool> {
        let Some(id) = self.term.prompt_number("Enter card ID: ", 1, i64::MAX)? else {
            return Ok(false);
        };
        match self.store.delete(id) {
            Ok(_) => self.term.success("Flashcard deleted successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn view_all(&mut self) -> io::Result<()> {
        let cards = self.store.list_all();
        if cards.is_empty() {
            return self.term.notice("No flashcards available!");
        }
        let text = render::render_cards(&cards, self.term.use_color());
        self.term.line(&text)
    }

    fn practice(&mut self) -> io::Result<bool> {
        let Some(category) = self.term.prompt_non_empty("Enter category: ")? else {
            return Ok(false);
        };

        let session_size = self.store.filter_by_category(&category).len();
        if session_size > 0 {
            self.term.clear()?;
            self.term
                .colored(&format!("Practicing: {} ({} cards)\n", category, session_size), Color::BLUE)?;
        }

        match self.store.practice_category(&category, &mut *self.term, self.practice) {
            Ok(report) => {
                let text = render::render_report(&report, self.term.use_color());
                self.term.line("")?;
                self.term.line(&text)?;
                Ok(report.completed)
            }
            Err(StoreError::NoMatches { .. }) => {
                self.term.error(&format!("No cards in category: {}", category))?;
                Ok(true)
            }
            Err(e) => {
                self.report(&e)?;
                Ok(true)
            }
        }
    }

    fn search(&mut self) -> io::Result<bool> {
        let Some(keyword) = self.term.prompt_non_empty("Search term: ")? else {
            return Ok(false);
        };
        match self.store.search(&keyword) {
            Ok(cards) => {
                self.term
                    .colored(&format!("\nSearch Results ({} matches):", cards.len()), Color::BLUE)?;
                let text = render::render_cards(&cards, self.term.use_color());
                self.term.line(&text)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(true)
    }

    fn categories(&mut self) -> io::Result<()> {
        let summary = self.store.show_categories();
        if summary.is_empty() {
            return self.term.notice("No categories available!");
        }
        let text = render::render_categories(&summary, self.term.use_color());
        self.term.line("")?;
        self.term.line(&text)
    }

    fn read_card_text(&mut self, labels: [&str; 3]) -> io::Result<Option<(String, String, String)>> {
        let [category_label, question_label, answer_label] = labels;
        let Some(category) = self.term.prompt_non_empty(category_label)? else {
            return Ok(None);
        };
        let Some(question) = self.term.prompt_non_empty(question_label)? else {
            return Ok(None);
        };
        let Some(answer) = self.term.prompt_non_empty(answer_label)? else {
            return Ok(None);
        };
        Ok(Some((category, question, answer)))
    }

    fn report(&mut self, error: &StoreError) -> io::Result<()> {
        if !error.is_recoverable() {
            tracing::error!(error = %error, "flashcard file is out of date");
        }
        self.term.error(&format!("Error: {}", error))
    }
}
