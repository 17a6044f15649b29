//! Common test utilities for the CLI integration tests.
//!
//! Each TestContext owns a temporary directory holding its own data file,
//! so tests never touch the user's real flashcards.

#![allow(dead_code)]

pub mod fixtures;

use std::io::Cursor;
use std::path::PathBuf;

use flashcard_core::{FlashcardStore, PracticeOptions};
use flashcards_cli::cli::{Command, OutputFormat};
use flashcards_cli::commands::{self, CommandError};
use flashcards_cli::menu::Menu;
use flashcards_cli::terminal::Terminal;
use tempfile::TempDir;

pub type TestTerminal = Terminal<Cursor<Vec<u8>>, Vec<u8>>;

/// Test context with an isolated data file.
pub struct TestContext {
    _temp_dir: TempDir,
    pub data_file: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_file = temp_dir.path().join("Flashcards.data");
        Self {
            _temp_dir: temp_dir,
            data_file,
        }
    }

    /// Create a context whose data file already holds `content`.
    pub fn with_file(content: &str) -> Self {
        let ctx = Self::new();
        std::fs::write(&ctx.data_file, content).expect("Failed to seed data file");
        ctx
    }

    /// Open a fresh store instance on the context's data file.
    pub fn open_store(&self) -> FlashcardStore {
        FlashcardStore::open(&self.data_file).expect("Failed to open store")
    }

    pub fn file_content(&self) -> String {
        std::fs::read_to_string(&self.data_file).unwrap_or_default()
    }

    /// Drive the interactive menu with scripted input and return its output.
    pub fn run_menu(&self, input: &str) -> String {
        self.run_menu_bytes(input.as_bytes())
    }

    /// Like `run_menu`, for input that may not be valid UTF-8.
    pub fn run_menu_bytes(&self, input: &[u8]) -> String {
        let mut store = self.open_store();
        let mut term = Terminal::new(Cursor::new(input.to_vec()), Vec::new(), false);
        Menu::new(&mut store, PracticeOptions::default(), &mut term)
            .run()
            .expect("Menu failed");
        output(term)
    }

    /// Run one command and return its result and output.
    pub fn run_command(
        &self,
        command: Command,
        format: OutputFormat,
        input: &str,
    ) -> (Result<(), CommandError>, String) {
        let mut store = self.open_store();
        let mut term = terminal(input);
        let result = commands::execute(&mut store, command, PracticeOptions::default(), format, &mut term);
        (result, output(term))
    }
}

pub fn terminal(input: &str) -> TestTerminal {
    Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

pub fn output(term: TestTerminal) -> String {
    String::from_utf8(term.into_output()).expect("Output was not UTF-8")
}
