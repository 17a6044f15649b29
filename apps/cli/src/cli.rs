//! Command-line surface.

use crate::config::Overrides;
use clap::{Parser, Subcommand};
use flashcard_core::MatchingMode;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flashcards", about = "Personal flashcard manager", version)]
pub struct Cli {
    /// Data file to use (default: local data dir, or FLASHCARDS_DATA_FILE)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    pub format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// How practice answers are judged: exact, case_insensitive or fuzzy
    #[arg(long, global = true, value_parser = parse_matching_mode)]
    pub matching: Option<MatchingMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            data_file: self.data_file.clone(),
            matching_mode: self.matching,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive menu (the default)
    Menu,

    /// Add a new flashcard
    Add {
        category: String,
        question: String,
        answer: String,
    },

    /// Replace the text of a flashcard
    Edit {
        id: i64,
        category: String,
        question: String,
        answer: String,
    },

    /// Delete a flashcard
    Delete { id: i64 },

    /// List all flashcards
    List,

    /// Search question, answer and category text
    Search { keyword: String },

    /// List flashcards in one category
    Filter { category: String },

    /// Show card counts per category
    Categories,

    /// Practice a category, reading answers from stdin
    Practice { category: String },
}

fn parse_matching_mode(value: &str) -> Result<MatchingMode, String> {
    MatchingMode::from_str(value)
        .ok_or_else(|| format!("expected exact, case_insensitive or fuzzy, got {:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_menu() {
        let cli = Cli::parse_from(["flashcards"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Plain);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "flashcards",
            "practice",
            "Geography",
            "--matching",
            "fuzzy",
            "--data-file",
            "/tmp/cards.data",
        ]);
        assert_eq!(cli.matching, Some(MatchingMode::Fuzzy));
        let overrides = cli.overrides();
        assert_eq!(overrides.data_file, Some(PathBuf::from("/tmp/cards.data")));
        assert!(matches!(cli.command, Some(Command::Practice { ref category }) if category == "Geography"));
    }

    #[test]
    fn rejects_unknown_matching_mode() {
        assert!(Cli::try_parse_from(["flashcards", "--matching", "loose"]).is_err());
    }

    #[test]
    fn parses_edit_arguments() {
        let cli = Cli::parse_from(["flashcards", "edit", "3", "Geo", "Q?", "A"]);
        match cli.command {
            Some(Command::Edit { id, category, .. }) => {
                assert_eq!(id, 3);
                assert_eq!(category, "Geo");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
