pub mod cli;
pub mod commands;
pub mod config;
pub mod menu;
pub mod render;
pub mod terminal;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use flashcard_core::FlashcardStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::render::{paint, Color};
use crate::terminal::Terminal;

pub fn run() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with prompts
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env(&cli.overrides())?;
    let use_color = !cli.no_color && io::stdout().is_terminal();

    tracing::info!(path = %settings.data_file.display(), "opening flashcards");
    let mut store = FlashcardStore::open(&settings.data_file)
        .with_context(|| format!("failed to load {}", settings.data_file.display()))?;

    let mut term = Terminal::new(io::stdin().lock(), io::stdout().lock(), use_color);
    let command = cli.command.unwrap_or(Command::Menu);

    match commands::execute(&mut store, command, settings.practice, cli.format, &mut term) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) if e.is_recoverable() => {
            eprintln!("{}", paint(&format!("Error: {}", e), Color::RED, use_color));
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
