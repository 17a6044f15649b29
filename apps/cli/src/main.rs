use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    flashcards_cli::run()
}
