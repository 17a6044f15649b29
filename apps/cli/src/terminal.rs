//! Line-oriented prompting over any reader/writer pair.

use crate::render::{self, paint, Color};
use flashcard_core::{AnswerSource, PracticePrompt, QuestionOutcome};
use std::io::{self, BufRead, Write};

pub struct Terminal<R, W> {
    input: R,
    output: W,
    use_color: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, use_color: bool) -> Self {
        Self {
            input,
            output,
            use_color,
        }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Share this terminal's input while writing to a different output.
    pub fn with_output<O: Write>(&mut self, output: O) -> Terminal<&mut R, O> {
        Terminal::new(&mut self.input, output, self.use_color)
    }

    /// Read one line without its terminator. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than treated as an error.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        let label = paint(label, Color::CYAN, self.use_color);
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt until a line with visible text arrives.
    pub fn prompt_non_empty(&mut self, label: &str) -> io::Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                Some(line) if line.trim().is_empty() => {
                    self.error("This field cannot be empty!")?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Prompt until an integer in `min..=max` arrives.
    pub fn prompt_number(&mut self, label: &str, min: i64, max: i64) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(value) if (min..=max).contains(&value) => return Ok(Some(value)),
                _ => {
                    let message = if max == i64::MAX {
                        format!("Invalid input! Please enter a number of at least {}", min)
                    } else {
                        format!("Invalid input! Please enter between {}-{}", min, max)
                    };
                    self.error(&message)?;
                }
            }
        }
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn colored(&mut self, text: &str, color: &str) -> io::Result<()> {
        let text = paint(text, color, self.use_color);
        self.line(&text)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.colored(text, Color::GREEN)
    }

    pub fn notice(&mut self, text: &str) -> io::Result<()> {
        self.colored(text, Color::YELLOW)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.colored(text, Color::RED)
    }

    /// Clearing only happens on a real color terminal.
    pub fn clear(&mut self) -> io::Result<()> {
        if self.use_color {
            write!(self.output, "{}", render::CLEAR_SCREEN)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> AnswerSource for Terminal<R, W> {
    fn answer(&mut self, prompt: &PracticePrompt<'_>) -> Option<String> {
        let header = format!("Question {}/{}:", prompt.position, prompt.session_size);
        let asked = self
            .colored(&header, Color::CYAN)
            .and_then(|_| self.line(&prompt.card.question))
            .and_then(|_| self.prompt("Your answer: "));

        match asked {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read practice answer");
                None
            }
        }
    }

    fn reveal(&mut self, outcome: &QuestionOutcome) {
        let text = render::render_outcome(outcome, self.use_color);
        if let Err(e) = self.line(&text) {
            tracing::warn!(error = %e, "failed to show practice outcome");
        }
    }
}
