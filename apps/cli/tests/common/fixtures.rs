//! Test fixtures for data files and scripted input.

/// Encode one record in the data file layout.
pub fn record(id: i64, category: &str, question: &str, answer: &str, progress: u8) -> String {
    format!("{}\n{}\n{}\n{}\n{}\n", id, category, question, answer, progress)
}

/// A small data file with two geography cards and one math card.
pub fn sample_data_file() -> String {
    [
        record(1, "Geography", "Capital of France?", "Paris", 0),
        record(2, "Math", "2+2?", "4", 3),
        record(3, "Geography", "Capital of Spain?", "Madrid", 5),
    ]
    .concat()
}

/// Join scripted menu input lines, one per prompt.
pub fn script(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{}\n", l)).collect()
}
