//! Interactive menu tests driven by scripted input.

mod common;

use pretty_assertions::assert_eq;

use common::fixtures::{record, sample_data_file, script};
use common::TestContext;

#[test]
fn test_add_then_exit() {
    let ctx = TestContext::new();
    let out = ctx.run_menu(&script(&["1", "Geography", "Capital of France?", "Paris", "", "8"]));

    assert!(out.contains("INTERACTIVE FLASHCARD SYSTEM"));
    assert!(out.contains("Flashcard 1 added successfully!"));
    assert!(out.contains("Thank you for using the Flashcard System!"));
    assert_eq!(ctx.file_content(), "1\nGeography\nCapital of France?\nParis\n0\n");
}

#[test]
fn test_add_reprompts_empty_fields() {
    let ctx = TestContext::new();
    let out = ctx.run_menu(&script(&["1", "", "Geography", "   ", "Capital?", "Paris", "", "8"]));

    assert_eq!(out.matches("This field cannot be empty!").count(), 2);
    assert_eq!(ctx.open_store().len(), 1);
}

#[test]
fn test_view_all_empty_store() {
    let ctx = TestContext::new();
    let out = ctx.run_menu(&script(&["4", "", "8"]));
    assert!(out.contains("No flashcards available!"));
}

#[test]
fn test_view_all_lists_in_id_order() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["4", "", "8"]));

    let first = out.find("ID: 1").unwrap();
    let second = out.find("ID: 2").unwrap();
    let third = out.find("ID: 3").unwrap();
    assert!(first < second && second < third);
    assert!(out.contains("Progress: 3/5"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let ctx = TestContext::new();
    let out = ctx.run_menu(&script(&["0", "abc", "9", "8"]));
    assert_eq!(out.matches("Invalid input! Please enter between 1-8").count(), 3);
    assert!(out.contains("Thank you"));
}

#[test]
fn test_end_of_input_leaves_menu() {
    let ctx = TestContext::new();
    let out = ctx.run_menu("");
    assert!(out.contains("Enter choice (1-8): "));
    assert!(!out.contains("Thank you"));
}

#[test]
fn test_edit_unknown_id_reports_not_found() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["2", "99", "", "8"]));

    assert!(out.contains("Error: flashcard not found: 99"));
    // No new text was asked for
    assert!(!out.contains("New category: "));
    assert_eq!(ctx.file_content(), sample_data_file());
}

#[test]
fn test_edit_keeps_progress() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["2", "2", "Arithmetic", "3+3?", "6", "", "8"]));

    assert!(out.contains("Flashcard updated successfully!"));
    let card = ctx.open_store().get(2).unwrap();
    assert_eq!(card.category, "Arithmetic");
    assert_eq!(card.answer, "6");
    assert_eq!(card.progress, 3);
}

#[test]
fn test_delete_then_add_uses_fresh_id() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["3", "3", "", "1", "History", "Moon landing?", "1969", "", "8"]));

    assert!(out.contains("Flashcard deleted successfully!"));
    assert!(out.contains("Flashcard 4 added successfully!"));
    let ids: Vec<i64> = ctx.open_store().list_all().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn test_practice_session() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["5", "geography", "paris", "Barcelona", "", "8"]));

    assert!(out.contains("Practicing: geography (2 cards)"));
    assert!(out.contains("Capital of France?"));
    assert!(out.contains("Correct!"));
    assert!(out.contains("Wrong! Correct answer: Madrid"));
    assert!(out.contains("Session Results: 1/2 (50.0%)"));

    let expected = [
        record(1, "Geography", "Capital of France?", "Paris", 1),
        record(2, "Math", "2+2?", "4", 3),
        record(3, "Geography", "Capital of Spain?", "Madrid", 5),
    ]
    .concat();
    assert_eq!(ctx.file_content(), expected);
}

#[test]
fn test_practice_unknown_category() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["5", "History", "", "8"]));
    assert!(out.contains("No cards in category: History"));
    assert_eq!(ctx.file_content(), sample_data_file());
}

#[test]
fn test_practice_interrupted_by_end_of_input() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["5", "Geography", "Paris"]));

    assert!(out.contains("stopped after 1 of 2 cards"));
    assert!(!out.contains("Thank you"));
    assert_eq!(ctx.open_store().get(1).unwrap().progress, 1);
}

#[test]
fn test_mastered_card_stays_at_max() {
    let ctx = TestContext::with_file(&sample_data_file());
    ctx.run_menu(&script(&["5", "GEOGRAPHY", "x", "madrid", "", "8"]));
    assert_eq!(ctx.open_store().get(3).unwrap().progress, 5);
}

#[test]
fn test_search_matches_answer() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["6", "pari", "", "8"]));

    assert!(out.contains("Search Results (1 matches):"));
    assert!(out.contains("ID: 1"));
    assert!(!out.contains("ID: 2"));
}

#[test]
fn test_search_without_matches() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["6", "zebra", "", "8"]));
    assert!(out.contains("Error: no matches found for: zebra"));
}

#[test]
fn test_show_categories() {
    let ctx = TestContext::with_file(&sample_data_file());
    let out = ctx.run_menu(&script(&["7", "", "8"]));

    assert!(out.contains("Categories:"));
    assert!(out.contains(&format!("{:<20}: 2 cards", "Geography")));
    assert!(out.contains(&format!("{:<20}: 1 card", "Math")));
}

#[test]
fn test_show_categories_empty() {
    let ctx = TestContext::new();
    let out = ctx.run_menu(&script(&["7", "", "8"]));
    assert!(out.contains("No categories available!"));
}

#[test]
fn test_invalid_utf8_input_does_not_end_session() {
    let ctx = TestContext::new();
    let mut input = b"1\nFood\nCaf".to_vec();
    input.push(0xE9);
    input.extend_from_slice(b"?\nyes\n\n8\n");
    let out = ctx.run_menu_bytes(&input);

    assert!(out.contains("Flashcard 1 added successfully!"));
    assert!(out.contains("Thank you for using the Flashcard System!"));
    assert_eq!(ctx.file_content(), "1\nFood\nCaf\u{FFFD}?\nyes\n0\n");
}
