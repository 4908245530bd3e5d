//! Tests for editor_state

use super::*;
use crate::surface::Mutation;

fn editor(text: &str) -> TextEditor {
    TextEditor::with_text(text)
}

fn large_document(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("row {} needle", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_new_editor_has_no_search() {
    let editor = TextEditor::new();
    assert!(editor.search_state().is_none());
    assert!(editor.all_marks().is_empty());
    assert_eq!(editor.cursor(), Position::new(0, 0));
    assert_eq!(editor.value(), "");
}

#[test]
fn test_with_text_round_trips_value() {
    let editor = editor("first\nsecond\nthird");
    assert_eq!(editor.lines().len(), 3);
    assert_eq!(editor.value(), "first\nsecond\nthird");
}

#[test]
fn test_set_value_keeps_trailing_newline() {
    let mut editor = TextEditor::new();
    editor.set_value("line one\nline two\n");

    assert_eq!(editor.lines().len(), 3);
    assert_eq!(editor.value(), "line one\nline two\n");
}

#[test]
fn test_set_value_normalises_crlf() {
    let mut editor = TextEditor::new();
    editor.set_value("a\r\nb\r\n");

    assert_eq!(editor.lines(), &["a", "b", ""]);
    assert_eq!(editor.value(), "a\nb\n");
}

#[test]
fn test_set_value_replaces_content_and_notifies() {
    let mut editor = editor("old");
    editor.set_value("new\ncontent");

    assert_eq!(editor.value(), "new\ncontent");
    assert_eq!(editor.take_events(), vec![EditorEvent::CursorActivity]);
    assert!(editor.take_events().is_empty());
}

#[test]
fn test_set_value_recomputes_active_search() {
    let mut editor = editor("alpha");
    editor.set_query("beta");
    assert_eq!(
        editor.search_state().unwrap().overlay.as_ref().unwrap().matches.len(),
        0
    );

    editor.set_value("beta\nbeta beta");

    let matches = &editor.search_state().unwrap().overlay.as_ref().unwrap().matches;
    assert_eq!(matches.len(), 3);
}

#[test]
fn test_set_query_builds_overlay_for_small_document() {
    let mut editor = editor("foo bar\nbaz foo\nfoo");
    editor.set_query("foo");

    let state = editor.search_state().unwrap();
    assert_eq!(state.query, "foo");
    let matches = &state.overlay.as_ref().unwrap().matches;
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[1].from, Position::new(1, 4));
    assert!(editor.all_marks().is_empty());
    assert!(!editor.is_highlighting());
    assert_eq!(editor.take_events(), vec![EditorEvent::Search]);
}

#[test]
fn test_set_same_query_is_silent() {
    let mut editor = editor("foo");
    editor.set_query("foo");
    editor.take_events();

    editor.set_query("foo");

    assert!(editor.take_events().is_empty());
}

#[test]
fn test_set_empty_query_clears_search() {
    let mut editor = editor("foo");
    editor.set_query("foo");
    editor.take_events();

    editor.set_query("");

    assert!(editor.search_state().is_none());
    assert_eq!(editor.take_events(), vec![EditorEvent::Search]);
}

#[test]
fn test_clear_search_without_search_is_silent() {
    let mut editor = editor("foo");
    editor.clear_search();
    assert!(editor.take_events().is_empty());
}

#[test]
fn test_large_document_highlights_into_marks_incrementally() {
    let lines = OVERLAY_LINE_LIMIT + 500;
    let mut editor = editor(&large_document(lines));
    editor.set_query("needle");
    editor.take_events();

    let state = editor.search_state().unwrap();
    assert!(state.overlay.is_none());
    assert!(editor.is_highlighting());
    assert!(editor.all_marks().is_empty());

    assert!(editor.tick());
    assert_eq!(editor.all_marks().len(), HIGHLIGHT_CHUNK_LINES);
    assert!(editor.take_events().is_empty());

    while editor.tick() {}

    assert_eq!(editor.all_marks().len(), lines);
    assert!(!editor.is_highlighting());
    assert_eq!(editor.take_events(), vec![EditorEvent::Search]);
    assert!(
        editor
            .all_marks()
            .iter()
            .all(|m| m.class == crate::editor::SEARCH_MARK_CLASS)
    );
}

#[test]
fn test_tick_without_pass_does_nothing() {
    let mut editor = editor("foo");
    assert!(!editor.tick());
    editor.set_query("foo");
    assert!(!editor.tick());
}

#[test]
fn test_new_query_drops_old_marks() {
    let mut editor = editor(&large_document(OVERLAY_LINE_LIMIT + 1));
    editor.set_query("needle");
    while editor.tick() {}
    assert!(!editor.all_marks().is_empty());

    editor.set_query("row 1");

    assert!(editor.all_marks().is_empty());
    assert!(editor.is_highlighting());
}

#[test]
fn test_open_dialog_inserts_element_once() {
    let mut editor = editor("foo");
    let mut surface = Surface::new();

    editor.open_dialog(&mut surface);
    editor.open_dialog(&mut surface);

    assert!(editor.is_dialog_open());
    assert_eq!(surface.count(DIALOG_ID), 1);
    assert_eq!(surface.take_mutations(), vec![Mutation::Added(DIALOG_ID)]);
}

#[test]
fn test_open_dialog_prefills_current_query() {
    let mut editor = editor("foo");
    let mut surface = Surface::new();
    editor.set_query("foo");

    editor.open_dialog(&mut surface);

    assert_eq!(editor.dialog_mut().unwrap().query(), "foo");
    assert_eq!(surface.get(DIALOG_ID).unwrap().text, "foo");
}

#[test]
fn test_close_dialog_removes_element_and_keeps_query() {
    let mut editor = editor("foo");
    let mut surface = Surface::new();
    editor.open_dialog(&mut surface);
    editor.set_query("foo");
    surface.take_mutations();

    editor.close_dialog(&mut surface);
    editor.close_dialog(&mut surface);

    assert!(!editor.is_dialog_open());
    assert!(!surface.contains(DIALOG_ID));
    assert_eq!(surface.take_mutations(), vec![Mutation::Removed(DIALOG_ID)]);
    assert_eq!(editor.search_state().unwrap().query, "foo");
}

#[test]
fn test_find_next_moves_cursor_and_wraps() {
    let mut editor = editor("foo\nbar foo\nfoo");
    let mut surface = Surface::new();
    editor.set_query("foo");
    editor.take_events();

    editor.exec_command(Command::FindNext, &mut surface);
    assert_eq!(editor.cursor(), Position::new(1, 4));
    assert_eq!(editor.take_events(), vec![EditorEvent::CursorActivity]);

    editor.exec_command(Command::FindNext, &mut surface);
    assert_eq!(editor.cursor(), Position::new(2, 0));

    editor.exec_command(Command::FindNext, &mut surface);
    assert_eq!(editor.cursor(), Position::new(0, 0));
}

#[test]
fn test_find_prev_moves_backwards() {
    let mut editor = editor("foo\nbar foo\nfoo");
    let mut surface = Surface::new();
    editor.set_query("foo");
    editor.jump_to(Position::new(2, 0));

    editor.exec_command(Command::FindPrev, &mut surface);

    assert_eq!(editor.cursor(), Position::new(1, 4));
}

#[test]
fn test_counted_span_follows_cursor_after_non_ascii_prefix() {
    let mut editor = editor("needle\nİ needle");
    let mut surface = Surface::new();
    editor.set_query("needle");

    editor.find_next(&mut surface);

    assert_eq!(editor.cursor(), Position::new(1, 2));
    assert_eq!(
        crate::search::view_model(&editor),
        crate::search::OverlayViewModel::Visible {
            current: 2,
            total: 2,
        }
    );
}

#[test]
fn test_find_next_without_query_opens_dialog() {
    let mut editor = editor("foo");
    let mut surface = Surface::new();

    editor.exec_command(Command::FindNext, &mut surface);

    assert!(editor.is_dialog_open());
    assert!(surface.contains(DIALOG_ID));
    assert_eq!(editor.cursor(), Position::new(0, 0));
}

#[test]
fn test_find_command_opens_dialog() {
    let mut editor = editor("foo");
    let mut surface = Surface::new();

    editor.exec_command(Command::Find, &mut surface);

    assert!(editor.is_dialog_open());
}

#[test]
fn test_clear_search_command() {
    let mut editor = editor("foo");
    let mut surface = Surface::new();
    editor.set_query("foo");
    editor.take_events();

    editor.exec_command(Command::ClearSearch, &mut surface);

    assert!(editor.search_state().is_none());
    assert_eq!(editor.take_events(), vec![EditorEvent::Search]);
}

#[test]
fn test_jump_to_notifies_only_on_move() {
    let mut editor = editor("hello\nworld");

    editor.jump_to(Position::new(0, 0));
    assert!(editor.take_events().is_empty());

    editor.jump_to(Position::new(1, 3));
    assert_eq!(editor.cursor(), Position::new(1, 3));
    assert_eq!(editor.take_events(), vec![EditorEvent::CursorActivity]);
}

#[test]
fn test_repeated_events_are_coalesced() {
    let mut editor = editor("a\nb\nc");
    editor.jump_to(Position::new(1, 0));
    editor.jump_to(Position::new(2, 0));

    assert_eq!(editor.take_events(), vec![EditorEvent::CursorActivity]);
}
