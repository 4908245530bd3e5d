//! Tests for app_render

use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

use crate::app::App;
use crate::editor::{Command, EditorWidget};
use crate::layout::Region;
use crate::search::PANEL_ID;
use crate::test_utils::test_helpers::{key, key_with_mods, test_app};

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

fn render_to_string(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();
    terminal.backend().to_string()
}

fn search_for(app: &mut App, query: &str) {
    app.handle_key_event(key_with_mods(KeyCode::Char('f'), KeyModifiers::CONTROL));
    for c in query.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.update(Instant::now());
}

#[test]
fn test_renders_header_buffer_and_hints() {
    let mut app = test_app("hello world");
    app.file_path = Some("notes.txt".to_string());

    let output = render_to_string(&mut app);

    assert!(output.contains("remedit - notes.txt"));
    assert!(output.contains("hello world"));
    assert!(output.contains("Ctrl+F Find"));
}

#[test]
fn test_render_records_layout_regions() {
    let mut app = test_app("text");

    render_to_string(&mut app);

    let regions = &app.layout_regions;
    assert_eq!(regions.header.map(|r| r.y), Some(0));
    assert_eq!(regions.hint_line.map(|r| r.y), Some(HEIGHT - 1));
    assert!(regions.dialog_bar.is_none());
    assert_eq!(
        crate::layout::region_at(regions, 10, 5),
        Some(Region::EditorPane)
    );
}

#[test]
fn test_open_dialog_shows_prompt_and_dialog_hints() {
    let mut app = test_app("text");
    app.session.exec(Command::Find);

    let output = render_to_string(&mut app);

    assert!(output.contains("Search:"));
    assert!(output.contains("Esc Close"));
    assert!(app.layout_regions.dialog_bar.is_some());
}

#[test]
fn test_panel_rendered_with_label() {
    let mut app = test_app("foo bar foo");
    search_for(&mut app, "foo");

    let output = render_to_string(&mut app);

    assert!(output.contains("[<] 1/2 [>]"));
    let panel = app.session.surface.get(PANEL_ID).unwrap();
    assert!(panel.rect.is_some());
}

#[test]
fn test_no_panel_without_search() {
    let mut app = test_app("foo bar foo");

    let output = render_to_string(&mut app);

    assert!(!output.contains("[<]"));
}

#[test]
fn test_deferred_render_shows_panel_after_delay() {
    let mut app = test_app("foo bar foo");
    app.session.editor.set_query("foo");
    app.session.editor.take_events();

    let now = Instant::now();
    app.session.exec(Command::Find);
    app.update(now);
    assert!(!render_to_string(&mut app).contains("1/2"));

    app.update(now + Duration::from_millis(150));
    assert!(render_to_string(&mut app).contains("[<] 1/2 [>]"));
}

#[test]
fn test_notification_rendered_bottom_right_of_editor() {
    let mut app = test_app("text");
    app.notification.show_error("Error saving: disk full");

    let output = render_to_string(&mut app);

    assert!(output.contains("Error saving: disk full"));
    let lines: Vec<&str> = output.lines().collect();
    // Notification sits above the hint line, not at the top
    assert!(!lines[1].contains("disk full"));
    assert!(lines[HEIGHT as usize - 4].contains("disk full"));
}

#[test]
fn test_theme_toggle_changes_indicator() {
    let mut app = test_app("text");
    assert!(render_to_string(&mut app).contains("dark"));

    app.toggle_theme();

    assert!(render_to_string(&mut app).contains("light"));
}
