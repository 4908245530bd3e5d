//! Shared test utilities for remedit
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::config::Config;
    use crate::editor::{
        Command, EditorEvent, EditorWidget, Mark, MatchSpan, Position, SearchOverlay,
        SearchState,
    };
    use crate::surface::Surface;

    /// Helper to create App with default config and no file
    pub fn test_app(content: &str) -> App {
        let mut app = App::new(None, &Config::default());
        app.session.editor.set_value(content);
        app.session.editor.take_events();
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Helper to create a left click at a screen position
    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Single-line span helper
    pub fn span(line: usize, from: usize, to: usize) -> MatchSpan {
        MatchSpan::new(Position::new(line, from), Position::new(line, to))
    }

    /// Scriptable widget that records the commands it receives
    #[derive(Debug, Default)]
    pub struct FakeWidget {
        pub cursor: Position,
        pub search: Option<SearchState>,
        pub marks: Vec<Mark>,
        pub commands: Vec<Command>,
        pub events: Vec<EditorEvent>,
        pub text: String,
    }

    impl FakeWidget {
        /// Active search whose overlay lists `matches`
        pub fn with_matches(query: &str, matches: Vec<MatchSpan>) -> Self {
            Self {
                search: Some(SearchState {
                    query: query.to_string(),
                    overlay: Some(SearchOverlay { matches }),
                }),
                ..Self::default()
            }
        }

        pub fn count(&self, command: Command) -> usize {
            self.commands.iter().filter(|c| **c == command).count()
        }
    }

    impl EditorWidget for FakeWidget {
        fn cursor(&self) -> Position {
            self.cursor
        }

        fn search_state(&self) -> Option<&SearchState> {
            self.search.as_ref()
        }

        fn all_marks(&self) -> &[Mark] {
            &self.marks
        }

        fn exec_command(&mut self, command: Command, _surface: &mut Surface) {
            self.commands.push(command);
        }

        fn take_events(&mut self) -> Vec<EditorEvent> {
            std::mem::take(&mut self.events)
        }

        fn set_value(&mut self, text: &str) {
            self.text = text.to_string();
        }

        fn value(&self) -> String {
            self.text.clone()
        }
    }
}
