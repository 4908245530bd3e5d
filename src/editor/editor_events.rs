//! Editor key handling
//!
//! Keys go to the search prompt while it is open, otherwise to the buffer.
//! Global shortcuts (find, save, theme) are resolved by the app before
//! anything reaches the editor.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::editor_state::TextEditor;
use super::widget::{EditorEvent, EditorWidget};
use crate::surface::Surface;

impl TextEditor {
    pub fn handle_key(&mut self, key: KeyEvent, surface: &mut Surface) {
        if self.dialog.is_some() {
            self.handle_dialog_key(key, surface);
        } else {
            self.handle_buffer_key(key);
        }
    }

    /// Bracketed paste: into the prompt (first line only) or the buffer
    pub fn handle_paste(&mut self, text: &str, surface: &mut Surface) {
        if let Some(dialog) = self.dialog.as_mut() {
            let line = text.lines().next().unwrap_or_default();
            if !line.is_empty() {
                dialog.input_mut().insert_str(line);
                self.apply_dialog_query(surface);
            }
            return;
        }

        if self.textarea.insert_str(text) {
            self.rehighlight();
            self.push_event(EditorEvent::CursorActivity);
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent, surface: &mut Surface) {
        match key.code {
            KeyCode::Esc => self.close_dialog(surface),
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.find_prev(surface);
            }
            KeyCode::Enter => self.find_next(surface),
            _ => {
                let Some(dialog) = self.dialog.as_mut() else {
                    return;
                };
                let before = dialog.query().to_string();
                dialog.input_mut().input(key);
                if dialog.query() != before {
                    self.apply_dialog_query(surface);
                }
            }
        }
    }

    fn handle_buffer_key(&mut self, key: KeyEvent) {
        let before = self.cursor();
        let modified = self.textarea.input(key);

        if modified {
            self.rehighlight();
            self.push_event(EditorEvent::CursorActivity);
        } else {
            self.notify_if_moved(before);
        }
    }
}

#[cfg(test)]
#[path = "editor_events_tests.rs"]
mod editor_events_tests;
