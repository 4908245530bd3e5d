//! Application-wide shortcuts
//!
//! Resolved before the editor sees a key, so they work the same whether
//! the search prompt is open or not.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::app_state::App;
use crate::editor::Command;

pub fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('s') if ctrl => {
            app.save();
            true
        }
        KeyCode::Char('t') if ctrl => {
            app.toggle_theme();
            true
        }
        KeyCode::Char('f') if ctrl => {
            app.session.exec(Command::Find);
            true
        }
        KeyCode::Char('g') if ctrl => {
            app.session.exec(if shift {
                Command::FindPrev
            } else {
                Command::FindNext
            });
            true
        }
        // Some terminals report Ctrl+Shift+G as an uppercase char
        KeyCode::Char('G') if ctrl => {
            app.session.exec(Command::FindPrev);
            true
        }
        KeyCode::F(3) => {
            app.session.exec(if shift {
                Command::FindPrev
            } else {
                Command::FindNext
            });
            true
        }
        KeyCode::Esc => handle_escape(app),
        _ => false,
    }
}

/// Esc dismisses an error first, then clears the search when no prompt is
/// open. With the prompt open the editor closes it.
fn handle_escape(app: &mut App) -> bool {
    if app.notification.has_error() {
        app.notification.dismiss();
        return true;
    }
    if !app.session.editor.is_dialog_open() {
        app.session.exec(Command::ClearSearch);
        return true;
    }
    false
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod global_tests;
