//! Mouse event dispatcher
//!
//! Left clicks are offered in paint order, topmost first: the notification,
//! the floating surface elements (match panel, search prompt), then the
//! fixed regions.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};

/// Handle a mouse event, returns true if it changed anything on screen
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> bool {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(app, mouse.column, mouse.row);
            true
        }
        _ => false,
    }
}

fn handle_left_click(app: &mut App, column: u16, row: u16) {
    if app.notification.contains(column, row) {
        app.notification.dismiss();
        return;
    }

    if app.session.click(column, row) {
        return;
    }

    // Panel chrome and the prompt swallow clicks that missed a button
    if app.session.surface.element_at(column, row).is_some() {
        return;
    }

    if region_at(&app.layout_regions, column, row) == Some(Region::EditorPane)
        && let Some(pos) = app.session.editor.position_at(column, row)
    {
        app.session.editor.jump_to(pos);
    }
}

#[cfg(test)]
#[path = "mouse_events_tests.rs"]
mod mouse_events_tests;
