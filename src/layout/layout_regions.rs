//! Layout regions tracking for UI components
//!
//! Tracks where the fixed screen areas are rendered for position-aware mouse
//! interactions.

use ratatui::layout::{Constraint, Layout, Rect};

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    EditorPane,
    DialogBar,
    HintLine,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct LayoutRegions {
    pub header: Option<Rect>,
    pub editor_pane: Option<Rect>,
    /// Only while the search dialog is open
    pub dialog_bar: Option<Rect>,
    pub hint_line: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Split the frame into header, editor, optional dialog bar and hints
    pub fn compute(area: Rect, dialog_open: bool) -> Self {
        let dialog_height = u16::from(dialog_open);
        let [header, editor_pane, dialog_bar, hint_line] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(dialog_height),
            Constraint::Length(1),
        ])
        .areas(area);

        Self {
            header: Some(header),
            editor_pane: Some(editor_pane),
            dialog_bar: dialog_open.then_some(dialog_bar),
            hint_line: Some(hint_line),
        }
    }
}
