use ratatui::style::{Modifier, Style};
use tui_textarea::TextArea;

use crate::surface::ElementId;

/// Surface id of the widget's search prompt
pub const DIALOG_ID: ElementId = "search-dialog";

/// Creates a TextArea configured for search input.
fn create_search_textarea(initial: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![initial.to_string()]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea
}

/// One-line search prompt owned by the editor while it is open
pub struct SearchDialog {
    input: TextArea<'static>,
}

impl SearchDialog {
    /// Opens the prompt prefilled with the current query
    pub fn new(initial: &str) -> Self {
        Self {
            input: create_search_textarea(initial),
        }
    }

    pub fn query(&self) -> &str {
        self.input
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn input_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.input
    }
}
