use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Span,
};

use super::dialog::DIALOG_ID;
use super::editor_state::TextEditor;
use super::widget::{EditorWidget, Position};
use crate::surface::Surface;
use crate::theme::Theme;

const DIALOG_LABEL: &str = " Search: ";

/// Where the buffer was last painted and how far it was scrolled
///
/// The textarea keeps its scroll offsets private, so they are tracked here
/// with the same follow-the-cursor rule it applies while rendering.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub area: Option<Rect>,
    pub top: usize,
    pub left: usize,
    pub gutter: u16,
}

impl Viewport {
    pub fn reset_scroll(&mut self) {
        self.top = 0;
        self.left = 0;
    }

    fn follow(&mut self, area: Rect, cursor: (usize, usize), line_count: usize) {
        self.gutter = gutter_width(line_count);
        let text_width = usize::from(area.width.saturating_sub(self.gutter));
        self.top = next_scroll_top(self.top, cursor.0, usize::from(area.height));
        self.left = next_scroll_top(self.left, cursor.1, text_width);
        self.area = Some(area);
    }
}

/// Width of the line number column: digits plus one space each side
fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).ilog10() + 1;
    u16::try_from(digits).unwrap_or(u16::MAX).saturating_add(2)
}

fn next_scroll_top(prev_top: usize, cursor: usize, len: usize) -> usize {
    if cursor < prev_top {
        cursor
    } else if prev_top + len <= cursor {
        cursor + 1 - len
    } else {
        prev_top
    }
}

impl TextEditor {
    /// Text position under a screen cell of the last painted buffer
    ///
    /// Clicks on the gutter map to the start of the line. The result may lie
    /// past the end of the text; cursor jumps clamp it.
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        let area = self.viewport.area?;
        if column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return None;
        }

        let line = self.viewport.top + usize::from(row - area.y);
        let x = column - area.x;
        let column = if x < self.viewport.gutter {
            0
        } else {
            self.viewport.left + usize::from(x - self.viewport.gutter)
        };
        Some(Position::new(line, column))
    }
}

pub fn render_buffer(editor: &mut TextEditor, theme: &Theme, frame: &mut Frame, area: Rect) {
    let cursor = editor.cursor();
    let line_count = editor.lines().len();
    editor
        .viewport
        .follow(area, (cursor.line, cursor.column), line_count);

    let textarea = editor.textarea_mut();
    textarea.set_style(theme.text);
    textarea.set_cursor_line_style(theme.active_line);
    textarea.set_line_number_style(theme.line_number);
    textarea.set_search_style(theme.search_match);
    textarea.set_cursor_style(theme.cursor);

    frame.render_widget(&*textarea, area);
}

/// Render the open search prompt into a one-line area and record its
/// geometry on the surface
pub fn render_dialog(
    editor: &mut TextEditor,
    surface: &mut Surface,
    theme: &Theme,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(dialog) = editor.dialog_mut() else {
        return;
    };

    let [label_area, input_area] = Layout::horizontal([
        Constraint::Length(DIALOG_LABEL.len() as u16),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(Span::styled(DIALOG_LABEL, theme.dialog_label), label_area);

    let input = dialog.input_mut();
    input.set_style(theme.dialog);
    input.set_cursor_line_style(theme.dialog);
    input.set_cursor_style(theme.cursor);
    frame.render_widget(&*input, input_area);

    surface.set_rect(DIALOG_ID, area);
}
