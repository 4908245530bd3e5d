//! Match navigation panel rendering

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::overlay::{NEXT_GLYPH, OverlayController, PREV_GLYPH};
use crate::surface::Surface;
use crate::theme::panel;
use crate::widgets::popup;

/// Lay out and draw the panel on top of whatever was rendered before
///
/// Does nothing when there is no panel or it does not fit the frame.
pub fn render_panel(overlay: &OverlayController, surface: &mut Surface, frame: &mut Frame) {
    let Some(area) = overlay.layout(surface, frame.area()) else {
        return;
    };
    let Some(label) = overlay.label(surface) else {
        return;
    };

    popup::clear_area(frame, area);

    let base = Style::default().fg(panel::FOREGROUND).bg(panel::BACKGROUND);
    let button = panel::BUTTON.bg(panel::BACKGROUND);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(panel::BORDER).bg(panel::BACKGROUND))
        .style(base);

    let line = Line::from(vec![
        Span::styled(" ", base),
        Span::styled(PREV_GLYPH, button),
        Span::styled(" ", base),
        Span::styled(label.to_string(), base),
        Span::styled(" ", base),
        Span::styled(NEXT_GLYPH, button),
        Span::styled(" ", base),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
}
