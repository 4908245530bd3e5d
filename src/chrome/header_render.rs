use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

const APP_NAME: &str = " remedit ";

pub fn header_line(file_path: Option<&str>, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(APP_NAME, theme.header)];
    if let Some(path) = file_path {
        spans.push(Span::styled(format!("- {}", path), theme.header_path));
    }
    Line::from(spans)
}

/// Render the header with the theme indicator right-aligned on the same row
pub fn render_header(file_path: Option<&str>, theme: &Theme, frame: &mut Frame, area: Rect) {
    let indicator = format!("{} ", theme.mode.icon());
    let indicator_width = u16::try_from(indicator.chars().count()).unwrap_or(u16::MAX);
    let [title_area, indicator_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(indicator_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(header_line(file_path, theme)).style(theme.header),
        title_area,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(indicator, theme.header)).style(theme.header),
        indicator_area,
    );
}
