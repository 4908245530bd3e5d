//! Notification rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::notification_state::NotificationState;
use crate::widgets::popup;

const MARGIN: u16 = 1;

/// Render the current notification in the bottom-right corner of `area`
///
/// Called after everything else so it paints on top. The painted rect is
/// stored on the state so a click on it can dismiss it.
pub fn render_notification(frame: &mut Frame, notification: &mut NotificationState, area: Rect) {
    notification.clear_if_expired();

    let Some(notif) = notification.current() else {
        return;
    };

    let content_width = u16::try_from(notif.message.chars().count()).unwrap_or(u16::MAX);
    // 1 padding each side + 2 borders
    let width = content_width
        .saturating_add(4)
        .min(area.width.saturating_sub(MARGIN * 2));
    if width < 5 {
        return;
    }
    let Some(notification_area) = popup::bottom_right(area, width, 3, MARGIN) else {
        return;
    };

    popup::clear_area(frame, notification_area);

    let style = &notif.style;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(style.border).bg(style.bg))
        .style(Style::default().bg(style.bg));

    let text = Line::from(Span::styled(
        format!(" {} ", notif.message),
        Style::default().fg(style.fg).bg(style.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), notification_area);
    notification.set_rect(notification_area);
}

#[cfg(test)]
#[path = "notification_render_tests.rs"]
mod notification_render_tests;
