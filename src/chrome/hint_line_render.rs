use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::Theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn context_hints(dialog_open: bool) -> Vec<(&'static str, &'static str)> {
    if dialog_open {
        hints!["Enter" => "Next", "Shift+Enter" => "Prev", "Esc" => "Close"]
    } else {
        hints![
            "Ctrl+F" => "Find",
            "F3/S-F3" => "Next/Prev",
            "Ctrl+S" => "Save",
            "Ctrl+T" => "Theme",
            "Ctrl+Q" => "Quit",
        ]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", theme.hint_description));
        }
        spans.push(Span::styled(*key, theme.hint_key));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, theme.hint_description));
    }

    spans
}

pub fn render_line(dialog_open: bool, theme: &Theme, frame: &mut Frame, area: Rect) {
    let hints = context_hints(dialog_open);
    let line = Line::from(build_styled_spans(&hints, theme));
    frame.render_widget(Paragraph::new(line), area);
}
