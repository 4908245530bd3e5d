use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of the given size whose top-right corner sits `top` rows down and
/// `right` columns in from the top-right corner of `area`
///
/// `None` if it would not fit entirely inside `area`.
pub fn top_right(area: Rect, width: u16, height: u16, top: u16, right: u16) -> Option<Rect> {
    let needed_width = width.checked_add(right)?;
    let needed_height = height.checked_add(top)?;
    if needed_width > area.width || needed_height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + area.width - needed_width,
        y: area.y + top,
        width,
        height,
    })
}

/// Rect of the given size inset by `margin` from the bottom-right corner of
/// `area`, `None` if it would not fit
pub fn bottom_right(area: Rect, width: u16, height: u16, margin: u16) -> Option<Rect> {
    let needed_width = width.checked_add(margin)?;
    let needed_height = height.checked_add(margin)?;
    if needed_width > area.width || needed_height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + area.width - needed_width,
        y: area.y + area.height - needed_height,
        width,
        height,
    })
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
