//! Current-match derivation
//!
//! Turns the widget's search state and cursor into the `current/total` pair
//! shown on the panel. The numbers degrade instead of failing: a total of
//! zero is shown as one, and a cursor outside every match counts as the
//! first match.

use crate::editor::{EditorWidget, Mark, MatchSpan, Position, SEARCH_MARK_CLASS, SearchState};

/// What the panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayViewModel {
    Hidden,
    /// `1 <= current <= total`
    Visible { current: usize, total: usize },
}

impl OverlayViewModel {
    pub fn is_visible(&self) -> bool {
        matches!(self, OverlayViewModel::Visible { .. })
    }

    /// Panel label text, `None` when hidden
    pub fn label(&self) -> Option<String> {
        match self {
            OverlayViewModel::Hidden => None,
            OverlayViewModel::Visible { current, total } => Some(format!("{}/{}", current, total)),
        }
    }
}

/// 1-based ordinal of the match under the cursor and the match count
///
/// Prefers the overlay match list; the `search-hit` marks are consulted only
/// when the overlay is absent or empty. Only meaningful while a query is
/// active, see [`view_model`].
pub fn locate(state: &SearchState, marks: &[Mark], cursor: Position) -> (usize, usize) {
    let overlay = state
        .overlay
        .as_ref()
        .map(|o| o.matches.as_slice())
        .unwrap_or_default();

    let (index, total) = if overlay.is_empty() {
        let hits: Vec<&MatchSpan> = marks
            .iter()
            .filter(|m| m.class.contains(SEARCH_MARK_CLASS))
            .map(|m| &m.span)
            .collect();
        (ordinal_index(hits.iter().copied(), cursor), hits.len())
    } else {
        (ordinal_index(overlay.iter(), cursor), overlay.len())
    };

    (index.map_or(1, |i| i + 1), total.max(1))
}

fn ordinal_index<'a>(
    mut spans: impl Iterator<Item = &'a MatchSpan>,
    cursor: Position,
) -> Option<usize> {
    spans.position(|span| span.contains(cursor))
}

/// Derive the panel state from the widget's current truth
pub fn view_model<W: EditorWidget + ?Sized>(widget: &W) -> OverlayViewModel {
    match widget.search_state() {
        Some(state) if state.has_query() => {
            let (current, total) = locate(state, widget.all_marks(), widget.cursor());
            OverlayViewModel::Visible { current, total }
        }
        _ => OverlayViewModel::Hidden,
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod locator_tests;
