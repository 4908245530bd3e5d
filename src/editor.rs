//! Text editor widget
//!
//! A `TextArea` based editing widget with its own search prompt, match
//! highlighting and find next/previous commands. The rest of the app
//! observes it only through [`EditorWidget`].

mod dialog;
pub mod editor_events;
pub mod editor_render;
mod editor_state;
mod matcher;
mod widget;

pub use dialog::DIALOG_ID;
pub use editor_state::{HIGHLIGHT_CHUNK_LINES, OVERLAY_LINE_LIMIT, TextEditor};
pub use widget::{
    Command, EditorEvent, EditorWidget, Mark, MatchSpan, Position, SEARCH_MARK_CLASS,
    SearchOverlay, SearchState,
};
