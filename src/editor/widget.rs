//! Capability set of the text-editing widget
//!
//! The search overlay only ever talks to the widget through [`EditorWidget`],
//! so it can observe any widget that exposes a cursor, a search state and
//! the find commands.

use crate::surface::Surface;

/// Class carried by marks that highlight search hits
pub const SEARCH_MARK_CLASS: &str = "search-hit";

/// Text position (0-indexed, column in characters not bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open text range of a single match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub from: Position,
    pub to: Position,
}

impl MatchSpan {
    pub fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// Single-line containment test, inclusive of both ends
    pub fn contains(&self, pos: Position) -> bool {
        self.from.line == pos.line && self.from.column <= pos.column && pos.column <= self.to.column
    }
}

/// Match list computed in one pass when the query was set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOverlay {
    pub matches: Vec<MatchSpan>,
}

/// Widget-owned search state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    /// `None` while the widget highlights through marks instead
    pub overlay: Option<SearchOverlay>,
}

impl SearchState {
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

/// Persisted text mark
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub class: String,
    pub span: MatchSpan,
}

impl Mark {
    pub fn search_hit(span: MatchSpan) -> Self {
        Self {
            class: SEARCH_MARK_CLASS.to_string(),
            span,
        }
    }
}

/// Commands the widget executes on request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the search dialog
    Find,
    FindNext,
    FindPrev,
    ClearSearch,
}

/// Notifications queued by the widget for its subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// Cursor moved or text changed
    CursorActivity,
    /// Query set, changed or cleared, or highlighting finished
    Search,
}

pub trait EditorWidget {
    fn cursor(&self) -> Position;

    /// `None` when no search was ever started or it was cleared
    fn search_state(&self) -> Option<&SearchState>;

    fn all_marks(&self) -> &[Mark];

    /// The dialog is part of the surface, so commands may touch it
    fn exec_command(&mut self, command: Command, surface: &mut Surface);

    /// Drain notifications queued since the last call
    fn take_events(&mut self) -> Vec<EditorEvent>;

    fn set_value(&mut self, text: &str);

    fn value(&self) -> String;
}
