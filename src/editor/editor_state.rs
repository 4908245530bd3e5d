//! Text editor widget state
//!
//! Wraps a `TextArea` with a search query, two highlight representations
//! and a notification queue. Small documents get their matches computed in
//! one pass into the search overlay. Large documents are highlighted
//! incrementally into `search-hit` marks, one chunk per [`TextEditor::tick`],
//! so counts can lag behind until the pass completes.

use tui_textarea::{CursorMove, TextArea};

#[cfg(debug_assertions)]
use log::debug;

use super::dialog::{DIALOG_ID, SearchDialog};
use super::editor_render::Viewport;
use super::matcher::SearchMatcher;
use super::widget::{
    Command, EditorEvent, EditorWidget, Mark, Position, SearchOverlay, SearchState,
};
use crate::surface::{Element, Surface};

/// Largest document whose matches are computed in a single pass
pub const OVERLAY_LINE_LIMIT: usize = 2_000;

/// Lines highlighted per tick once a document exceeds the overlay limit
pub const HIGHLIGHT_CHUNK_LINES: usize = 500;

pub struct TextEditor {
    pub(super) textarea: TextArea<'static>,
    search: Option<SearchState>,
    marks: Vec<Mark>,
    /// Next line of the incremental highlight pass
    highlight_from: Option<usize>,
    pub(super) dialog: Option<SearchDialog>,
    events: Vec<EditorEvent>,
    /// Geometry of the last painted buffer, for mouse mapping
    pub(super) viewport: Viewport,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
            search: None,
            marks: Vec::new(),
            highlight_from: None,
            dialog: None,
            events: Vec::new(),
            viewport: Viewport::default(),
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut editor = Self::new();
        editor.textarea = TextArea::new(split_lines(text));
        editor
    }

    pub fn lines(&self) -> &[String] {
        self.textarea.lines()
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut SearchDialog> {
        self.dialog.as_mut()
    }

    pub fn is_highlighting(&self) -> bool {
        self.highlight_from.is_some()
    }

    pub(super) fn push_event(&mut self, event: EditorEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Queue `CursorActivity` if the cursor is no longer at `before`
    pub(super) fn notify_if_moved(&mut self, before: Position) {
        if self.cursor() != before {
            self.push_event(EditorEvent::CursorActivity);
        }
    }

    /// Set the active query, recomputing highlights
    ///
    /// An empty query clears the search.
    pub fn set_query(&mut self, query: &str) {
        if query.is_empty() {
            self.clear_search();
            return;
        }
        if self.search.as_ref().is_some_and(|s| s.query == query) {
            return;
        }

        #[cfg(debug_assertions)]
        debug!("Editor: query set to '{}'", query);

        let pattern = format!("(?i){}", regex::escape(query));
        if let Err(_e) = self.textarea.set_search_pattern(pattern) {
            #[cfg(debug_assertions)]
            debug!("Editor: search pattern rejected: {}", _e);
        }

        self.search = Some(SearchState {
            query: query.to_string(),
            overlay: None,
        });
        self.rehighlight();
        self.push_event(EditorEvent::Search);
    }

    /// Drop query, overlay and marks
    pub fn clear_search(&mut self) {
        if self.search.is_none() && self.marks.is_empty() {
            return;
        }

        #[cfg(debug_assertions)]
        debug!("Editor: search cleared");

        self.search = None;
        self.marks.clear();
        self.highlight_from = None;
        let _ = self.textarea.set_search_pattern("");
        self.push_event(EditorEvent::Search);
    }

    /// Restart highlighting for the current query
    pub(super) fn rehighlight(&mut self) {
        self.marks.clear();
        let Some(search) = self.search.as_mut() else {
            self.highlight_from = None;
            return;
        };

        let lines = self.textarea.lines();
        if lines.len() <= OVERLAY_LINE_LIMIT {
            search.overlay = Some(SearchOverlay {
                matches: SearchMatcher::find_all(lines, &search.query),
            });
            self.highlight_from = None;
        } else {
            search.overlay = None;
            self.highlight_from = Some(0);
        }
    }

    /// Advance the incremental highlight pass by one chunk
    ///
    /// Returns true if any work was done. `Search` is queued when the pass
    /// completes so observers can pick up the final count.
    pub fn tick(&mut self) -> bool {
        let Some(start) = self.highlight_from else {
            return false;
        };
        let Some(query) = self.search.as_ref().map(|s| s.query.clone()) else {
            self.highlight_from = None;
            return false;
        };

        let lines = self.textarea.lines();
        let end = (start + HIGHLIGHT_CHUNK_LINES).min(lines.len());
        let hits = SearchMatcher::find_in_range(&lines[start..end], start, &query);
        self.marks.extend(hits.into_iter().map(Mark::search_hit));

        if end >= lines.len() {
            #[cfg(debug_assertions)]
            debug!("Editor: highlight pass done, {} marks", self.marks.len());

            self.highlight_from = None;
            self.push_event(EditorEvent::Search);
        } else {
            self.highlight_from = Some(end);
        }
        true
    }

    pub fn open_dialog(&mut self, surface: &mut Surface) {
        if self.dialog.is_some() {
            return;
        }

        let initial = self
            .search
            .as_ref()
            .map(|s| s.query.clone())
            .unwrap_or_default();

        #[cfg(debug_assertions)]
        debug!("Editor: search dialog opened (prefill '{}')", initial);

        surface.insert(Element::new(DIALOG_ID).with_text(initial.as_str()));
        self.dialog = Some(SearchDialog::new(&initial));
    }

    /// Close the prompt, keeping the query and its highlights
    pub fn close_dialog(&mut self, surface: &mut Surface) {
        if self.dialog.take().is_some() {
            #[cfg(debug_assertions)]
            debug!("Editor: search dialog closed");

            surface.remove(DIALOG_ID);
        }
    }

    /// Apply the prompt's text as the live query and jump to the first hit
    /// at or after the cursor
    pub(super) fn apply_dialog_query(&mut self, surface: &mut Surface) {
        let Some(query) = self.dialog.as_ref().map(|d| d.query().to_string()) else {
            return;
        };
        surface.set_text(DIALOG_ID, &query);
        self.set_query(&query);

        if !query.is_empty() {
            let before = self.cursor();
            self.textarea.search_forward(true);
            self.notify_if_moved(before);
        }
    }

    pub fn find_next(&mut self, surface: &mut Surface) {
        if !self.has_query() {
            self.open_dialog(surface);
            return;
        }
        let before = self.cursor();
        self.textarea.search_forward(false);
        self.notify_if_moved(before);
    }

    pub fn find_prev(&mut self, surface: &mut Surface) {
        if !self.has_query() {
            self.open_dialog(surface);
            return;
        }
        let before = self.cursor();
        self.textarea.search_back(false);
        self.notify_if_moved(before);
    }

    fn has_query(&self) -> bool {
        self.search.as_ref().is_some_and(SearchState::has_query)
    }

    /// Move the cursor to a text position, clamped by the textarea
    pub fn jump_to(&mut self, pos: Position) {
        let before = self.cursor();
        let row = u16::try_from(pos.line).unwrap_or(u16::MAX);
        let col = u16::try_from(pos.column).unwrap_or(u16::MAX);
        self.textarea.move_cursor(CursorMove::Jump(row, col));
        self.notify_if_moved(before);
    }
}

impl EditorWidget for TextEditor {
    fn cursor(&self) -> Position {
        let (line, column) = self.textarea.cursor();
        Position::new(line, column)
    }

    fn search_state(&self) -> Option<&SearchState> {
        self.search.as_ref()
    }

    fn all_marks(&self) -> &[Mark] {
        &self.marks
    }

    fn exec_command(&mut self, command: Command, surface: &mut Surface) {
        match command {
            Command::Find => self.open_dialog(surface),
            Command::FindNext => self.find_next(surface),
            Command::FindPrev => self.find_prev(surface),
            Command::ClearSearch => self.clear_search(),
        }
    }

    fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    fn set_value(&mut self, text: &str) {
        self.textarea = TextArea::new(split_lines(text));
        self.viewport.reset_scroll();
        if let Some(query) = self.search.as_ref().map(|s| s.query.clone()) {
            let pattern = format!("(?i){}", regex::escape(&query));
            let _ = self.textarea.set_search_pattern(pattern);
        }
        self.rehighlight();
        self.push_event(EditorEvent::CursorActivity);
    }

    fn value(&self) -> String {
        self.textarea.lines().join("\n")
    }
}

/// Split on `\n` so a trailing newline survives as an empty last line and
/// `value()` gives the text back unchanged. CRLF endings are normalised.
fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
#[path = "editor_state_tests.rs"]
mod editor_state_tests;
