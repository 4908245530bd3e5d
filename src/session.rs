//! Editor session
//!
//! Owns the editor widget, the surface it shares with the match panel, and
//! the search navigator parts. The app drives it once per event-loop cycle
//! through [`EditorSession::sync`] and forwards left clicks to
//! [`EditorSession::click`].

use std::time::{Duration, Instant};

#[cfg(debug_assertions)]
use log::debug;

use crate::editor::{Command, EditorWidget, TextEditor};
use crate::search::bridge::DEFAULT_RERENDER_DELAY;
use crate::search::{NavCommandRouter, OverlayController, PanelAnchor, SearchEventBridge};
use crate::surface::Surface;

pub struct EditorSession<W: EditorWidget = TextEditor> {
    pub editor: W,
    pub surface: Surface,
    pub overlay: OverlayController,
    bridge: SearchEventBridge,
    router: NavCommandRouter,
}

impl<W: EditorWidget + Default> Default for EditorSession<W> {
    fn default() -> Self {
        Self::new(W::default())
    }
}

impl<W: EditorWidget> EditorSession<W> {
    pub fn new(editor: W) -> Self {
        Self::with_settings(editor, PanelAnchor::default(), DEFAULT_RERENDER_DELAY)
    }

    pub fn with_settings(editor: W, anchor: PanelAnchor, rerender_delay: Duration) -> Self {
        Self {
            editor,
            surface: Surface::new(),
            overlay: OverlayController::new(anchor),
            bridge: SearchEventBridge::new(rerender_delay),
            router: NavCommandRouter::new(),
        }
    }

    pub fn exec(&mut self, command: Command) {
        #[cfg(debug_assertions)]
        debug!("Session: exec {:?}", command);

        self.editor.exec_command(command, &mut self.surface);
    }

    /// Offer a left click to the navigation buttons
    ///
    /// Returns true if the click hit a button and a command was issued.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.router.route(&self.surface, column, row) {
            Some(command) => {
                self.exec(command);
                true
            }
            None => false,
        }
    }

    /// Deliver pending widget notifications and surface mutations to the
    /// bridge, then fire due deferred renders
    ///
    /// Returns true if anything was delivered or fired.
    pub fn sync(&mut self, now: Instant) -> bool {
        let events = self.editor.take_events();
        for event in &events {
            self.bridge
                .handle_event(*event, &self.editor, &self.overlay, &mut self.surface);
        }

        let records = self.surface.take_mutations();
        if !records.is_empty() {
            self.bridge
                .handle_mutations(&records, now, &self.overlay, &mut self.surface);
        }

        let fired = self
            .bridge
            .run_due(now, &self.editor, &self.overlay, &mut self.surface);

        !events.is_empty() || !records.is_empty() || fired
    }

    /// Re-derive the panel immediately
    pub fn refresh(&mut self) {
        SearchEventBridge::refresh(&self.editor, &self.overlay, &mut self.surface);
    }

    pub fn has_pending_renders(&self) -> bool {
        self.bridge.has_pending()
    }

    pub fn next_render_due(&self) -> Option<Instant> {
        self.bridge.next_due()
    }

    /// Label currently shown on the panel
    pub fn panel_label(&self) -> Option<&str> {
        self.overlay.label(&self.surface)
    }
}
