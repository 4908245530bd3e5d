use std::time::Instant;

#[cfg(debug_assertions)]
use log::debug;

use crate::config::Config;
use crate::editor::{EditorWidget, TextEditor};
use crate::error::EditorError;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;
use crate::remote::{FileResponse, RemoteFiles};
use crate::session::EditorSession;
use crate::theme::{Theme, ThemeMode};

pub struct App {
    pub session: EditorSession,
    pub notification: NotificationState,
    /// Screen regions of the last render, for mouse dispatch
    pub layout_regions: LayoutRegions,
    pub theme_mode: ThemeMode,
    pub file_path: Option<String>,
    pub remote: Option<RemoteFiles>,
    pub should_quit: bool,
    pub needs_render: bool,
}

impl App {
    pub fn new(file_path: Option<String>, config: &Config) -> Self {
        let session = EditorSession::with_settings(
            TextEditor::new(),
            config.overlay.anchor(),
            config.search.rerender_delay(),
        );

        Self {
            session,
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::new(),
            theme_mode: config.theme.mode,
            file_path,
            remote: None,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn with_remote(mut self, remote: RemoteFiles) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Ask the file service for the file given on the command line
    pub fn start_loading(&mut self) {
        let Some(path) = self.file_path.clone() else {
            return;
        };

        let result = match self.remote.as_mut() {
            Some(remote) => remote.request_load(&path),
            None => Err(EditorError::WorkerDisconnected),
        };
        if let Err(e) = result {
            self.show_load_error(&e);
        }
    }

    pub fn save(&mut self) {
        let Some(path) = self.file_path.clone() else {
            self.notification.show_warning("No file open to save.");
            return;
        };

        let content = self.session.editor.value();
        let result = match self.remote.as_mut() {
            Some(remote) => remote.request_save(&path, content),
            None => Err(EditorError::WorkerDisconnected),
        };
        if let Err(e) = result {
            self.notification.show_error(&format!("Error saving: {}", e));
        }
    }

    /// Apply every finished file request, returns true if any arrived
    pub fn poll_remote(&mut self) -> bool {
        let mut received = false;
        while let Some(response) = self.remote.as_mut().and_then(RemoteFiles::poll) {
            self.apply_response(response);
            received = true;
        }
        if received {
            self.mark_dirty();
        }
        received
    }

    pub fn apply_response(&mut self, response: FileResponse) {
        match response {
            FileResponse::Loaded { path: _path, result } => match result {
                Ok(content) => {
                    #[cfg(debug_assertions)]
                    debug!("App: loaded {} ({} bytes)", _path, content.len());

                    self.session.editor.set_value(&content);
                }
                Err(e) => self.show_load_error(&e),
            },
            FileResponse::Saved { path: _, result } => match result {
                Ok(()) => self.notification.show("Saved"),
                Err(e) => self.notification.show_error(&format!("Error saving: {}", e)),
            },
        }
    }

    fn show_load_error(&mut self, error: &EditorError) {
        self.session.editor.set_value(&format!("# Error: {}", error));
        self.notification.show_error(&format!("Error loading: {}", error));
    }

    /// Per-cycle housekeeping: one highlight chunk, the search navigator
    /// sync and notification expiry
    pub fn update(&mut self, now: Instant) {
        let highlighted = self.session.editor.tick();
        let synced = self.session.sync(now);
        let expired = self.notification.clear_if_expired();
        if highlighted || synced || expired {
            self.mark_dirty();
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_mode)
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggle();
    }

    pub fn is_busy(&self) -> bool {
        self.remote.as_ref().is_some_and(RemoteFiles::is_busy)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
