use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

use super::app_state::App;
use super::mouse_events;

mod global;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    /// How long to wait for input before the next housekeeping pass
    ///
    /// Shortened so a scheduled panel render fires on time, and zero while
    /// a highlight pass is still running.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        if self.session.editor.is_highlighting() {
            return Duration::ZERO;
        }
        match self.session.next_render_due() {
            Some(due) => due.saturating_duration_since(now).min(EVENT_POLL_TIMEOUT),
            None => EVENT_POLL_TIMEOUT,
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        let handled = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key);
                true
            }
            Event::Mouse(mouse) => mouse_events::handle_mouse_event(self, mouse),
            Event::Paste(text) => {
                self.handle_paste_event(&text);
                true
            }
            Event::Resize(_, _) => true,
            _ => false,
        };
        if handled {
            self.mark_dirty();
        }
    }

    fn handle_paste_event(&mut self, text: &str) {
        let session = &mut self.session;
        session.editor.handle_paste(text, &mut session.surface);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if global::handle_global_keys(self, key) {
            return;
        }

        let session = &mut self.session;
        session.editor.handle_key(key, &mut session.surface);
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
