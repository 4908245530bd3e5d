//! Widget and surface observers that keep the panel current
//!
//! Widget notifications re-derive the panel immediately. Surface mutations
//! only tell us the dialog came or went: an open dialog schedules a deferred
//! re-derive so the widget can settle its search state first, a closed one
//! removes the panel right away.

use std::time::{Duration, Instant};

#[cfg(debug_assertions)]
use log::debug;

use super::locator::view_model;
use super::overlay::{OverlayController, PANEL_ID};
use crate::editor::{DIALOG_ID, EditorEvent, EditorWidget};
use crate::surface::{Mutation, Surface};

/// Default wait between the dialog appearing and the panel re-derive
pub const DEFAULT_RERENDER_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct SearchEventBridge {
    delay: Duration,
    /// Deadlines of deferred renders, never cancelled
    pending: Vec<Instant>,
}

impl Default for SearchEventBridge {
    fn default() -> Self {
        Self::new(DEFAULT_RERENDER_DELAY)
    }
}

impl SearchEventBridge {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Vec::new(),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// React to one widget notification
    pub fn handle_event<W: EditorWidget + ?Sized>(
        &self,
        event: EditorEvent,
        widget: &W,
        overlay: &OverlayController,
        surface: &mut Surface,
    ) {
        match event {
            EditorEvent::CursorActivity | EditorEvent::Search => {
                Self::refresh(widget, overlay, surface);
            }
        }
    }

    /// React to a drained batch of surface mutations
    ///
    /// Records targeting the panel are ignored so our own create and remove
    /// calls never feed back into this observer.
    pub fn handle_mutations(
        &mut self,
        records: &[Mutation],
        now: Instant,
        overlay: &OverlayController,
        surface: &mut Surface,
    ) {
        if records.iter().all(|m| m.target() == PANEL_ID) {
            return;
        }

        if surface.contains(DIALOG_ID) {
            #[cfg(debug_assertions)]
            debug!("Bridge: dialog present, render deferred by {:?}", self.delay);

            self.pending.push(now + self.delay);
        } else {
            overlay.remove(surface);
        }
    }

    /// Fire every deferred render whose deadline has passed
    ///
    /// All due renders collapse into one refresh. Returns whether one ran.
    pub fn run_due<W: EditorWidget + ?Sized>(
        &mut self,
        now: Instant,
        widget: &W,
        overlay: &OverlayController,
        surface: &mut Surface,
    ) -> bool {
        let before = self.pending.len();
        self.pending.retain(|due| *due > now);
        if self.pending.len() == before {
            return false;
        }

        Self::refresh(widget, overlay, surface);
        true
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Earliest deferred render deadline
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().min().copied()
    }

    /// Re-derive the panel from the widget's current state
    pub fn refresh<W: EditorWidget + ?Sized>(
        widget: &W,
        overlay: &OverlayController,
        surface: &mut Surface,
    ) {
        overlay.render(surface, view_model(widget));
    }
}

#[cfg(test)]
#[path = "bridge_tests.rs"]
mod bridge_tests;
