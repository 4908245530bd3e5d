//! Click routing for the panel's navigation buttons
//!
//! Nothing is attached to the panel itself. The app's mouse dispatcher asks
//! the router about every left click and the target is resolved by
//! hit-testing the surface at that moment, so recreating the panel can
//! never leave a stale handler behind.

use super::overlay::{NEXT_BUTTON_ID, PREV_BUTTON_ID};
use crate::editor::Command;
use crate::surface::Surface;

#[derive(Debug, Default)]
pub struct NavCommandRouter;

impl NavCommandRouter {
    pub fn new() -> Self {
        Self
    }

    /// Command for a click at the given screen cell, if it hit a button
    pub fn route(&self, surface: &Surface, column: u16, row: u16) -> Option<Command> {
        match surface.element_at(column, row)? {
            NEXT_BUTTON_ID => Some(Command::FindNext),
            PREV_BUTTON_ID => Some(Command::FindPrev),
            _ => None,
        }
    }
}
