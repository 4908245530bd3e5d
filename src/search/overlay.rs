//! Floating match-count panel lifecycle
//!
//! The panel is a single root element on the surface. Every operation here
//! is idempotent: ensuring twice leaves one panel, removing an absent panel
//! does nothing.

use ratatui::layout::Rect;

#[cfg(debug_assertions)]
use log::debug;

use super::locator::OverlayViewModel;
use crate::surface::{Element, ElementId, Surface};
use crate::widgets::popup;

pub const PANEL_ID: ElementId = "find-nav-panel";
pub const PREV_BUTTON_ID: ElementId = "find-prev-btn";
pub const LABEL_ID: ElementId = "find-match-info";
pub const NEXT_BUTTON_ID: ElementId = "find-next-btn";

pub const PREV_GLYPH: &str = "[<]";
pub const NEXT_GLYPH: &str = "[>]";

const BUTTON_WIDTH: u16 = 3;
/// Border, padding and both buttons around the label
const CHROME_WIDTH: u16 = 12;
const PANEL_HEIGHT: u16 = 3;

/// Distance of the panel from the top-right corner of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelAnchor {
    pub top: u16,
    pub right: u16,
}

impl Default for PanelAnchor {
    fn default() -> Self {
        Self { top: 2, right: 3 }
    }
}

#[derive(Debug, Default)]
pub struct OverlayController {
    anchor: PanelAnchor,
}

impl OverlayController {
    pub fn new(anchor: PanelAnchor) -> Self {
        Self { anchor }
    }

    pub fn anchor(&self) -> PanelAnchor {
        self.anchor
    }

    /// Create the panel if it is absent
    pub fn ensure(&self, surface: &mut Surface) -> ElementId {
        if !surface.contains(PANEL_ID) {
            #[cfg(debug_assertions)]
            debug!("Overlay: panel created");

            surface.insert(build_panel());
        }
        PANEL_ID
    }

    pub fn update(&self, surface: &mut Surface, current: usize, total: usize) {
        self.ensure(surface);
        surface.set_text(LABEL_ID, &format!("{}/{}", current, total));
    }

    /// Detach the panel, returns whether one was present
    pub fn remove(&self, surface: &mut Surface) -> bool {
        match surface.remove(PANEL_ID) {
            Some(_) => {
                #[cfg(debug_assertions)]
                debug!("Overlay: panel removed");
                true
            }
            None => false,
        }
    }

    pub fn render(&self, surface: &mut Surface, view: OverlayViewModel) {
        match view {
            OverlayViewModel::Hidden => {
                self.remove(surface);
            }
            OverlayViewModel::Visible { current, total } => {
                self.update(surface, current, total);
            }
        }
    }

    pub fn is_present(&self, surface: &Surface) -> bool {
        surface.contains(PANEL_ID)
    }

    /// Current label text, `None` without a panel
    pub fn label<'a>(&self, surface: &'a Surface) -> Option<&'a str> {
        surface.get(LABEL_ID).map(|e| e.text.as_str())
    }

    /// Assign screen rectangles to the panel and its controls
    ///
    /// Returns the panel rect, or `None` if there is no panel or it does not
    /// fit in `area`. A panel that does not fit loses its geometry so stale
    /// rects cannot take clicks.
    pub fn layout(&self, surface: &mut Surface, area: Rect) -> Option<Rect> {
        let label_width = u16::try_from(self.label(surface)?.chars().count()).unwrap_or(u16::MAX);

        let Some(panel) = panel_rect(area, self.anchor, label_width) else {
            for id in [PANEL_ID, PREV_BUTTON_ID, LABEL_ID, NEXT_BUTTON_ID] {
                surface.clear_rect(id);
            }
            return None;
        };

        let row = panel.y + 1;
        surface.set_rect(PANEL_ID, panel);
        surface.set_rect(PREV_BUTTON_ID, Rect::new(panel.x + 2, row, BUTTON_WIDTH, 1));
        surface.set_rect(LABEL_ID, Rect::new(panel.x + 6, row, label_width, 1));
        surface.set_rect(
            NEXT_BUTTON_ID,
            Rect::new(panel.x + 7 + label_width, row, BUTTON_WIDTH, 1),
        );
        Some(panel)
    }
}

fn build_panel() -> Element {
    Element::new(PANEL_ID)
        .with_child(Element::new(PREV_BUTTON_ID).with_text(PREV_GLYPH))
        .with_child(Element::new(LABEL_ID))
        .with_child(Element::new(NEXT_BUTTON_ID).with_text(NEXT_GLYPH))
}

fn panel_rect(area: Rect, anchor: PanelAnchor, label_width: u16) -> Option<Rect> {
    let width = label_width.checked_add(CHROME_WIDTH)?;
    popup::top_right(area, width, PANEL_HEIGHT, anchor.top, anchor.right)
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod overlay_tests;
