//! Search match navigator
//!
//! Keeps a floating "current/total" panel in step with the editor's search:
//! the locator derives the numbers, the overlay controller owns the panel,
//! the bridge decides when to re-derive, and the router turns clicks on the
//! panel's buttons into find commands.

pub mod bridge;
pub mod locator;
pub mod nav_router;
pub mod overlay;
pub mod overlay_render;

pub use bridge::SearchEventBridge;
pub use locator::{OverlayViewModel, locate, view_model};
pub use nav_router::NavCommandRouter;
pub use overlay::{
    LABEL_ID, NEXT_BUTTON_ID, OverlayController, PANEL_ID, PREV_BUTTON_ID, PanelAnchor,
};
