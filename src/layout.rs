//! Layout module for tracking UI component regions
//!
//! This module provides region tracking for position-aware mouse interactions.
//! The `LayoutRegions` struct tracks where the fixed parts of the screen are
//! rendered, and `region_at()` determines which one is at a given position.
//! Floating elements (the search dialog and the match panel) are tracked on
//! the surface instead.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
