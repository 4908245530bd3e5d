//! Surface module
//!
//! The surface is the element tree floating above the editor: the widget's
//! search dialog and the match navigation panel live here. Elements are keyed
//! by fixed ids, structural changes are recorded as mutations that observers
//! drain once per event-loop cycle, and clicks are resolved by hit-testing
//! the rectangles assigned during the last paint.

mod surface_state;

pub use surface_state::{Element, ElementId, Mutation, Surface};


#[cfg(test)]
#[path = "surface/surface_hit_test_tests.rs"]
mod surface_hit_test_tests;
