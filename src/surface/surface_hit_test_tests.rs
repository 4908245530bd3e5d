//! Tests for surface_hit_test

use super::*;
use ratatui::layout::Rect;

fn laid_out_panel() -> Element {
    let mut prev = Element::new("prev");
    prev.rect = Some(Rect::new(11, 3, 3, 1));
    let mut next = Element::new("next");
    next.rect = Some(Rect::new(19, 3, 3, 1));
    let mut panel = Element::new("panel").with_child(prev).with_child(next);
    panel.rect = Some(Rect::new(10, 2, 13, 3));
    panel
}

#[test]
fn test_hit_child_before_parent() {
    let mut surface = Surface::new();
    surface.insert(laid_out_panel());

    assert_eq!(surface.element_at(11, 3), Some("prev"));
    assert_eq!(surface.element_at(13, 3), Some("prev"));
    assert_eq!(surface.element_at(21, 3), Some("next"));
}

#[test]
fn test_hit_parent_between_children() {
    let mut surface = Surface::new();
    surface.insert(laid_out_panel());

    assert_eq!(surface.element_at(16, 3), Some("panel"));
    assert_eq!(surface.element_at(10, 2), Some("panel"));
}

#[test]
fn test_miss_outside_all_elements() {
    let mut surface = Surface::new();
    surface.insert(laid_out_panel());

    assert_eq!(surface.element_at(0, 0), None);
    assert_eq!(surface.element_at(23, 3), None);
    assert_eq!(surface.element_at(15, 5), None);
}

#[test]
fn test_unlaid_element_cannot_be_hit() {
    let mut surface = Surface::new();
    surface.insert(Element::new("dialog"));

    assert_eq!(surface.element_at(0, 0), None);
}

#[test]
fn test_later_roots_are_on_top() {
    let mut surface = Surface::new();
    let mut below = Element::new("below");
    below.rect = Some(Rect::new(0, 0, 10, 10));
    let mut above = Element::new("above");
    above.rect = Some(Rect::new(5, 5, 10, 10));
    surface.insert(below);
    surface.insert(above);

    assert_eq!(surface.element_at(6, 6), Some("above"));
    assert_eq!(surface.element_at(1, 1), Some("below"));
}
