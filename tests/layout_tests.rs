// Host-side tests for the page enhancement layout math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod layout {
    include!("../src/layout.rs");
}

use layout::*;

#[test]
fn arrow_points_at_button_center() {
    // Button 100px wide at x=300, menu starting at x=250
    assert_eq!(arrow_offset_px(300.0, 100.0, 250.0), 100.0);
    // Menu flush with the button
    assert_eq!(arrow_offset_px(40.0, 80.0, 40.0), 40.0);
}

#[test]
fn arrow_offset_can_go_negative_when_menu_starts_right_of_button() {
    assert_eq!(arrow_offset_px(0.0, 20.0, 50.0), -40.0);
}

#[test]
fn chatbot_shows_only_past_half_viewport() {
    let h = 800.0;
    assert!(!chatbot_visible(0.0, h, 0.5));
    assert!(!chatbot_visible(400.0, h, 0.5)); // exactly half stays hidden
    assert!(chatbot_visible(400.5, h, 0.5));
    assert!(chatbot_visible(5000.0, h, 0.5));
}

#[test]
fn chatbot_with_zero_height_viewport_shows_on_any_scroll() {
    assert!(!chatbot_visible(0.0, 0.0, 0.5));
    assert!(chatbot_visible(1.0, 0.0, 0.5));
}

#[test]
fn menu_open_state_from_computed_opacity() {
    assert!(!menu_is_open("0"));
    assert!(!menu_is_open(" 0 "));
    assert!(menu_is_open("1"));
    assert!(menu_is_open("0.5"));
    assert!(menu_is_open(""));
}

#[test]
fn css_value_formatting() {
    assert_eq!(px(12.0), "12px");
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(-3.0), "-3px");
    assert_eq!(scale_transform(1.05), "scale(1.05)");
    assert_eq!(scale_transform(1.0), "scale(1)");
}
