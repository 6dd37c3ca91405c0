// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_and_speeds_are_positive() {
    assert!(REVEAL_POINT_PX > 0.0);
    assert!(PARALLAX_DEFAULT_SPEED > 0.0 && PARALLAX_DEFAULT_SPEED <= 1.0);
    assert!(PILL_HOVER_SCALE > 1.0);
    assert!(SPLIT_FROM_Y_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn transition_durations_are_sensible() {
    // Leaving a pill settles faster than entering it
    assert!(PILL_HOVER_LEAVE_MS < PILL_HOVER_ENTER_MS);
    assert!(PILL_MENU_MS > 0 && PILL_LOGO_SPIN_MS > 0);
    assert!(PILL_LOAD_STAGGER_MS < PILL_LOAD_MS);
    assert!(SPLIT_DELAY_MS < SPLIT_DURATION_MS);
}

#[test]
fn observer_threshold_is_a_ratio() {
    assert!(SPLIT_OBSERVER_THRESHOLD > 0.0 && SPLIT_OBSERVER_THRESHOLD < 1.0);
    assert!(SPLIT_OBSERVER_MARGIN.ends_with("px"));
}

#[test]
fn eases_are_cubic_bezier_declarations() {
    for ease in [EASE_OUT_CUBIC, EASE_IN_CUBIC, EASE_STANDARD] {
        assert!(ease.starts_with("cubic-bezier("));
        assert!(ease.ends_with(')'));
    }
}
