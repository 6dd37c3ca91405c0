// Host-side tests for the pill hover-circle geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod pill {
    include!("../src/core/pill.rs");
}

use pill::*;

#[test]
fn geometry_matches_closed_form() {
    // 120x40 pill: R = (3600 + 1600) / 80 = 65
    let g = hover_circle(120.0, 40.0);
    assert_eq!(g.diameter, 132.0); // ceil(130) + 2
    assert_eq!(g.bottom_offset, 41.0); // ceil(65 - 25) + 1
    assert_eq!(g.origin_y, 91.0); // diameter - bottom offset
}

#[test]
fn radius_passes_through_top_corners_while_tangent_to_bottom() {
    // The closed form picks the circle centred on the pill's vertical axis
    // that touches the bottom edge and passes through both top corners:
    // R² == (w/2)² + (h − R)².
    for (w, h) in [(60.0_f64, 28.0_f64), (120.0, 40.0), (200.0, 48.0), (90.0, 90.0)] {
        let r = (w * w / 4.0 + h * h) / (2.0 * h);
        let center_y = h - r;
        let corner_sq = w * w / 4.0 + center_y * center_y;
        assert!(
            (corner_sq - r * r).abs() < 1e-6,
            "{}x{} pill: corner distance² {} != R² {}",
            w,
            h,
            corner_sq,
            r * r
        );
        // The padded CSS box is strictly larger than the exact circle
        let g = hover_circle(w, h);
        assert!(g.diameter >= 2.0 * r);
    }
}

#[test]
fn transform_origin_lands_on_the_pill_bottom_edge() {
    // The circle's top sits at h + bottom_offset − diameter from the pill
    // top, so an origin of diameter − bottom_offset is exactly y = h.
    for (w, h) in [(60.0, 28.0), (120.0, 40.0), (200.0, 48.0)] {
        let g = hover_circle(w, h);
        let circle_top = h + g.bottom_offset - g.diameter;
        assert_eq!(circle_top + g.origin_y, h);
    }
}

#[test]
fn wider_pills_need_bigger_circles() {
    let mut prev = 0.0;
    for w in [40.0, 80.0, 120.0, 240.0, 480.0] {
        let g = hover_circle(w, 40.0);
        assert!(g.diameter > prev, "diameter not increasing at width {}", w);
        prev = g.diameter;
    }
}

#[test]
fn degenerate_boxes_are_clamped() {
    // Zero and negative sizes clamp to a 1px box instead of dividing by zero
    let g = hover_circle(0.0, 0.0);
    assert!(g.diameter.is_finite() && g.diameter > 0.0);
    assert!(g.bottom_offset.is_finite() && g.bottom_offset >= 1.0);
    let g = hover_circle(-10.0, -5.0);
    assert!(g.diameter.is_finite() && g.diameter > 0.0);
}

#[test]
fn transform_origin_stays_inside_the_circle() {
    for (w, h) in [(60.0, 28.0), (120.0, 40.0), (320.0, 56.0)] {
        let g = hover_circle(w, h);
        assert!(g.origin_y > 0.0 && g.origin_y < g.diameter);
    }
}
