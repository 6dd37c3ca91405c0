// Host-side tests for silk background parameters.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod silk {
    include!("../src/core/silk.rs");
}

use silk::*;

#[test]
fn hex_colors_normalize_to_unit_rgb() {
    let c = hex_to_rgb("#8B6F47").unwrap();
    assert!((c.x - 139.0 / 255.0).abs() < 1e-6);
    assert!((c.y - 111.0 / 255.0).abs() < 1e-6);
    assert!((c.z - 71.0 / 255.0).abs() < 1e-6);

    assert_eq!(hex_to_rgb("000000").unwrap(), glam::Vec3::ZERO);
    assert_eq!(hex_to_rgb("#FFFFFF").unwrap(), glam::Vec3::ONE);
    assert_eq!(hex_to_rgb(" #ffffff "), Some(glam::Vec3::ONE));
}

#[test]
fn malformed_hex_is_rejected() {
    assert_eq!(hex_to_rgb(""), None);
    assert_eq!(hex_to_rgb("#fff"), None);
    assert_eq!(hex_to_rgb("#GGGGGG"), None);
    assert_eq!(hex_to_rgb("#8B6F4"), None);
    assert_eq!(hex_to_rgb("#8B6F477"), None);
}

#[test]
fn defaults_match_documented_values() {
    let d = SilkParams::default();
    assert_eq!(d.color, hex_to_rgb(DEFAULT_COLOR_HEX).unwrap());
    assert_eq!(d.speed, 5.0);
    assert_eq!(d.scale, 1.0);
    assert_eq!(d.rotation, 0.0);
    assert_eq!(d.noise_intensity, 1.5);
    assert_eq!(d.opacity, 0.4);
    assert!(TIME_RATE > 0.0);
}
