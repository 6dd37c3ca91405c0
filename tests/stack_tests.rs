// Host-side tests for the pure stacking engine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod stack {
    include!("../src/core/stack.rs");
}

use stack::*;

const EXTENT: f64 = 800.0;
const TOPS: [f64; 3] = [1000.0, 1880.0, 2760.0];

fn test_config() -> StackConfig {
    StackConfig {
        item_distance: 80.0,
        item_scale: 0.03,
        item_stack_distance: 25.0,
        stack_position: Length::Percent(25.0),
        scale_end_position: Length::Percent(15.0),
        base_scale: 0.88,
        rotation_amount: 0.0,
        blur_amount: 0.0,
        use_window_scroll: true,
    }
}

fn sample(offset: f64) -> LayoutSample {
    LayoutSample {
        offset,
        extent: EXTENT,
        item_tops: TOPS.to_vec(),
        end_marker_top: None,
    }
}

/// Run a fresh engine at one offset; every item emits on its first pass.
fn transforms_at(config: &StackConfig, offset: f64) -> Vec<TransformSnapshot> {
    let mut engine = StackEngine::new(config.clone(), TOPS.len());
    let mut updates = Vec::new();
    engine.compute(&sample(offset), &mut updates);
    let mut out = vec![TransformSnapshot::default(); TOPS.len()];
    for u in &updates {
        out[u.index] = u.transform;
    }
    assert_eq!(updates.len(), TOPS.len(), "first pass must emit every item");
    out
}

// With EXTENT 800 and the config above:
//   stack offset 200, scale-end offset 120
//   trigger starts [800, 1655, 2510], trigger ends [880, 1760, 2640]
//   pin end = (2760 + 800) - 400 = 3160

#[test]
fn length_parsing_and_resolution() {
    assert_eq!(Length::parse("25%"), Some(Length::Percent(25.0)));
    assert_eq!(Length::parse(" 15 % "), Some(Length::Percent(15.0)));
    assert_eq!(Length::parse("120"), Some(Length::Px(120.0)));
    assert_eq!(Length::parse("120px"), Some(Length::Px(120.0)));
    assert_eq!(Length::parse("-40"), Some(Length::Px(-40.0)));
    assert_eq!(Length::parse("abc"), None);
    assert_eq!(Length::parse(""), None);
    assert_eq!(Length::parse("12p"), None);
    assert_eq!(Length::parse("NaN"), None);

    assert_eq!(Length::Percent(25.0).resolve(800.0), 200.0);
    assert_eq!(Length::Px(120.0).resolve(800.0), 120.0);
    // Percentages follow the live extent
    assert_eq!(Length::Percent(25.0).resolve(400.0), 100.0);
}

#[test]
fn config_defaults_are_documented_values() {
    let d = StackConfig::default();
    assert_eq!(d.item_distance, 100.0);
    assert_eq!(d.item_scale, 0.03);
    assert_eq!(d.item_stack_distance, 30.0);
    assert_eq!(d.stack_position, Length::Percent(20.0));
    assert_eq!(d.scale_end_position, Length::Percent(10.0));
    assert_eq!(d.base_scale, 0.85);
    assert_eq!(d.rotation_amount, 0.0);
    assert_eq!(d.blur_amount, 0.0);
    assert!(!d.use_window_scroll);
}

#[test]
fn scale_is_one_before_trigger_and_target_after_end() {
    let config = test_config();
    let resting = transforms_at(&config, 0.0);
    for t in &resting {
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.translate_y, 0.0);
    }
    // Past every trigger end (and the pin end): exact per-index targets.
    let stacked = transforms_at(&config, 3500.0);
    for (i, t) in stacked.iter().enumerate() {
        let target = 0.88 + i as f64 * 0.03;
        assert!(
            (t.scale - target).abs() < 1e-6,
            "item {} scale {} != {}",
            i,
            t.scale,
            target
        );
    }
}

#[test]
fn progress_is_monotonic_and_clamped() {
    let config = test_config();
    let mut prev_scale = f64::INFINITY;
    for step in 0..40 {
        let offset = 700.0 + step as f64 * 10.0; // sweeps across item 0's window
        let t = transforms_at(&config, offset)[0];
        assert!(
            t.scale <= prev_scale + 1e-9,
            "scale increased at offset {}",
            offset
        );
        assert!(t.scale <= 1.0 && t.scale >= 0.88);
        prev_scale = t.scale;
    }
    // Clamped outside the window
    assert_eq!(transforms_at(&config, 790.0)[0].scale, 1.0);
    assert!((transforms_at(&config, 900.0)[0].scale - 0.88).abs() < 1e-6);
}

#[test]
fn pinned_translation_tracks_offset_with_slope_one() {
    let config = test_config();
    // item 0 pinned at offset 1000: 1000 - 1000 + 200 + 0
    assert_eq!(transforms_at(&config, 1000.0)[0].translate_y, 200.0);
    // item 1 pinned at offset 2000: 2000 - 1880 + 200 + 25
    assert_eq!(transforms_at(&config, 2000.0)[1].translate_y, 345.0);
    // slope 1 in offset
    let a = transforms_at(&config, 2000.0)[1].translate_y;
    let b = transforms_at(&config, 2100.0)[1].translate_y;
    assert_eq!(b - a, 100.0);
    // before its pin window the item has not moved
    assert_eq!(transforms_at(&config, 700.0)[0].translate_y, 0.0);
}

#[test]
fn translation_freezes_past_pin_end() {
    let config = test_config();
    let at_end = transforms_at(&config, 3160.0);
    for far in [3200.0, 4000.0, 50_000.0] {
        let parked = transforms_at(&config, far);
        for i in 0..TOPS.len() {
            assert_eq!(
                parked[i].translate_y, at_end[i].translate_y,
                "item {} moved past pin end at offset {}",
                i, far
            );
        }
    }
    assert_eq!(at_end[0].translate_y, 2360.0); // 3160 - 1000 + 200
    assert_eq!(at_end[2].translate_y, 650.0); // 3160 - 2760 + 200 + 50
}

#[test]
fn end_marker_overrides_pin_end() {
    let config = test_config();
    let mut engine = StackEngine::new(config, TOPS.len());
    let mut updates = Vec::new();
    let mut s = sample(3000.0);
    s.end_marker_top = Some(3000.0); // pin end = 3000 - 400 = 2600
    engine.compute(&s, &mut updates);
    let t0 = updates.iter().find(|u| u.index == 0).unwrap().transform;
    // Frozen at the 2600 pin end: 2600 - 1000 + 200
    assert_eq!(t0.translate_y, 1800.0);
}

#[test]
fn blur_follows_depth_below_topmost_active_item() {
    let mut config = test_config();
    config.blur_amount = 1.5;
    // All triggers reached: top index 2
    let all = transforms_at(&config, 2600.0);
    assert_eq!(all[0].blur, 3.0);
    assert_eq!(all[1].blur, 1.5);
    assert_eq!(all[2].blur, 0.0);
    // Only items 0 and 1 triggered: top index 1
    let two = transforms_at(&config, 1700.0);
    assert_eq!(two[0].blur, 1.5);
    assert_eq!(two[1].blur, 0.0);
    assert_eq!(two[2].blur, 0.0);
    // Nothing triggered: no blur anywhere
    for t in transforms_at(&config, 500.0) {
        assert_eq!(t.blur, 0.0);
    }
}

#[test]
fn blur_disabled_by_default() {
    let config = test_config();
    for t in transforms_at(&config, 2600.0) {
        assert_eq!(t.blur, 0.0);
    }
}

#[test]
fn rotation_interpolates_with_progress_and_index() {
    let mut config = test_config();
    config.rotation_amount = 2.0;
    let full = transforms_at(&config, 3500.0);
    assert_eq!(full[0].rotation, 0.0);
    assert_eq!(full[1].rotation, 2.0);
    assert_eq!(full[2].rotation, 4.0);
    // Half way through item 1's window: 1655 + 105/2
    let half = transforms_at(&config, 1707.5)[1];
    assert!((half.rotation - 1.0).abs() < 1e-6);
}

#[test]
fn completion_fires_once_per_entry_and_again_after_exit() {
    let config = test_config();
    let mut engine = StackEngine::new(config, TOPS.len());
    let mut updates = Vec::new();
    // Last item's pin window is [2510, 3160].
    assert_eq!(engine.compute(&sample(2000.0), &mut updates), None);
    assert!(!engine.is_complete());
    assert_eq!(
        engine.compute(&sample(2600.0), &mut updates),
        Some(CompletionEdge::Entered)
    );
    assert!(engine.is_complete());
    // Continuous dwell inside the window: no second edge
    assert_eq!(engine.compute(&sample(2700.0), &mut updates), None);
    assert_eq!(engine.compute(&sample(3100.0), &mut updates), None);
    assert_eq!(
        engine.compute(&sample(3200.0), &mut updates),
        Some(CompletionEdge::Exited)
    );
    assert!(!engine.is_complete());
    // Re-entry fires again
    assert_eq!(
        engine.compute(&sample(2600.0), &mut updates),
        Some(CompletionEdge::Entered)
    );
}

#[test]
fn identical_samples_produce_no_writes() {
    let config = test_config();
    let mut engine = StackEngine::new(config, TOPS.len());
    let mut updates = Vec::new();
    engine.compute(&sample(2000.0), &mut updates);
    assert_eq!(updates.len(), TOPS.len());

    updates.clear();
    engine.compute(&sample(2000.0), &mut updates);
    assert!(updates.is_empty(), "second identical pass must write nothing");

    // A nudge below every tolerance is also suppressed
    updates.clear();
    engine.compute(&sample(2000.05), &mut updates);
    assert!(updates.is_empty(), "sub-tolerance jitter must write nothing");

    // A real scroll step writes again
    updates.clear();
    engine.compute(&sample(2010.0), &mut updates);
    assert!(!updates.is_empty());
}

#[test]
fn reset_reemits_every_item() {
    let config = test_config();
    let mut engine = StackEngine::new(config, TOPS.len());
    let mut updates = Vec::new();
    engine.compute(&sample(2000.0), &mut updates);
    updates.clear();
    engine.reset();
    engine.compute(&sample(2000.0), &mut updates);
    assert_eq!(updates.len(), TOPS.len());
}

#[test]
fn empty_engine_is_inert() {
    let mut engine = StackEngine::new(StackConfig::default(), 0);
    let mut updates = Vec::new();
    let s = LayoutSample {
        offset: 500.0,
        extent: 800.0,
        item_tops: Vec::new(),
        end_marker_top: None,
    };
    assert_eq!(engine.compute(&s, &mut updates), None);
    assert!(updates.is_empty());
    assert!(!engine.is_complete());
}

// Three items at tops 0 / 880 / 1760 in an 800px viewport, the distilled
// walk-through configuration: stack position 25% (200px), scale end 15%.
#[test]
fn three_card_walkthrough() {
    let config = test_config();
    let scenario = |offset: f64| -> Vec<TransformSnapshot> {
        let mut engine = StackEngine::new(config.clone(), 3);
        let mut updates = Vec::new();
        let s = LayoutSample {
            offset,
            extent: 800.0,
            item_tops: vec![0.0, 880.0, 1760.0],
            end_marker_top: None,
        };
        engine.compute(&s, &mut updates);
        let mut out = vec![TransformSnapshot::default(); 3];
        for u in &updates {
            out[u.index] = u.transform;
        }
        out
    };

    // Item 0's whole trigger window [-200, -120] sits above the document
    // top, so it is fully stacked from the start; the later items rest.
    let at_origin = scenario(0.0);
    assert!((at_origin[0].scale - 0.88).abs() < 1e-6);
    assert_eq!(at_origin[1].scale, 1.0);
    assert_eq!(at_origin[2].scale, 1.0);
    assert_eq!(at_origin[1].translate_y, 0.0);
    assert_eq!(at_origin[2].translate_y, 0.0);

    let at_680 = scenario(680.0);
    // item 0 long past its trigger end, pinned 200px down plus the scroll
    assert!((at_680[0].scale - 0.88).abs() < 1e-6);
    assert_eq!(at_680[0].translate_y, 880.0); // 680 - 0 + 200
    assert_eq!(at_680[0].blur, 0.0);
    // item 1 is 25px into its 105px window
    let expected: f64 = 1.0 - (25.0 / 105.0) * (1.0 - 0.91);
    assert!((at_680[1].scale - (expected * 1000.0).round() / 1000.0).abs() < 1e-9);
    // item 2 has not reached its trigger
    assert_eq!(at_680[2].scale, 1.0);
    assert_eq!(at_680[2].blur, 0.0);
}
