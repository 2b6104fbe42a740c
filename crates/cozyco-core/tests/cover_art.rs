//! Integration tests for seed to SVG generation

// Tests are allowed to use expect/unwrap for cleaner error messages
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use cozyco_core::art::{CANVAS_HEIGHT, CANVAS_WIDTH, generate_scene, render_scene};
use cozyco_core::prelude::*;
use std::collections::HashSet;

/// Structural check: one root, one background, one group, self-closed paths
fn assert_well_formed(svg: &str) {
    assert!(svg.starts_with("<svg viewBox=\"0 0 500 500\""));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<svg").count(), 1);
    assert_eq!(svg.matches("</svg>").count(), 1);
    assert_eq!(
        svg.matches("<rect width=\"500\" height=\"500\"").count(),
        1,
        "expected exactly one full-canvas background"
    );
    assert_eq!(svg.matches("<g ").count(), 1);
    assert_eq!(svg.matches("</g>").count(), 1);

    let paths = svg.matches("<path d=\"M").count();
    // Every path plus the background rect is self-closing
    assert_eq!(svg.matches("\" />").count(), paths + 1);
    assert!(svg.find("<rect").unwrap() < svg.find("<g ").unwrap());
}

#[test]
fn same_seed_same_bytes() {
    for seed in ["1234567890", "hello.", "a", "🌲 winter"] {
        assert_eq!(make_cover_art(Some(seed)), make_cover_art(Some(seed)));
    }
}

#[test]
fn sequential_seeds_do_not_collide() {
    let outputs: HashSet<String> = (1..=100)
        .map(|i| make_cover_art(Some(&i.to_string())))
        .collect();
    assert_eq!(outputs.len(), 100);
}

#[test]
fn output_is_well_formed() {
    for seed in ["1", "2", "1234567890", "cozy"] {
        let svg = make_cover_art(Some(seed));
        assert_well_formed(&svg);
        assert!(svg.matches("<path").count() > 0);
    }
}

#[test]
fn reference_seed_scenario() {
    let config = CoverArtConfig::default();
    let mut rng = RandomSource::new(Some("1234567890"));
    let scene = generate_scene(&mut rng, &config);
    assert_eq!(scene.layout, GridLayout::new(4, 3, 5.0));
    assert_eq!(scene.path_count(), 5949);

    let svg = make_cover_art(Some("1234567890"));
    assert_eq!(svg, render_scene(&scene, &config));
    assert_eq!(svg.matches("<path").count(), 5949);
    assert!(svg.contains("stroke-width=\"0.6666666666666666px\""));
    assert_eq!((CANVAS_WIDTH, CANVAS_HEIGHT), (500.0, 500.0));
}

#[test]
fn compatible_scheme_via_config() {
    let config = CoverArtConfig {
        key_scheme: KeyScheme::Compatible,
        ..CoverArtConfig::default()
    };
    let svg = make_cover_art_with(Some("1234567890"), &config);
    assert_well_formed(&svg);
    assert_eq!(svg.matches("<path").count(), 1861);
    assert!(svg.contains(
        "<path d=\"M139.5 53.99034860242714 L142.15536186310135 226.0170932330089\" />"
    ));
}

#[test]
fn missing_seed_still_renders() {
    assert_well_formed(&make_cover_art(None));
    assert_well_formed(&make_cover_art(Some("")));
}

#[test]
fn empty_scene_renders_cleanly() {
    let scene = Scene {
        layout: GridLayout::default(),
        paths: Vec::new(),
    };
    let svg = render_scene(&scene, &CoverArtConfig::default());
    assert_well_formed(&svg);
    assert_eq!(svg.matches("<path").count(), 0);
}

#[test]
fn single_level_config_renders_without_nan() {
    let config = CoverArtConfig {
        branch_levels: cozyco_core::art::DrawRange::new(1.0, 1.5),
        ..CoverArtConfig::default()
    };
    let svg = make_cover_art_with(Some("x"), &config);
    assert_well_formed(&svg);
    assert!(!svg.contains("NaN"));
    assert!(CoverArtConfig::from_json(r#"{"branch_levels": {"min": 1.0, "max": 1.5}}"#).is_err());
}

#[test]
fn range_and_truncation_contracts() {
    let mut rng = RandomSource::new(Some("contracts"));
    let mut bounds = RandomSource::new(Some("bounds"));

    for _ in 0..10_000 {
        let (a, b) = (bounds.value_range(-50.0, 50.0), bounds.value_range(-50.0, 50.0));
        let v = rng.value_range(a, b);
        assert!(v >= a.min(b) && (v < a.max(b) || a == b));

        let n = rng.value_int_range(0.0, 5.0);
        assert!((0..=4).contains(&n));
    }

    let trues = (0..10_000).filter(|_| rng.boolean()).count();
    assert!((4500..=5500).contains(&trues), "trues = {}", trues);
}

#[test]
fn generation_is_independent_across_threads() {
    let expected = make_cover_art(Some("parallel"));
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| make_cover_art(Some("parallel"))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn greetings_card_wraps_cover() {
    let card = make_greetings_card(Some("1234567890"), "Cozy Co", "Friend");
    assert!(card.contains("<div class=\"cover\">"));
    assert_well_formed(
        card.split("<div class=\"cover\">")
            .nth(1)
            .and_then(|rest| rest.split("</div>").next())
            .map(str::trim)
            .unwrap(),
    );
}
