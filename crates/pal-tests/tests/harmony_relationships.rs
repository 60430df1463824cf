//! Hue-wheel relationships across the whole wheel.
//!
//! The unit tests pin individual goldens; these sweeps verify the
//! relationships hold everywhere: rotations land at the requested
//! angle modulo u8 quantization, saturation and lightness survive every
//! rotation, and the two companion surfaces (`harmony_set` and
//! `HarmonyScheme::companions`) never disagree.

use oxpal_core::color::Hsl;
use oxpal_core::{
    ColorValue, HarmonyScheme, analogous_run, color_name_from_angle, harmony_set, parse_hex,
    wheel_position,
};
use pal_tests::rgb_lattice;

fn hue_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

fn saturated(hue: f64) -> ColorValue {
    let [r, g, b] = Hsl {
        h: hue,
        s: 100.0,
        l: 50.0,
    }
    .to_rgb()
    .to_u8();
    ColorValue::new(r, g, b)
}

fn hue_of(hex: &str) -> f64 {
    let [r, g, b] = oxpal_core::hex_to_rgb(hex);
    ColorValue::new(r, g, b).hsl_f().h
}

#[test]
fn full_red_harmony_set() {
    let set = harmony_set(&ColorValue::new(255, 0, 0));
    assert_eq!(set.complementary, "#00FFFF");
    assert_eq!(set.analogous, ["#FF0080".to_string(), "#FF8000".to_string()]);
    assert_eq!(set.triadic, ["#00FF00".to_string(), "#0000FF".to_string()]);
    assert_eq!(
        set.tetradic,
        [
            "#80FF00".to_string(),
            "#00FFFF".to_string(),
            "#8000FF".to_string()
        ]
    );
    assert_eq!(
        set.split_complementary,
        ["#00FF80".to_string(), "#0080FF".to_string()]
    );
}

#[test]
fn rotations_land_on_the_requested_angle() {
    for base_hue in (0..360).step_by(15) {
        let base = saturated(base_hue as f64);
        let base_h = base.hsl_f().h;

        for scheme in HarmonyScheme::ALL {
            for (companion, offset) in scheme.companions(&base).iter().zip(scheme.offsets()) {
                let expected = (base_h + offset).rem_euclid(360.0);
                let got = hue_of(companion);
                assert!(
                    hue_distance(got, expected) < 1.0,
                    "{} at base hue {}: companion {} landed at {:.2}, wanted {:.2}",
                    scheme,
                    base_hue,
                    companion,
                    got,
                    expected
                );
            }
        }
    }
}

#[test]
fn rotation_preserves_saturation_and_lightness() {
    for rgb in rgb_lattice(51) {
        let base = ColorValue::new(rgb[0], rgb[1], rgb[2]);
        let base_hsl = base.hsl_f();
        // Near-neutral colors have unstable hue; rotation still must not
        // change their lightness.
        for companion in HarmonyScheme::Tetradic.companions(&base) {
            let [r, g, b] = oxpal_core::hex_to_rgb(&companion);
            let got = ColorValue::new(r, g, b).hsl_f();
            assert!(
                (got.l - base_hsl.l).abs() < 1.5,
                "lightness drifted at {:?} -> {}: {} vs {}",
                rgb,
                companion,
                got.l,
                base_hsl.l
            );
            if base_hsl.s > 5.0 {
                assert!(
                    (got.s - base_hsl.s).abs() < 1.5,
                    "saturation drifted at {:?} -> {}: {} vs {}",
                    rgb,
                    companion,
                    got.s,
                    base_hsl.s
                );
            }
        }
    }
}

#[test]
fn complement_of_complement_returns_home() {
    for base_hue in (0..360).step_by(30) {
        let base = saturated(base_hue as f64);
        let once = harmony_set(&base).complementary;
        let [r, g, b] = oxpal_core::hex_to_rgb(&once);
        let twice = harmony_set(&ColorValue::new(r, g, b)).complementary;
        assert!(
            hue_distance(hue_of(&twice), base.hsl_f().h) < 1.0,
            "hue {}: {} -> {} -> {}",
            base_hue,
            base.hex,
            once,
            twice
        );
    }
}

#[test]
fn tetradic_embeds_the_complementary() {
    for rgb in rgb_lattice(85) {
        let base = ColorValue::new(rgb[0], rgb[1], rgb[2]);
        let set = harmony_set(&base);
        assert_eq!(set.tetradic[1], set.complementary, "at {:?}", rgb);
    }
}

#[test]
fn scheme_companions_match_the_set() {
    let base = ColorValue::new(120, 180, 90);
    let set = harmony_set(&base);

    assert_eq!(
        HarmonyScheme::Complementary.companions(&base),
        vec![set.complementary.clone()]
    );
    assert_eq!(HarmonyScheme::Analogous.companions(&base), set.analogous);
    assert_eq!(HarmonyScheme::Triadic.companions(&base), set.triadic);
    assert_eq!(HarmonyScheme::Tetradic.companions(&base), set.tetradic);
    assert_eq!(
        HarmonyScheme::SplitComplementary.companions(&base),
        set.split_complementary
    );
}

#[test]
fn analogous_run_is_centered_for_any_count() {
    let base = ColorValue::new(123, 201, 77);
    for count in 1..=7 {
        let run = analogous_run(&base, count);
        assert_eq!(run.len(), count);
        assert_eq!(
            run[count / 2],
            base.hex,
            "count {} should keep the base in the middle",
            count
        );
    }
    assert!(analogous_run(&base, 0).is_empty());
}

#[test]
fn companions_are_strict_hex_everywhere() {
    for rgb in rgb_lattice(85) {
        let base = ColorValue::new(rgb[0], rgb[1], rgb[2]);
        for scheme in HarmonyScheme::ALL {
            for companion in scheme.companions(&base) {
                assert!(
                    parse_hex(&companion).is_ok(),
                    "{} produced non-canonical hex {:?} for {:?}",
                    scheme,
                    companion,
                    rgb
                );
            }
        }
    }
}

#[test]
fn wheel_position_tracks_rounded_hsl() {
    let orange = ColorValue::new(255, 128, 0);
    let pos = wheel_position(&orange);
    assert_eq!(pos.angle, 30);
    assert_eq!(pos.radius, 100);

    let muted = ColorValue::new(140, 120, 110);
    let pos = wheel_position(&muted);
    let hsl = muted.hsl_f();
    assert_eq!(pos.angle, (hsl.h.round() as u16) % 360);
    assert_eq!(pos.radius, hsl.s.round() as u8);
}

#[test]
fn every_degree_names_exactly_one_band() {
    let mut counts: std::collections::BTreeMap<&str, u32> = std::collections::BTreeMap::new();
    for degree in 0..360 {
        *counts.entry(color_name_from_angle(degree as f64)).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 12, "bands: {:?}", counts.keys());
    for (name, count) in &counts {
        assert_eq!(*count, 30, "band {} covers {} degrees", name, count);
    }
    // The red band straddles zero
    assert_eq!(color_name_from_angle(359.0), "Red");
    assert_eq!(color_name_from_angle(14.9), "Red");
    assert_eq!(color_name_from_angle(-15.0), "Red-Violet");
}

#[test]
fn schemes_present_in_fixed_order() {
    let labels: Vec<String> = HarmonyScheme::ALL.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        labels,
        [
            "Complementary",
            "Analogous",
            "Triadic",
            "Tetradic",
            "Split-Complementary"
        ]
    );
    let points: usize = HarmonyScheme::ALL.iter().map(|s| s.point_count()).sum();
    assert_eq!(points, 2 + 3 + 3 + 4 + 3);
}

#[test]
fn set_serializes_with_snake_case_fields() {
    let json = serde_json::to_value(harmony_set(&ColorValue::new(255, 0, 0))).unwrap();
    assert_eq!(json["complementary"], serde_json::json!("#00FFFF"));
    assert_eq!(json["split_complementary"][0], serde_json::json!("#00FF80"));
    assert_eq!(json["tetradic"].as_array().map(|a| a.len()), Some(3));
}
