//! Palette fixtures
//!
//! Small hand-picked palettes with known properties, shared by the
//! export, accessibility, and project tests.

use oxpal_core::{ColorValue, Palette};

/// Fixed creation stamp so serialized output is stable
pub const FIXTURE_STAMP: i64 = 1_700_000_000_000;

/// Warm four-color palette used by the export tests
pub fn sunset() -> Palette {
    Palette::from_colors(
        "Sunset",
        vec![
            ColorValue::new(255, 94, 77).with_name("Coral"),
            ColorValue::new(255, 149, 5).with_name("Amber"),
            ColorValue::new(128, 0, 64).with_name("Plum"),
            ColorValue::new(25, 25, 112).with_name("Midnight"),
        ],
        FIXTURE_STAMP,
    )
}

/// Red, amber, green status set
pub fn traffic_light() -> Palette {
    Palette::from_colors(
        "Traffic Light",
        vec![
            ColorValue::new(255, 0, 0).with_name("Red"),
            ColorValue::new(255, 191, 0).with_name("Amber"),
            ColorValue::new(0, 255, 0).with_name("Green"),
        ],
        FIXTURE_STAMP,
    )
}

/// Black, mid gray, white
///
/// Stays distinguishable under every vision type, including full
/// monochromacy, so it anchors the accessible side of the CVD tests.
pub fn mono_anchor() -> Palette {
    Palette::from_colors(
        "Mono Anchor",
        vec![
            ColorValue::new(0, 0, 0).with_name("Black"),
            ColorValue::new(128, 128, 128).with_name("Gray"),
            ColorValue::new(255, 255, 255).with_name("White"),
        ],
        FIXTURE_STAMP,
    )
}

/// Orange and lime that collapse together under reduced red sensitivity
///
/// The orange sits inside the hue band shifted by protanomaly and lands
/// on the lime, which sits just outside the band and stays put.
pub fn clashing_pair() -> Palette {
    Palette::from_colors(
        "Clashing Pair",
        vec![
            ColorValue::new(255, 128, 0).with_name("Orange"),
            ColorValue::new(214, 217, 38).with_name("Lime"),
        ],
        FIXTURE_STAMP,
    )
}

/// The eight corners of the RGB cube
pub fn cube_corners() -> Palette {
    let corners: [[u8; 3]; 8] = [
        [0, 0, 0],
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [255, 255, 0],
        [255, 0, 255],
        [0, 255, 255],
        [255, 255, 255],
    ];
    Palette::from_colors(
        "Cube Corners",
        corners
            .iter()
            .map(|&[r, g, b]| ColorValue::named(r, g, b))
            .collect(),
        FIXTURE_STAMP,
    )
}
