//! # oxpal - Oxidized Palette Engine
//!
//! A pure color engine for palette tooling: dominant-color extraction,
//! color-space conversion, perceptual distance, mixing, harmony, and
//! accessibility evaluation.
//!
//! ## Goals
//!
//! - **Pure**: no I/O and no ambient state; callers pass decoded RGBA
//!   buffers and timestamps in, plain serializable records come out
//! - **Deterministic**: identical input always produces identical output,
//!   including extraction order and generated ids
//! - **Complete**: sRGB, HSL, XYZ, Lab, and LCh conversions with CIE76,
//!   CIE94, and CIEDE2000 distances, WCAG 2.1 contrast, and color-vision
//!   simulation
//! - **Fast**: SIMD-accelerated pixel scans (AVX2, SSE4, NEON) via
//!   runtime dispatch
//!
//! ## Quick Start
//!
//! ```
//! use oxpal_core::{ColorValue, check_wcag, harmony_set, mix};
//!
//! let red = ColorValue::named(255, 0, 0);
//!
//! // Harmony companions on the HSL wheel
//! let set = harmony_set(&red);
//! assert_eq!(set.complementary, "#00FFFF");
//!
//! // Even mix of two colors
//! let purple = mix(&red, &ColorValue::named(0, 0, 255), 0.5);
//! assert_eq!(purple.color.hex, "#800080");
//!
//! // WCAG 2.1 contrast grading
//! let contrast = check_wcag(&red.hex, "#FFFFFF");
//! assert!(contrast.aa.large && !contrast.aa.normal);
//! ```

pub mod batch;
pub mod color;
pub mod cvd;
pub mod distance;
pub mod error;
pub mod export;
pub mod extract;
pub mod harmony;
pub mod mix;
pub mod palette;
pub mod project;
pub mod science;
pub mod wcag;

pub use batch::{BatchImage, BatchJob, BatchOptions, BatchResult, BatchRunner, BatchStatus};
pub use color::{
    ColorId, ColorValue, HslValue, RgbValue, basic_name, hex_to_rgb, parse_hex,
    parse_hex_lenient, perceptual_name, rgb_to_hex,
};
pub use cvd::{CvdReport, CvdType, simulate_cvd};
pub use distance::{DeltaE, DeltaEMethod, MAX_DISTANCE, delta_e_76, delta_e_94, delta_e_2000};
pub use error::{Error, Result};
pub use export::{
    ExportFile, ExportFormat, ExportOptions, ValueFormat, export_bundle, to_css, to_json,
    to_scss, to_text,
};
pub use extract::{
    DisplayBox, DisplayFit, ExtractOptions, ImageBuffer, Quality, Rgba, extract_colors,
    extract_dominant, extract_palette, extract_with, map_display_point, sample_area, sample_at,
};
pub use harmony::{
    HarmonyScheme, HarmonySet, WheelPosition, analogous_run, color_name_from_angle, harmony_set,
    wheel_position,
};
pub use mix::{MixModel, MixedColor, mix, mix_multiple, mix_weighted};
pub use palette::Palette;
pub use project::{Project, ProjectStore};
pub use science::{
    Chromaticity, ColorScience, MixedColorReport, MixingTheory, color_science, explain_mix,
    mixing_theory, psychology_effects, wavelength_description,
};
pub use wcag::{
    LevelGrade, WcagReport, WcagSuggestions, check_wcag, contrast_ratio, darken,
    evaluate_palette_wcag, is_light, lighten,
};

/// Version of oxpal
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
