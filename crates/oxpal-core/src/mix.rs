//! Color Mixing
//!
//! Blending happens in 8-bit sRGB, matching what a pixel-art or palette
//! tool shows on screen rather than a physically correct spectral model.
//!
//! Two multi-color strategies are provided. [`mix_multiple`] folds the
//! inputs left to right, re-quantizing to u8 after every step; with three
//! or more unequal weights the compounded rounding makes it an
//! approximation of the true weighted average, and the result depends on
//! input order. [`mix_weighted`] computes the simultaneous weighted sum
//! and rounds once. The fold form is kept because its output is what
//! incremental on-canvas blending produces.

use serde::Serialize;

use crate::color::{ColorId, ColorValue};
use crate::error::{Error, Result};

/// Which physical mixing story a blend is presented under
///
/// Classification is by input count, not physics: blends of up to three
/// colors are presented as light mixing (RGB displays), larger blends as
/// pigment mixing (paints, CMY). A simplified teaching heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MixModel {
    Additive,
    Subtractive,
}

impl MixModel {
    /// Classify a blend by how many colors went into it
    pub fn classify(color_count: usize) -> Self {
        if color_count <= 3 {
            Self::Additive
        } else {
            Self::Subtractive
        }
    }

    /// Lowercase label as serialized
    pub fn label(&self) -> &'static str {
        match self {
            Self::Additive => "additive",
            Self::Subtractive => "subtractive",
        }
    }
}

/// A blended color with its provenance
///
/// Serializes flat: the color's own fields at the top level, with
/// `parents` and `ratio` alongside them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixedColor {
    #[serde(flatten)]
    pub color: ColorValue,
    /// Ids of the input colors, in input order
    pub parents: Vec<ColorId>,
    /// Normalized weight of each input, summing to 1
    pub ratio: Vec<f64>,
}

/// Blend two colors; `ratio` is the weight of `b`
///
/// Interpolates per channel in u8 RGB, rounding to nearest. A ratio of 0
/// returns `a`'s channels, 1 returns `b`'s, 0.5 is the even blend.
/// Out-of-range ratios are clamped.
pub fn mix(a: &ColorValue, b: &ColorValue, ratio: f64) -> MixedColor {
    let t = ratio.clamp(0.0, 1.0);
    let color = ColorValue::new(
        lerp_u8(a.rgb.r, b.rgb.r, t),
        lerp_u8(a.rgb.g, b.rgb.g, t),
        lerp_u8(a.rgb.b, b.rgb.b, t),
    )
    .with_name(composite_name([a, b]));
    MixedColor {
        color,
        parents: vec![a.id.clone(), b.id.clone()],
        ratio: vec![1.0 - t, t],
    }
}

/// Blend colors left to right, one pair at a time
///
/// Each input joins the running blend at its relative weight among the
/// inputs consumed so far, and the running blend re-quantizes to u8 after
/// every step. Ratios default to equal weight and are normalized to sum
/// to 1; a non-positive total also falls back to equal weight.
pub fn mix_multiple(colors: &[ColorValue], ratios: Option<&[f64]>) -> Result<MixedColor> {
    let weights = normalized_weights(colors, ratios)?;

    let mut run = (colors[0].rgb.r, colors[0].rgb.g, colors[0].rgb.b);
    let mut seen = weights[0];
    for (color, w) in colors.iter().zip(weights.iter()).skip(1) {
        seen += w;
        // Zero weight so far: keep the placeholder until weight arrives
        let t = if seen > 0.0 { w / seen } else { 0.0 };
        run = (
            lerp_u8(run.0, color.rgb.r, t),
            lerp_u8(run.1, color.rgb.g, t),
            lerp_u8(run.2, color.rgb.b, t),
        );
    }

    Ok(blended(colors, weights, run))
}

/// Blend colors as one simultaneous weighted sum
///
/// The exact counterpart of [`mix_multiple`]: channels accumulate in f64
/// and round to u8 once at the end, so the result is order-independent.
pub fn mix_weighted(colors: &[ColorValue], ratios: Option<&[f64]>) -> Result<MixedColor> {
    let weights = normalized_weights(colors, ratios)?;

    let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
    for (color, w) in colors.iter().zip(weights.iter()) {
        r += f64::from(color.rgb.r) * w;
        g += f64::from(color.rgb.g) * w;
        b += f64::from(color.rgb.b) * w;
    }

    let run = (r.round() as u8, g.round() as u8, b.round() as u8);
    Ok(blended(colors, weights, run))
}

fn blended(colors: &[ColorValue], weights: Vec<f64>, (r, g, b): (u8, u8, u8)) -> MixedColor {
    MixedColor {
        color: ColorValue::new(r, g, b).with_name(composite_name(colors)),
        parents: colors.iter().map(|c| c.id.clone()).collect(),
        ratio: weights,
    }
}

/// Validate inputs and normalize weights to sum to 1
fn normalized_weights(colors: &[ColorValue], ratios: Option<&[f64]>) -> Result<Vec<f64>> {
    if colors.len() < 2 {
        return Err(Error::TooFewColors {
            required: 2,
            actual: colors.len(),
        });
    }
    let equal = || vec![1.0 / colors.len() as f64; colors.len()];
    match ratios {
        Some(r) if r.len() != colors.len() => Err(Error::RatioMismatch {
            colors: colors.len(),
            ratios: r.len(),
        }),
        Some(r) => {
            let total: f64 = r.iter().sum();
            if total > 0.0 {
                Ok(r.iter().map(|w| w / total).collect())
            } else {
                Ok(equal())
            }
        }
        None => Ok(equal()),
    }
}

fn composite_name<'a>(colors: impl IntoIterator<Item = &'a ColorValue>) -> String {
    colors
        .into_iter()
        .map(|c| c.name.as_deref().unwrap_or(c.hex.as_str()))
        .collect::<Vec<_>>()
        .join(" + ")
}

#[inline]
fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8
}
