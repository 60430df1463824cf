//! Dominant Color Extraction
//!
//! Three-stage pipeline over a decoded RGBA buffer: a median-cut pass
//! over the visible-pixel histogram, a frequency-ranked top-up when the
//! cut comes up short, and synthesized variations when even distinct
//! pixels run out. The result always reaches the requested palette size
//! except in pathological cases, and identical input always produces
//! identical ordered output.

pub mod buffer;
pub mod frequency;
pub mod median_cut;
pub mod sample;
pub mod viewport;

use serde::Serialize;

pub use buffer::{ImageBuffer, Rgba, VISIBLE_ALPHA};
pub use sample::{sample_area, sample_at};
pub use viewport::{DisplayBox, DisplayFit, map_display_point};

use crate::color::ColorValue;
use crate::extract::buffer::accumulate_histogram;
use crate::extract::frequency::{frequency_ranked, sample_stride, top_up_with_variations};
use crate::extract::median_cut::median_cut;
use crate::palette::Palette;

/// Sampling presets for the histogram scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Visit every pixel
    Exact,
    /// Visit every 5th pixel
    #[default]
    Balanced,
    /// Visit every 10th pixel
    Fast,
}

impl Quality {
    /// Pixel stride of the histogram scan
    pub fn stride(&self) -> usize {
        match self {
            Self::Exact => 1,
            Self::Balanced => 5,
            Self::Fast => 10,
        }
    }
}

/// Options for palette extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractOptions {
    /// Number of colors to extract
    pub count: usize,
    /// Sampling preset for the median-cut histogram
    pub quality: Quality,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            count: 5,
            quality: Quality::default(),
        }
    }
}

/// Extract `count` prominent colors with the default quality
pub fn extract_colors(image: &ImageBuffer, count: usize) -> Vec<ColorValue> {
    extract_with(
        image,
        &ExtractOptions {
            count,
            ..Default::default()
        },
    )
}

/// Extract prominent colors per the given options
///
/// Colors come out in prominence order (larger pixel populations first).
pub fn extract_with(image: &ImageBuffer, options: &ExtractOptions) -> Vec<ColorValue> {
    let count = options.count;
    if count == 0 {
        return Vec::new();
    }
    let pixels = image.pixels();

    let hist = accumulate_histogram(pixels, options.quality.stride(), Some(VISIBLE_ALPHA));
    let mut colors = if hist.is_empty() {
        // Nothing visible at all; rank the raw pixel data instead of
        // aborting on a fully transparent image
        let ranked = frequency_ranked(pixels, sample_stride(image.pixel_count()), None);
        ranked.into_iter().take(count).collect()
    } else {
        median_cut(hist, count)
    };

    // The cut comes up short on near-monochrome input; pull in distinct
    // colors the coarser scan missed, most frequent first
    if colors.len() < count {
        let stride = sample_stride(image.pixel_count());
        for rgb in frequency_ranked(pixels, stride, Some(VISIBLE_ALPHA)) {
            if colors.len() >= count {
                break;
            }
            if !colors.contains(&rgb) {
                colors.push(rgb);
            }
        }
    }

    // Perfectly flat input with count > 1
    if colors.len() < count {
        top_up_with_variations(&mut colors, count);
    }

    colors
        .into_iter()
        .map(|[r, g, b]| ColorValue::named(r, g, b))
        .collect()
}

/// The single most prominent color
///
/// Quantizes with the default palette size and returns the most populous
/// partition's color, which tracks the dominant cluster rather than the
/// whole-image mean.
pub fn extract_dominant(image: &ImageBuffer) -> ColorValue {
    extract_with(image, &ExtractOptions::default())
        .into_iter()
        .next()
        .unwrap_or_else(|| ColorValue::named(0, 0, 0))
}

/// Extract a named palette in one call
pub fn extract_palette(
    image: &ImageBuffer,
    name: impl Into<String>,
    options: &ExtractOptions,
    created_at: i64,
) -> Palette {
    Palette::from_colors(name, extract_with(image, options), created_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrants() -> ImageBuffer {
        // 20x20: red, green, blue, white 10x10 blocks
        let mut data = Vec::with_capacity(20 * 20 * 4);
        for y in 0..20u32 {
            for x in 0..20u32 {
                let rgba: [u8; 4] = match (x < 10, y < 10) {
                    (true, true) => [255, 0, 0, 255],
                    (false, true) => [0, 255, 0, 255],
                    (true, false) => [0, 0, 255, 255],
                    (false, false) => [255, 255, 255, 255],
                };
                data.extend_from_slice(&rgba);
            }
        }
        ImageBuffer::new(20, 20, data).unwrap()
    }

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> ImageBuffer {
        ImageBuffer::new(width, height, rgba.repeat((width * height) as usize)).unwrap()
    }

    #[test]
    fn test_extracts_exact_count() {
        let colors = extract_colors(&quadrants(), 4);
        let hexes: Vec<&str> = colors.iter().map(|c| c.hex.as_str()).collect();
        // Equal populations tie; first-encounter order breaks the tie
        assert_eq!(hexes, vec!["#FF0000", "#00FF00", "#0000FF", "#FFFFFF"]);
        assert!(colors.iter().all(|c| c.name.is_some()));
    }

    #[test]
    fn test_frequency_pass_catches_off_stride_colors() {
        // A lone red pixel at index 3 is invisible to the stride-5 scan
        let mut data = [128u8, 128, 128, 255].repeat(20);
        data[12..16].copy_from_slice(&[200, 0, 0, 255]);
        let image = ImageBuffer::new(20, 1, data).unwrap();

        let colors = extract_colors(&image, 2);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].hex, "#808080");
        assert_eq!(colors[1].hex, "#C80000");
    }

    #[test]
    fn test_flat_image_synthesizes_variations() {
        let colors = extract_colors(&solid(10, 10, [100, 100, 100, 255]), 4);
        assert_eq!(colors.len(), 4);
        assert_eq!(colors[0].hex, "#646464");
        let distinct: std::collections::HashSet<&str> =
            colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(distinct.len(), 4);
    }

    #[test]
    fn test_fully_transparent_image_degrades_gracefully() {
        let colors = extract_colors(&solid(10, 10, [5, 6, 7, 0]), 2);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors[0].hex, "#050607");
    }

    #[test]
    fn test_dominant_tracks_cluster_not_mean() {
        // Rows 0-5 red (60 px), rows 6-9 blue (40 px)
        let mut data = Vec::new();
        for y in 0..10 {
            for _ in 0..10 {
                data.extend_from_slice(if y < 6 {
                    &[255, 0, 0, 255]
                } else {
                    &[0, 0, 255, 255]
                });
            }
        }
        let image = ImageBuffer::new(10, 10, data).unwrap();
        assert_eq!(extract_dominant(&image).hex, "#FF0000");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let image = quadrants();
        let a = extract_colors(&image, 7);
        let b = extract_colors(&image, 7);
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
    }

    #[test]
    fn test_extract_palette_carries_metadata() {
        let palette = extract_palette(
            &quadrants(),
            "Quads",
            &ExtractOptions {
                count: 3,
                quality: Quality::Exact,
            },
            1_720_000_000_000,
        )
        .with_source_image("quads.png");
        assert_eq!(palette.name, "Quads");
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.created_at, 1_720_000_000_000);
        assert_eq!(palette.source_image.as_deref(), Some("quads.png"));
    }

    #[test]
    fn test_zero_count() {
        assert!(extract_colors(&quadrants(), 0).is_empty());
    }
}
