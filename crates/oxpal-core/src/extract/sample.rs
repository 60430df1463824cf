//! Eyedropper Sampling
//!
//! Screenshots and photos carry compression artifacts and anti-aliased
//! edges, so a single-pixel read is noisy. The eyedropper averages a
//! small window around the target instead, weighting the center highest.

use crate::color::ColorValue;
use crate::extract::buffer::ImageBuffer;

/// Pixels below this alpha are invisible to the eyedropper
const SAMPLE_MIN_ALPHA: u8 = 10;

/// Default window radius (a 5x5 neighborhood)
const SAMPLE_RADIUS: u32 = 2;

/// Sample the color under a pixel with the default 5x5 window
pub fn sample_at(image: &ImageBuffer, x: u32, y: u32) -> ColorValue {
    sample_area(image, x, y, SAMPLE_RADIUS)
}

/// Sample a weighted (2r+1) square window centered on a pixel
///
/// Weights fall off with Chebyshev ring distance as `(radius+1-d)²`.
/// Near-transparent pixels are excluded; if that excludes the whole
/// window, the raw center pixel is returned regardless of its alpha.
/// Out-of-bounds window cells are skipped and the center coordinates
/// themselves are clamped into range.
pub fn sample_area(image: &ImageBuffer, x: u32, y: u32, radius: u32) -> ColorValue {
    let x = x.min(image.width() - 1);
    let y = y.min(image.height() - 1);

    let pixels = image.pixels();
    let width = image.width() as usize;

    let mut sum = [0u64; 3];
    let mut total_weight = 0u64;

    let r = i64::from(radius);
    for dy in -r..=r {
        for dx in -r..=r {
            let px = i64::from(x) + dx;
            let py = i64::from(y) + dy;
            if px < 0 || py < 0 || px >= i64::from(image.width()) || py >= i64::from(image.height())
            {
                continue;
            }
            let pixel = pixels[py as usize * width + px as usize];
            if pixel.a < SAMPLE_MIN_ALPHA {
                continue;
            }

            let d = dx.unsigned_abs().max(dy.unsigned_abs());
            let weight = (u64::from(radius) + 1 - d).pow(2);
            sum[0] += u64::from(pixel.r) * weight;
            sum[1] += u64::from(pixel.g) * weight;
            sum[2] += u64::from(pixel.b) * weight;
            total_weight += weight;
        }
    }

    if total_weight == 0 {
        // The whole window was transparent
        let center = pixels[y as usize * width + x as usize];
        return ColorValue::named(center.r, center.g, center.b);
    }

    ColorValue::named(
        ((sum[0] + total_weight / 2) / total_weight) as u8,
        ((sum[1] + total_weight / 2) / total_weight) as u8,
        ((sum[2] + total_weight / 2) / total_weight) as u8,
    )
}
