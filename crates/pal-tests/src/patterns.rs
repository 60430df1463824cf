//! Test image generation
//!
//! Provides synthetic RGBA images for exercising the extraction
//! pipeline. All patterns are opaque unless the variant says otherwise.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use oxpal_core::ImageBuffer;

/// Test pattern types
#[derive(Debug, Clone, Copy)]
pub enum TestPattern {
    /// Horizontal gradient black to white
    GradientH,
    /// Vertical gradient black to white
    GradientV,
    /// RGB color cube corners (8 colors)
    ColorCube,
    /// Hue ramp at full saturation
    HueRamp,
    /// Grayscale ramp 0-255
    Grayscale,
    /// Random pixels with seed
    Random(u64),
    /// Skin tone samples
    SkinTones,
    /// Four solid blocks: top-left, top-right, bottom-left, bottom-right
    Quadrants([[u8; 3]; 4]),
    /// A single color, fully transparent everywhere
    Transparent,
    /// A single color with alpha rising left to right
    AlphaRamp([u8; 3]),
    /// All zeros (black)
    Black,
    /// All 255 (white)
    White,
}

/// Generate test pattern as an RGBA8 buffer
pub fn generate_pattern(pattern: TestPattern, width: usize, height: usize) -> Vec<u8> {
    let pixel_count = width * height;
    let mut data = vec![0u8; pixel_count * 4];
    for chunk in data.chunks_exact_mut(4) {
        chunk[3] = 255;
    }

    match pattern {
        TestPattern::GradientH => {
            for y in 0..height {
                for x in 0..width {
                    let v = ((x as f32 / width as f32) * 255.0) as u8;
                    let idx = (y * width + x) * 4;
                    data[idx] = v;
                    data[idx + 1] = v;
                    data[idx + 2] = v;
                }
            }
        }
        TestPattern::GradientV => {
            for y in 0..height {
                let v = ((y as f32 / height as f32) * 255.0) as u8;
                for x in 0..width {
                    let idx = (y * width + x) * 4;
                    data[idx] = v;
                    data[idx + 1] = v;
                    data[idx + 2] = v;
                }
            }
        }
        TestPattern::ColorCube => {
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
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                chunk[..3].copy_from_slice(&corners[i % 8]);
            }
        }
        TestPattern::HueRamp => {
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                let hue = (i as f32 / pixel_count as f32) * 360.0;
                let (r, g, b) = hsl_to_rgb(hue, 1.0, 0.5);
                chunk[0] = r;
                chunk[1] = g;
                chunk[2] = b;
            }
        }
        TestPattern::Grayscale => {
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                let v = ((i as f32 / pixel_count as f32) * 255.0) as u8;
                chunk[0] = v;
                chunk[1] = v;
                chunk[2] = v;
            }
        }
        TestPattern::Random(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for chunk in data.chunks_exact_mut(4) {
                rng.fill_bytes(&mut chunk[..3]);
            }
        }
        TestPattern::SkinTones => {
            let tones: [[u8; 3]; 6] = [
                [255, 224, 189],
                [241, 194, 125],
                [224, 172, 105],
                [198, 134, 66],
                [141, 85, 36],
                [89, 47, 42],
            ];
            for (i, chunk) in data.chunks_exact_mut(4).enumerate() {
                chunk[..3].copy_from_slice(&tones[i % 6]);
            }
        }
        TestPattern::Quadrants(colors) => {
            for y in 0..height {
                for x in 0..width {
                    let top = y * 2 < height;
                    let left = x * 2 < width;
                    let c = match (top, left) {
                        (true, true) => colors[0],
                        (true, false) => colors[1],
                        (false, true) => colors[2],
                        (false, false) => colors[3],
                    };
                    let idx = (y * width + x) * 4;
                    data[idx..idx + 3].copy_from_slice(&c);
                }
            }
        }
        TestPattern::Transparent => {
            for chunk in data.chunks_exact_mut(4) {
                chunk.copy_from_slice(&[200, 100, 50, 0]);
            }
        }
        TestPattern::AlphaRamp(color) => {
            for y in 0..height {
                for x in 0..width {
                    let a = ((x as f32 / width as f32) * 255.0) as u8;
                    let idx = (y * width + x) * 4;
                    data[idx..idx + 3].copy_from_slice(&color);
                    data[idx + 3] = a;
                }
            }
        }
        TestPattern::Black => {
            // RGB already zeros, alpha already opaque
        }
        TestPattern::White => {
            data.fill(255);
        }
    }

    data
}

/// Generate a pattern wrapped in an [`ImageBuffer`]
pub fn image(pattern: TestPattern, width: u32, height: u32) -> ImageBuffer {
    let data = generate_pattern(pattern, width as usize, height as usize);
    ImageBuffer::new(width, height, data).expect("generated buffer matches dimensions")
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

/// Standard test sizes
pub mod sizes {
    pub const TINY: (usize, usize) = (8, 8);
    pub const SMALL: (usize, usize) = (64, 64);
    pub const MEDIUM: (usize, usize) = (256, 256);
    pub const LARGE: (usize, usize) = (1920, 1080);
}
