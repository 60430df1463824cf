//! RGBA Pixel Buffers
//!
//! [`ImageBuffer`] owns a decoded, tightly-packed RGBA byte buffer.
//! Decoding happens outside the engine; the buffer is validated once at
//! construction and never mutated afterwards.
//!
//! The scan helpers at the bottom are the batch routines the extractor is
//! built on. They run over the typed pixel view so the inner loops stay
//! branch-light and vectorizable.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use bytemuck::{Pod, Zeroable};
use multiversion::multiversion;

use crate::error::{Error, Result};

/// Alpha at or above this counts as visible (about 50% opacity)
pub const VISIBLE_ALPHA: u8 = 128;

/// One RGBA pixel as laid out in the buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// The color channels without alpha
    #[inline]
    pub const fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// A decoded RGBA image owned by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// Take ownership of a tightly-packed RGBA byte buffer
    ///
    /// The buffer must hold exactly `width * height` four-byte pixels and
    /// at least one pixel.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let pixels = width as usize * height as usize;
        if pixels == 0 {
            return Err(Error::EmptyImage);
        }
        let expected = pixels * 4;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Typed view of the pixel data
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        bytemuck::cast_slice(&self.data)
    }

    /// Raw RGBA bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bounds-checked single-pixel read
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels()[y as usize * self.width as usize + x as usize])
    }
}

/// Count pixels at or above a visibility threshold
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn count_visible(pixels: &[Rgba], min_alpha: u8) -> usize {
    pixels.iter().filter(|p| p.a >= min_alpha).count()
}

/// Widen a strided scan of the buffer to packed RGB triples
///
/// Visits every `stride`-th pixel and appends the RGB channels of those
/// passing the alpha threshold; `None` disables the threshold entirely.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn scan_visible_rgb(
    pixels: &[Rgba],
    stride: usize,
    min_alpha: Option<u8>,
    out: &mut Vec<[u8; 3]>,
) {
    let stride = stride.max(1);
    match min_alpha {
        Some(min) => out.extend(
            pixels
                .iter()
                .step_by(stride)
                .filter(|p| p.a >= min)
                .map(Rgba::rgb),
        ),
        None => out.extend(pixels.iter().step_by(stride).map(Rgba::rgb)),
    }
}

/// Accumulate a histogram of exact RGB triples
///
/// Entries are kept in first-encounter order so downstream passes see a
/// deterministic sequence regardless of hash state.
pub fn accumulate_histogram(
    pixels: &[Rgba],
    stride: usize,
    min_alpha: Option<u8>,
) -> Vec<([u8; 3], u32)> {
    let mut scanned = Vec::new();
    scan_visible_rgb(pixels, stride, min_alpha, &mut scanned);

    let mut index: HashMap<[u8; 3], usize> = HashMap::with_capacity(scanned.len().min(4096));
    let mut entries: Vec<([u8; 3], u32)> = Vec::new();
    for rgb in scanned {
        match index.entry(rgb) {
            Entry::Occupied(slot) => entries[*slot.get()].1 += 1,
            Entry::Vacant(slot) => {
                slot.insert(entries.len());
                entries.push((rgb, 1));
            }
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> ImageBuffer {
        let data = rgba.repeat(width as usize * height as usize);
        ImageBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn test_rejects_empty_image() {
        assert!(matches!(
            ImageBuffer::new(0, 10, vec![]),
            Err(Error::EmptyImage)
        ));
        assert!(matches!(
            ImageBuffer::new(10, 0, vec![]),
            Err(Error::EmptyImage)
        ));
    }

    #[test]
    fn test_rejects_size_mismatch() {
        let err = ImageBuffer::new(2, 2, vec![0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferSize {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn test_typed_pixel_view() {
        let buf = ImageBuffer::new(2, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let px = buf.pixels();
        assert_eq!(px.len(), 2);
        assert_eq!(px[0], Rgba { r: 1, g: 2, b: 3, a: 4 });
        assert_eq!(px[1].rgb(), [5, 6, 7]);
    }

    #[test]
    fn test_pixel_bounds() {
        let buf = solid(3, 2, [9, 9, 9, 255]);
        assert!(buf.pixel(2, 1).is_some());
        assert!(buf.pixel(3, 1).is_none());
        assert!(buf.pixel(2, 2).is_none());
    }

    #[test]
    fn test_count_visible() {
        let mut data = [10u8, 10, 10, 255].repeat(3);
        data.extend_from_slice(&[20, 20, 20, 0]);
        let buf = ImageBuffer::new(4, 1, data).unwrap();
        assert_eq!(count_visible(buf.pixels(), VISIBLE_ALPHA), 3);
        assert_eq!(count_visible(buf.pixels(), 0), 4);
    }

    #[test]
    fn test_scan_stride_and_threshold() {
        // Four pixels, the second fully transparent
        let data = vec![
            1, 0, 0, 255, //
            2, 0, 0, 0, //
            3, 0, 0, 255, //
            4, 0, 0, 255,
        ];
        let buf = ImageBuffer::new(4, 1, data).unwrap();

        let mut out = Vec::new();
        scan_visible_rgb(buf.pixels(), 1, Some(VISIBLE_ALPHA), &mut out);
        assert_eq!(out, vec![[1, 0, 0], [3, 0, 0], [4, 0, 0]]);

        out.clear();
        scan_visible_rgb(buf.pixels(), 2, None, &mut out);
        assert_eq!(out, vec![[1, 0, 0], [3, 0, 0]]);
    }

    #[test]
    fn test_histogram_first_encounter_order() {
        let data = vec![
            5, 5, 5, 255, //
            7, 7, 7, 255, //
            5, 5, 5, 255, //
            9, 9, 9, 255, //
            7, 7, 7, 255, //
            5, 5, 5, 255,
        ];
        let buf = ImageBuffer::new(6, 1, data).unwrap();
        let hist = accumulate_histogram(buf.pixels(), 1, Some(VISIBLE_ALPHA));
        assert_eq!(
            hist,
            vec![([5, 5, 5], 3), ([7, 7, 7], 2), ([9, 9, 9], 1)]
        );
    }

    #[test]
    fn test_histogram_threshold_off_sees_transparent() {
        let buf = ImageBuffer::new(2, 1, vec![1, 1, 1, 0, 1, 1, 1, 0]).unwrap();
        assert!(accumulate_histogram(buf.pixels(), 1, Some(VISIBLE_ALPHA)).is_empty());
        assert_eq!(
            accumulate_histogram(buf.pixels(), 1, None),
            vec![([1, 1, 1], 2)]
        );
    }
}
