//! Frequency Fallback & Variation Synthesis
//!
//! The median-cut pass can come up short on near-monochrome input. The
//! frequency pass ranks exact RGB buckets so distinct-but-rare colors can
//! top the palette up, and the variation synthesizer manufactures nearby
//! colors when even that is not enough (a perfectly flat image asked for
//! several colors).

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::extract::buffer::{Rgba, accumulate_histogram};

/// Sampling target for the frequency pass
const FREQUENCY_SAMPLE_TARGET: usize = 40_000;

/// Offset vectors for synthesized variations
///
/// Every vector mixes positive and negative components, so a candidate
/// only collapses onto its base when every channel is already pinned at
/// the extreme the offset pushes toward (a pure cube corner).
const VARIATION_OFFSETS: [[i32; 3]; 6] = [
    [24, -16, 8],
    [-24, 16, -8],
    [16, 8, -24],
    [-16, -8, 24],
    [8, -24, 16],
    [-8, 24, -16],
];

/// Stride that brings `pixel_count` down to roughly the sample target
pub fn sample_stride(pixel_count: usize) -> usize {
    (pixel_count / FREQUENCY_SAMPLE_TARGET).max(1)
}

/// Rank exact RGB buckets by descending frequency
///
/// Ties keep first-encounter order (the histogram is accumulated in
/// encounter order and the sort is stable).
pub fn frequency_ranked(pixels: &[Rgba], stride: usize, min_alpha: Option<u8>) -> Vec<[u8; 3]> {
    let mut entries = accumulate_histogram(pixels, stride, min_alpha);
    entries.sort_by_key(|(_, n)| Reverse(*n));
    entries.into_iter().map(|(rgb, _)| rgb).collect()
}

/// Grow a palette to `count` colors by synthesizing variations
///
/// Offset vectors are applied cyclically over the palette (newly
/// synthesized colors join the rotation) with a scale that grows once per
/// offset cycle. Candidates matching an existing color are skipped. Gives
/// up after a long run of consecutive duplicates, which only happens when
/// `count` approaches the size of the reachable color set.
pub fn top_up_with_variations(colors: &mut Vec<[u8; 3]>, count: usize) {
    if colors.is_empty() {
        return;
    }
    let mut present: HashSet<[u8; 3]> = colors.iter().copied().collect();
    let mut attempt = 0usize;
    let mut misses = 0usize;

    while colors.len() < count {
        let base = colors[attempt % colors.len()];
        let offset = VARIATION_OFFSETS[attempt % VARIATION_OFFSETS.len()];
        let scale = 1 + (attempt / VARIATION_OFFSETS.len()) as i32;
        attempt += 1;

        let candidate = [
            shift_channel(base[0], offset[0] * scale),
            shift_channel(base[1], offset[1] * scale),
            shift_channel(base[2], offset[2] * scale),
        ];
        if present.insert(candidate) {
            colors.push(candidate);
            misses = 0;
        } else {
            misses += 1;
            if misses > 4096 {
                break;
            }
        }
    }
}

#[inline]
fn shift_channel(v: u8, delta: i32) -> u8 {
    (i32::from(v) + delta).clamp(0, 255) as u8
}
