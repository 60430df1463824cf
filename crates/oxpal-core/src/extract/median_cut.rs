//! Median-Cut Quantization
//!
//! Recursively splits the RGB histogram along the widest channel at the
//! pixel-count median, then represents each partition by its
//! population-weighted mean. Partitions come out largest first, which is
//! the prominence order the palette contract asks for.
//!
//! Determinism: entries must arrive in a deterministic order (the
//! histogram accumulator guarantees first-encounter order), all sorts are
//! stable, and population ties resolve by position, so identical input
//! always yields identical output.

use std::cmp::Reverse;

/// One partition of the histogram
#[derive(Debug, Clone)]
struct ColorBox {
    entries: Vec<([u8; 3], u32)>,
}

impl ColorBox {
    fn new(entries: Vec<([u8; 3], u32)>) -> Self {
        Self { entries }
    }

    /// Total pixel population of the partition
    fn pixel_count(&self) -> u64 {
        self.entries.iter().map(|(_, n)| u64::from(*n)).sum()
    }

    /// Index of the channel with the largest value range
    ///
    /// Ties prefer red, then green, matching the fixed channel order.
    fn widest_channel(&self) -> usize {
        let mut min = [255u8; 3];
        let mut max = [0u8; 3];
        for (rgb, _) in &self.entries {
            for c in 0..3 {
                min[c] = min[c].min(rgb[c]);
                max[c] = max[c].max(rgb[c]);
            }
        }
        let range = [
            max[0].saturating_sub(min[0]),
            max[1].saturating_sub(min[1]),
            max[2].saturating_sub(min[2]),
        ];

        if range[0] >= range[1] && range[0] >= range[2] {
            0
        } else if range[1] >= range[2] {
            1
        } else {
            2
        }
    }

    /// Split at the pixel-count median along the widest channel
    fn split(mut self) -> (ColorBox, ColorBox) {
        let channel = self.widest_channel();
        self.entries.sort_by_key(|(rgb, _)| rgb[channel]);

        let total = self.pixel_count();
        let mut running = 0u64;
        let mut split_idx = self.entries.len() / 2;
        for (i, (_, n)) in self.entries.iter().enumerate() {
            running += u64::from(*n);
            if running >= total / 2 {
                split_idx = (i + 1).min(self.entries.len() - 1);
                break;
            }
        }
        // Neither side may come out empty
        split_idx = split_idx.max(1).min(self.entries.len() - 1);

        let right = self.entries.split_off(split_idx);
        (ColorBox::new(self.entries), ColorBox::new(right))
    }

    /// Population-weighted mean color of the partition
    fn average(&self) -> [u8; 3] {
        let total = self.pixel_count();
        if total == 0 {
            return [0, 0, 0];
        }
        let mut sum = [0u64; 3];
        for (rgb, n) in &self.entries {
            for c in 0..3 {
                sum[c] += u64::from(rgb[c]) * u64::from(*n);
            }
        }
        [
            (sum[0] / total) as u8,
            (sum[1] / total) as u8,
            (sum[2] / total) as u8,
        ]
    }
}

/// Reduce a histogram to at most `count` representative colors
///
/// Returns fewer than `count` colors when the histogram has fewer
/// distinct entries than requested; the caller is responsible for topping
/// up. Output is ordered by descending partition population.
pub fn median_cut(entries: Vec<([u8; 3], u32)>, count: usize) -> Vec<[u8; 3]> {
    if count == 0 || entries.is_empty() {
        return Vec::new();
    }

    if entries.len() <= count {
        // Nothing to partition; each distinct color stands alone
        let mut entries = entries;
        entries.sort_by_key(|(_, n)| Reverse(*n));
        return entries.into_iter().map(|(rgb, _)| rgb).collect();
    }

    let mut boxes = vec![ColorBox::new(entries)];
    while boxes.len() < count {
        let splittable = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.entries.len() > 1)
            .max_by_key(|(_, b)| b.pixel_count())
            .map(|(i, _)| i);
        let Some(idx) = splittable else {
            break;
        };

        let (left, right) = boxes.remove(idx).split();
        boxes.push(left);
        boxes.push(right);
    }

    boxes.sort_by_key(|b| Reverse(b.pixel_count()));
    boxes.into_iter().map(|b| b.average()).collect()
}
