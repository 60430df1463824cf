//! Accuracy measurement using perceptual color difference metrics
//!
//! Uses CIEDE2000 (deltaE2000) as the primary metric for color
//! difference. Everything here is written straight from the published
//! formulas with no oxpal types, so the engine's own conversion code is
//! never on both sides of a comparison.

/// Statistics from a deltaE comparison
#[derive(Debug, Clone)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Compute stats from raw deltaE samples
    pub fn from_samples(mut samples: Vec<f64>) -> Self {
        if samples.is_empty() {
            return Self {
                mean: 0.0,
                max: 0.0,
                p95: 0.0,
                count: 0,
            };
        }
        samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let count = samples.len();
        let mean = samples.iter().sum::<f64>() / count as f64;
        let max = samples[count - 1];
        let p95_idx = ((count as f64 * 0.95) as usize).min(count - 1);
        let p95 = samples[p95_idx];

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// All differences below the just-noticeable threshold
    pub fn is_imperceptible(&self) -> bool {
        self.max < 1.0
    }

    /// All differences read as the same color at a glance
    pub fn is_close(&self) -> bool {
        self.max < 3.0
    }
}

/// Calculate deltaE2000 between two Lab colors
///
/// The industry-standard color difference formula; a value of 1.0 is
/// roughly the smallest difference perceptible to trained observers.
/// Parametric weights kL, kC, kH are all 1.
pub fn delta_e_2000(lab1: [f64; 3], lab2: [f64; 3]) -> f64 {
    const POW7_25: f64 = 6_103_515_625.0; // 25^7

    let [l1, a1, b1] = lab1;
    let [l2, a2, b2] = lab2;

    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();
    let c_mean = (c1 + c2) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW7_25)).sqrt());

    let ap1 = a1 * (1.0 + g);
    let ap2 = a2 * (1.0 + g);
    let cp1 = (ap1 * ap1 + b1 * b1).sqrt();
    let cp2 = (ap2 * ap2 + b2 * b2).sqrt();

    let hp1 = hue_prime(ap1, b1);
    let hp2 = hue_prime(ap2, b2);

    let dl = l2 - l1;
    let dc = cp2 - cp1;
    let dh = if cp1 * cp2 == 0.0 {
        0.0
    } else {
        let d = hp2 - hp1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let dh_big = 2.0 * (cp1 * cp2).sqrt() * (dh.to_radians() / 2.0).sin();

    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (cp1 + cp2) / 2.0;
    let hp_mean = if cp1 * cp2 == 0.0 {
        hp1 + hp2
    } else if (hp1 - hp2).abs() <= 180.0 {
        (hp1 + hp2) / 2.0
    } else if hp1 + hp2 < 360.0 {
        (hp1 + hp2 + 360.0) / 2.0
    } else {
        (hp1 + hp2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let l_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let s_l = 1.0 + 0.015 * l_sq / (20.0 + l_sq).sqrt();
    let s_c = 1.0 + 0.045 * cp_mean;
    let s_h = 1.0 + 0.015 * cp_mean * t;

    let rot = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = cp_mean.powi(7);
    let r_c = 2.0 * (cp_mean7 / (cp_mean7 + POW7_25)).sqrt();
    let r_t = -r_c * (2.0 * rot).to_radians().sin();

    let vl = dl / s_l;
    let vc = dc / s_c;
    let vh = dh_big / s_h;
    (vl * vl + vc * vc + vh * vh + r_t * vc * vh).sqrt()
}

/// Hue angle of the adjusted a' / b plane, in [0, 360) degrees
fn hue_prime(a_prime: f64, b: f64) -> f64 {
    if a_prime == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

/// Convert an encoded sRGB channel (0-255) to linear light
pub fn srgb_to_linear(value: u8) -> f64 {
    let v = value as f64 / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert linear RGB to XYZ (D65)
pub fn linear_rgb_to_xyz(r: f64, g: f64, b: f64) -> [f64; 3] {
    [
        r * 0.4124564 + g * 0.3575761 + b * 0.1804375,
        r * 0.2126729 + g * 0.7151522 + b * 0.0721750,
        r * 0.0193339 + g * 0.1191920 + b * 0.9503041,
    ]
}

/// Convert XYZ (D65) to Lab
pub fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / 0.95047);
    let fy = lab_f(xyz[1] / 1.0);
    let fz = lab_f(xyz[2] / 1.08883);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_f(t: f64) -> f64 {
    let delta: f64 = 6.0 / 29.0;
    if t > delta.powi(3) {
        t.cbrt()
    } else {
        t / (3.0 * delta * delta) + 4.0 / 29.0
    }
}

/// Convert 8-bit sRGB straight through to Lab
pub fn srgb_to_lab(r: u8, g: u8, b: u8) -> [f64; 3] {
    let xyz = linear_rgb_to_xyz(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    xyz_to_lab(xyz)
}

/// Compare two RGBA pixel buffers and compute deltaE statistics
///
/// Alpha bytes are carried for layout only and are not compared.
pub fn compare_rgba_buffers(reference: &[u8], result: &[u8]) -> DeltaEStats {
    assert_eq!(reference.len(), result.len());
    assert_eq!(reference.len() % 4, 0);

    let samples: Vec<f64> = reference
        .chunks_exact(4)
        .zip(result.chunks_exact(4))
        .map(|(a, b)| {
            let lab_a = srgb_to_lab(a[0], a[1], a[2]);
            let lab_b = srgb_to_lab(b[0], b[1], b[2]);
            delta_e_2000(lab_a, lab_b)
        })
        .collect();

    DeltaEStats::from_samples(samples)
}
