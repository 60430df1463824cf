//! Parity testing framework
//!
//! Sweeps a set of RGB inputs through oxpal and through the reference
//! library, then summarizes how far apart the two outputs land.

use crate::accuracy::{DeltaEStats, delta_e_2000};

/// Result of a parity sweep
#[derive(Debug)]
pub struct ParityResult {
    /// Name of the sweep
    pub test_name: String,
    /// Difference statistics across all inputs
    pub stats: DeltaEStats,
    /// Input that produced the largest difference
    pub worst_input: Option<[u8; 3]>,
    /// Whether every input stayed under the tolerance
    pub passed: bool,
}

impl ParityResult {
    /// Check if outputs matched to numeric noise
    pub fn is_exact(&self) -> bool {
        self.stats.max < 0.0001
    }

    /// One-line summary for diagnostics
    pub fn summary(&self) -> String {
        format!(
            "{}: mean {:.6}, p95 {:.6}, max {:.6} over {} inputs (worst at {:?})",
            self.test_name,
            self.stats.mean,
            self.stats.p95,
            self.stats.max,
            self.stats.count,
            self.worst_input,
        )
    }

    /// Panic with the summary if the sweep exceeded its tolerance
    pub fn assert_passed(&self) {
        assert!(self.passed, "parity sweep failed: {}", self.summary());
    }
}

/// A parity sweep comparing oxpal to a reference implementation
pub struct ParitySweep {
    /// Sweep name
    pub name: String,
    /// Maximum allowed difference for any single input
    pub tolerance: f64,
}

impl ParitySweep {
    /// Create a new sweep with a per-input tolerance
    pub fn new(name: impl Into<String>, tolerance: f64) -> Self {
        Self {
            name: name.into(),
            tolerance,
        }
    }

    /// Compare two Lab-valued conversions, measured in deltaE2000
    pub fn run_lab<F, G>(&self, inputs: &[[u8; 3]], ours: F, reference: G) -> ParityResult
    where
        F: Fn([u8; 3]) -> [f64; 3],
        G: Fn([u8; 3]) -> [f64; 3],
    {
        self.collect(inputs, |rgb| delta_e_2000(ours(rgb), reference(rgb)))
    }

    /// Compare two scalar functions, measured as absolute difference
    pub fn run_scalar<F, G>(&self, inputs: &[[u8; 3]], ours: F, reference: G) -> ParityResult
    where
        F: Fn([u8; 3]) -> f64,
        G: Fn([u8; 3]) -> f64,
    {
        self.collect(inputs, |rgb| (ours(rgb) - reference(rgb)).abs())
    }

    fn collect<D>(&self, inputs: &[[u8; 3]], difference: D) -> ParityResult
    where
        D: Fn([u8; 3]) -> f64,
    {
        let mut samples = Vec::with_capacity(inputs.len());
        let mut worst: Option<([u8; 3], f64)> = None;

        for &rgb in inputs {
            let d = difference(rgb);
            if worst.is_none_or(|(_, w)| d > w) {
                worst = Some((rgb, d));
            }
            samples.push(d);
        }

        let stats = DeltaEStats::from_samples(samples);
        let passed = stats.max < self.tolerance;

        ParityResult {
            test_name: self.name.clone(),
            stats,
            worst_input: worst.map(|(rgb, _)| rgb),
            passed,
        }
    }
}

/// Every RGB point on an inclusive lattice with the given step
///
/// Steps that divide 255 evenly (1, 3, 5, 15, 17, 51, 85) put the
/// lattice's last point exactly at 255 on each axis.
pub fn rgb_lattice(step: usize) -> Vec<[u8; 3]> {
    let axis: Vec<u8> = (0..=255usize).step_by(step).map(|v| v as u8).collect();
    let mut points = Vec::with_capacity(axis.len().pow(3));
    for &r in &axis {
        for &g in &axis {
            for &b in &axis {
                points.push([r, g, b]);
            }
        }
    }
    points
}
