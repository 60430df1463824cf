//! # pal-tests
//!
//! Accuracy and parity testing for the oxpal color engine.
//!
//! This crate provides:
//! - Golden-value checks against the published CIEDE2000 test pairs
//! - Parity sweeps comparing oxpal conversions to the `palette` crate
//! - Accuracy measurements using deltaE2000
//! - RGBA test image generation for the extraction pipeline
//!
//! ## Reference Implementations
//!
//! - **palette**: independently maintained Rust color library, used as
//!   the conversion and contrast reference
//! - **accuracy**: a self-contained straight-line sRGB-to-Lab pipeline,
//!   kept free of oxpal types so a conversion bug cannot hide in shared
//!   code
//!
//! ## Test Categories
//!
//! 1. **Conversions**: sRGB to HSL, Lab and LCh against golden values
//! 2. **Distance**: CIEDE2000, CIE94 and CIE76 against reference pairs
//! 3. **Accessibility**: WCAG contrast ratios and CVD verdicts
//! 4. **Pipeline**: extraction, mixing, harmony, export, projects, batch

pub mod accuracy;
pub mod corpus;
pub mod parity;
pub mod patterns;
pub mod reference;

pub use accuracy::{DeltaEStats, compare_rgba_buffers, delta_e_2000, srgb_to_lab};
pub use parity::{ParitySweep, rgb_lattice};
