//! Display Coordinate Mapping
//!
//! The eyedropper receives clicks in on-screen coordinates while the
//! buffer lives in natural pixels. The mapping depends on how the image
//! was scaled into its box: `Contain` letterboxes, `Cover` crops. Clicks
//! landing in letterbox padding clamp to the nearest edge pixel instead
//! of erroring.

/// How the image is scaled into its on-screen box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayFit {
    /// Whole image visible, letterboxed on the short side
    Contain,
    /// Box fully covered, image cropped on the long side
    Cover,
}

/// On-screen size of the rendered image box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBox {
    pub width: f64,
    pub height: f64,
}

impl DisplayBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Map an on-screen point into natural pixel coordinates
///
/// Subtracts the centering offset the fit mode introduces, divides out
/// the scale, and clamps into the valid pixel range.
pub fn map_display_point(
    display: DisplayBox,
    natural_width: u32,
    natural_height: u32,
    fit: DisplayFit,
    x: f64,
    y: f64,
) -> (u32, u32) {
    if natural_width == 0 || natural_height == 0 {
        return (0, 0);
    }
    let nw = f64::from(natural_width);
    let nh = f64::from(natural_height);

    let scale = match fit {
        DisplayFit::Contain => (display.width / nw).min(display.height / nh),
        DisplayFit::Cover => (display.width / nw).max(display.height / nh),
    };
    // Negative for the cropped axis under Cover
    let offset_x = (display.width - nw * scale) / 2.0;
    let offset_y = (display.height - nh * scale) / 2.0;

    let px = ((x - offset_x) / scale).floor().max(0.0);
    let py = ((y - offset_y) / scale).floor().max(0.0);
    (
        (px as u32).min(natural_width - 1),
        (py as u32).min(natural_height - 1),
    )
}
