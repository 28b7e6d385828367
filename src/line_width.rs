//! Stroke-width derivation for the north line overlay

use nalgebra::ComplexField;

use crate::math::DEG_TO_RAD;

/// Single-slot memo for the last computed stroke width
///
/// Invalidated whenever the declination or the field of view differs from
/// the cached pair.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LineWidthCacheEntry {
    declination_deg: f32,
    fov_deg: f32,
    stroke_width_px: u32,
}

/// Derives the overlay line stroke width from the camera field of view and
/// the current declination
///
/// The width visualizes the angular gap between magnetic and true north at
/// the camera's zoom level. The declination is rounded up to its ceiling
/// before the trig step, preserving a deliberately coarse visual step
/// rather than continuous scaling.
///
/// # Example
/// ```
/// use northline_core::LineWidthCalculator;
///
/// let mut calculator = LineWidthCalculator::new(10);
/// let width = calculator.stroke_width(1000, 4.2, Some(60.0));
/// assert_eq!(width, 6);
///
/// // No usable camera: fixed minimum regardless of declination
/// assert_eq!(calculator.stroke_width(1000, 4.2, None), 10);
/// ```
#[derive(Debug, Clone)]
pub struct LineWidthCalculator {
    min_stroke_width_px: u32,
    cache: Option<LineWidthCacheEntry>,
    computations: u32,
}

impl LineWidthCalculator {
    /// Create a calculator with the given no-camera fallback width
    pub fn new(min_stroke_width_px: u32) -> Self {
        Self {
            min_stroke_width_px,
            cache: None,
            computations: 0,
        }
    }

    /// Stroke width in pixels for the given view width, declination, and
    /// field of view
    ///
    /// `fov_deg` selection (horizontal vs. vertical sensor dimension by
    /// display rotation) is a collaborator concern; see
    /// [`camera::field_of_view`](crate::camera::field_of_view). A `None`
    /// field of view falls back to the fixed minimum width.
    ///
    /// Repeated calls with an unchanged `(declination, fov)` pair are O(1)
    /// and served from the memo.
    pub fn stroke_width(
        &mut self,
        view_width_px: u32,
        declination_deg: f32,
        fov_deg: Option<f32>,
    ) -> u32 {
        let Some(fov_deg) = fov_deg else {
            return self.min_stroke_width_px;
        };

        if let Some(entry) = self.cache {
            if entry.declination_deg == declination_deg && entry.fov_deg == fov_deg {
                return entry.stroke_width_px;
            }
        }

        self.computations += 1;

        let declination_ceil = ComplexField::ceil(declination_deg);
        let half_fov_rad = fov_deg / 2.0 * declination_ceil * DEG_TO_RAD;
        let spread = ComplexField::sin(half_fov_rad).abs();
        let stroke_width_px =
            ComplexField::ceil(2.0 * view_width_px as f32 * spread / 180.0) as u32;

        log::debug!(
            "stroke width {stroke_width_px}px (fov {fov_deg:.1}°, declination ceil {declination_ceil})"
        );

        self.cache = Some(LineWidthCacheEntry {
            declination_deg,
            fov_deg,
            stroke_width_px,
        });

        stroke_width_px
    }

    /// Number of times the trig step actually ran
    ///
    /// Cache hits and the no-camera fallback do not count.
    pub fn computations(&self) -> u32 {
        self.computations
    }
}
