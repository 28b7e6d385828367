//! Polaris visibility heuristic for the NorthLine compass core

/// True when the device pitch is close enough to the observer latitude for
/// the Polaris guide line to be shown
///
/// The altitude angle of the celestial pole above the horizon equals the
/// observer's latitude, so a device pitched at the latitude is pointing at
/// the pole. This is a coarse heuristic for a UI toggle, not a rigorous
/// astronomical calculation: refraction, the ~0.7° offset of Polaris from
/// the pole, and terrain are all ignored.
pub fn is_visible(pitch_deg: f32, latitude_deg: f32, tolerance_deg: f32) -> bool {
    (pitch_deg - latitude_deg).abs() < tolerance_deg
}

/// Tolerance-carrying wrapper around [`is_visible`]
///
/// Stateless apart from its configured tolerance; recomputed on every
/// stable orientation update, not gated further.
#[derive(Debug, Clone, Copy)]
pub struct PolarisVisibilityEstimator {
    tolerance_deg: f32,
}

impl PolarisVisibilityEstimator {
    /// Create an estimator with the given tolerance in degrees
    pub fn new(tolerance_deg: f32) -> Self {
        Self { tolerance_deg }
    }

    /// See [`is_visible`]
    pub fn is_visible(&self, pitch_deg: f32, latitude_deg: f32) -> bool {
        is_visible(pitch_deg, latitude_deg, self.tolerance_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_within_tolerance() {
        // Pitch 40.0°, latitude 40.15°: 0.15° difference is inside 0.2°
        assert!(is_visible(40.0, 40.15, 0.2));
        assert!(is_visible(40.15, 40.0, 0.2));
    }

    #[test]
    fn test_hidden_outside_tolerance() {
        assert!(!is_visible(40.0, 41.0, 0.2));
        assert!(!is_visible(40.0, 40.2, 0.2));
    }

    #[test]
    fn test_estimator_carries_tolerance() {
        let estimator = PolarisVisibilityEstimator::new(0.5);
        assert!(estimator.is_visible(40.0, 40.4));
        assert!(!estimator.is_visible(40.0, 40.6));
    }

    #[test]
    fn test_southern_hemisphere() {
        // Negative latitudes work the same way; the pole sits below the
        // horizon but the arithmetic is symmetric
        assert!(is_visible(-33.9, -33.8, 0.2));
        assert!(!is_visible(33.9, -33.9, 0.2));
    }
}
