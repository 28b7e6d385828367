//! Core types and settings for the NorthLine compass core

/// Default hysteresis gate threshold in degrees (0.00349 rad)
pub const DEFAULT_HYSTERESIS_THRESHOLD_DEG: f32 = 0.2;
/// Default exact-alignment threshold in degrees
pub const DEFAULT_EXACT_THRESHOLD_DEG: f32 = 0.2;
/// Default Polaris visibility tolerance in degrees
pub const DEFAULT_POLARIS_TOLERANCE_DEG: f32 = 0.2;
/// Stroke width used when no camera field of view is available
pub const DEFAULT_MIN_STROKE_WIDTH_PX: u32 = 10;

/// Raw orientation angles derived from one rotation-vector sensor event
///
/// Produced once per sensor event from the 3x3 rotation matrix and discarded
/// after being folded into the stable orientation. All angles are in degrees:
/// azimuth in `[-180, 180]` as reported by the sensor stack, pitch in
/// `[-90, 90]`, roll in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    /// Compass heading in degrees, uncorrected for declination
    pub azimuth_deg: f32,
    /// Rotation about the device X axis in degrees
    pub pitch_deg: f32,
    /// Rotation about the device Y axis in degrees
    pub roll_deg: f32,
}

/// A geo-location fix delivered by the host's location provider
///
/// The provider policy (update interval, minimum displacement) is a host
/// concern; the core only consumes the resulting fixes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
    /// Altitude above the WGS84 ellipsoid in meters
    pub altitude_meters: f64,
    /// Fix timestamp in milliseconds since the Unix epoch
    pub timestamp_millis: i64,
    /// Estimated horizontal accuracy in meters, carried for consumers
    pub horizontal_accuracy_meters: f32,
}

/// The declination computed for one location fix
///
/// Owned by [`GeomagneticService`](crate::GeomagneticService), replaced
/// wholesale on each location update and immutable once produced.
///
/// Sign convention: positive = east of true north, negative = west.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeclinationFix {
    /// Latitude the declination was computed for
    pub latitude: f64,
    /// Longitude the declination was computed for
    pub longitude: f64,
    /// Altitude the declination was computed for, in meters
    pub altitude_meters: f64,
    /// Timestamp the declination was computed for, in Unix milliseconds
    pub timestamp_millis: i64,
    /// Magnetic declination in degrees, positive east
    pub declination_deg: f32,
}

/// The last orientation that passed the hysteresis gate
///
/// This is the only cross-cycle mutable state in the core. It is written
/// exclusively by [`OrientationFilter`](crate::OrientationFilter) and read by
/// the feedback and rendering stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StableOrientation {
    /// Declination-corrected heading in degrees, always in `[0, 360)`
    ///
    /// When no declination is available the heading is the raw magnetic
    /// azimuth normalized into the same range; consumers must treat it as
    /// true-north-uncertain.
    pub azimuth_deg: f32,
    /// Pitch in degrees
    pub pitch_deg: f32,
    /// Roll in degrees
    pub roll_deg: f32,
}

/// Feedback decision for one stable orientation update
///
/// Recomputed every time the stable orientation changes; never persisted
/// across cycles. The engine fires at most one decision per debounced cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackDecision {
    /// No feedback: heading is neither near nor exactly on true north
    #[default]
    None,
    /// Heading lies within the declination band around true north;
    /// triggers a single short haptic pulse
    Proximity,
    /// Heading matches the declination within the exact threshold;
    /// triggers a one-shot tone
    Exact,
}

/// Compass core settings
///
/// Thresholds for the hysteresis gate, the alignment feedback, the Polaris
/// visibility heuristic, and the no-camera stroke-width fallback.
///
/// # Example
/// ```
/// use northline_core::CompassSettings;
///
/// let settings = CompassSettings {
///     exact_threshold_deg: 0.1, // stricter alignment ping
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassSettings {
    /// Minimum per-axis angular change in degrees before a new stable
    /// orientation is emitted (typically 0.2)
    ///
    /// The rotation-vector sensor reports at high frequency with sub-degree
    /// noise; rendering every sample causes visible jitter and audio/haptic
    /// thrashing. The gate trades smoothness for zero added latency.
    pub hysteresis_threshold_deg: f32,
    /// Maximum distance in degrees between heading and declination for the
    /// exact-alignment tone (typically the shared 0.2 constant)
    pub exact_threshold_deg: f32,
    /// Maximum difference in degrees between pitch and latitude for the
    /// Polaris line to be considered visible (typically 0.2)
    pub polaris_tolerance_deg: f32,
    /// Stroke width in pixels used when no camera field of view is available
    pub min_stroke_width_px: u32,
}

impl Default for CompassSettings {
    fn default() -> Self {
        Self {
            hysteresis_threshold_deg: DEFAULT_HYSTERESIS_THRESHOLD_DEG,
            exact_threshold_deg: DEFAULT_EXACT_THRESHOLD_DEG,
            polaris_tolerance_deg: DEFAULT_POLARIS_TOLERANCE_DEG,
            min_stroke_width_px: DEFAULT_MIN_STROKE_WIDTH_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = CompassSettings::default();
        assert_eq!(settings.hysteresis_threshold_deg, 0.2);
        assert_eq!(settings.exact_threshold_deg, 0.2);
        assert_eq!(settings.polaris_tolerance_deg, 0.2);
        assert_eq!(settings.min_stroke_width_px, 10);
    }

    #[test]
    fn test_feedback_decision_default() {
        assert_eq!(FeedbackDecision::default(), FeedbackDecision::None);
    }
}
