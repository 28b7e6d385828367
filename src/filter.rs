//! Hysteresis orientation filter for the NorthLine compass core

use crate::math::{circular_distance, normalize_degrees};
use crate::types::{OrientationSample, StableOrientation};

/// Jitter-suppressing orientation filter
///
/// Converts raw orientation samples into declination-corrected stable
/// orientations behind a single-baseline hysteresis gate: a new stable
/// orientation is emitted only when any axis moves further than the
/// threshold from the last accepted sample. This is deliberately not a
/// moving average; it trades smoothness for simplicity and zero added
/// latency.
///
/// The gate compares raw sensor angles, while the emitted azimuth is the
/// declination-corrected heading. The filter is the sole writer of the
/// stable orientation.
///
/// # Example
/// ```
/// use northline_core::{OrientationFilter, OrientationSample};
///
/// let mut filter = OrientationFilter::new(0.2);
/// let sample = OrientationSample { azimuth_deg: 10.0, pitch_deg: 0.0, roll_deg: 0.0 };
///
/// // The first sample only establishes the baseline
/// assert!(filter.update(sample, Some(5.0)).is_none());
///
/// let moved = OrientationSample { azimuth_deg: 11.0, ..sample };
/// let stable = filter.update(moved, Some(5.0)).unwrap();
/// assert!((stable.azimuth_deg - 16.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct OrientationFilter {
    threshold_deg: f32,
    baseline: Option<OrientationSample>,
}

impl OrientationFilter {
    /// Create a filter with the given per-axis hysteresis threshold in degrees
    pub fn new(threshold_deg: f32) -> Self {
        Self {
            threshold_deg,
            baseline: None,
        }
    }

    /// Fold one raw sample into the stable orientation
    ///
    /// Returns the new [`StableOrientation`] when the gate opens, `None`
    /// when the sample is suppressed as jitter. The very first call stores
    /// the sample as the baseline and returns `None`: the first sample
    /// establishes a reference point rather than producing output.
    ///
    /// When `declination_deg` is `None` the uncorrected azimuth is
    /// propagated (degraded mode; the heading is true-north-uncertain).
    pub fn update(
        &mut self,
        raw: OrientationSample,
        declination_deg: Option<f32>,
    ) -> Option<StableOrientation> {
        let corrected_azimuth = match declination_deg {
            Some(declination) => normalize_degrees(raw.azimuth_deg + declination),
            None => normalize_degrees(raw.azimuth_deg),
        };

        let Some(baseline) = self.baseline else {
            self.baseline = Some(raw);
            return None;
        };

        // Deltas in raw sensor-angle space, not the corrected azimuth.
        // Circular distance keeps the 359° -> 1° transition a 2° move.
        let delta_azimuth = circular_distance(raw.azimuth_deg, baseline.azimuth_deg);
        let delta_pitch = circular_distance(raw.pitch_deg, baseline.pitch_deg);
        let delta_roll = circular_distance(raw.roll_deg, baseline.roll_deg);

        if delta_azimuth > self.threshold_deg
            || delta_pitch > self.threshold_deg
            || delta_roll > self.threshold_deg
        {
            self.baseline = Some(raw);
            let stable = StableOrientation {
                azimuth_deg: corrected_azimuth,
                pitch_deg: raw.pitch_deg,
                roll_deg: raw.roll_deg,
            };
            log::debug!(
                "stable orientation: azimuth {:.2}°, pitch {:.2}°, roll {:.2}°",
                stable.azimuth_deg,
                stable.pitch_deg,
                stable.roll_deg
            );
            Some(stable)
        } else {
            None
        }
    }

    /// Clear the baseline so the next sample re-establishes the reference
    ///
    /// Used when the host suspends and re-registers its sensor listener.
    pub fn reset(&mut self) {
        self.baseline = None;
    }

    /// The hysteresis threshold in degrees
    pub fn threshold(&self) -> f32 {
        self.threshold_deg
    }
}
