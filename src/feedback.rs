//! Alignment feedback for the NorthLine compass core
//!
//! Decides, for each debounced stable orientation, whether the device heading
//! warrants no feedback, a proximity vibration, or the exact-alignment tone,
//! and dispatches the decision to the host's haptic and audio collaborators.

use crate::errors::CompassError;
use crate::types::FeedbackDecision;

/// Haptic collaborator for the proximity pulse
///
/// Fire-and-forget with no queued repeats. A device without a vibration
/// motor implements this as a silent no-op.
pub trait HapticMotor {
    /// Emit a single short pulse
    fn pulse(&mut self);
}

/// Audio collaborator for the exact-alignment tone
pub trait TonePlayer {
    /// Play the one-shot alignment tone
    ///
    /// A missing or failed audio resource is reported as
    /// [`CompassError::FeedbackResourceUnavailable`]; it is never fatal and
    /// never retried.
    fn ping(&mut self) -> Result<(), CompassError>;
}

/// Feedback decision engine
///
/// Evaluated only when the orientation filter emits a new stable
/// orientation, so each decision fires at most once per debounced cycle.
#[derive(Debug, Clone, Copy)]
pub struct AlignmentFeedbackEngine {
    exact_threshold_deg: f32,
}

impl AlignmentFeedbackEngine {
    /// Create an engine with the given exact-alignment threshold in degrees
    pub fn new(exact_threshold_deg: f32) -> Self {
        Self { exact_threshold_deg }
    }

    /// Decide the feedback for a corrected heading, first match wins:
    ///
    /// 1. Positive declination and the heading inside the declination band
    ///    approaching true north from either side -> [`FeedbackDecision::Proximity`]
    /// 2. Heading within the exact threshold of the declination ->
    ///    [`FeedbackDecision::Exact`]
    /// 3. Otherwise [`FeedbackDecision::None`]
    ///
    /// The exact match compares `|azimuth - declination|` in linear space,
    /// not circularly. With a western (negative) declination the aligned
    /// heading sits just below 360° while the declination is just below 0°,
    /// so the difference is near 360 and the tone does not fire; only an
    /// eastern declination can produce `Exact` for headings in `[0, 360)`.
    pub fn evaluate(&self, corrected_azimuth_deg: f32, declination_deg: f32) -> FeedbackDecision {
        let azimuth = corrected_azimuth_deg;

        if declination_deg > 0.0
            && (azimuth.abs() < declination_deg || (azimuth - 360.0).abs() < declination_deg)
        {
            FeedbackDecision::Proximity
        } else if (azimuth - declination_deg).abs() <= self.exact_threshold_deg {
            FeedbackDecision::Exact
        } else {
            FeedbackDecision::None
        }
    }

    /// The exact-alignment threshold in degrees
    pub fn exact_threshold(&self) -> f32 {
        self.exact_threshold_deg
    }
}

/// Deliver one feedback decision to the host collaborators
///
/// Consumes the decision so it cannot fire twice for the same stable
/// orientation. A tone failure is logged and swallowed; there is no
/// crash-worthy condition here.
pub fn dispatch<H, T>(decision: FeedbackDecision, haptics: &mut H, tone: &mut T)
where
    H: HapticMotor,
    T: TonePlayer,
{
    match decision {
        FeedbackDecision::Proximity => haptics.pulse(),
        FeedbackDecision::Exact => {
            if let Err(error) = tone.ping() {
                log::warn!("alignment tone failed: {error}");
            }
        }
        FeedbackDecision::None => {}
    }
}
