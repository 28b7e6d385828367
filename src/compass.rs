//! The NorthLine compass engine
//!
//! A single stateful struct driven by explicit calls from whatever event
//! loop the host provides: sensor events go to [`Compass::handle_orientation`],
//! location fixes to [`Compass::handle_location`], and the overlay sizing to
//! [`Compass::stroke_width`]. The host must serialize those calls onto one
//! thread; the engine holds no locks and never blocks.

use crate::errors::CompassError;
use crate::feedback::AlignmentFeedbackEngine;
use crate::filter::OrientationFilter;
use crate::geomagnetic::{DeclinationModel, GeomagneticService};
use crate::line_width::LineWidthCalculator;
use crate::polaris::PolarisVisibilityEstimator;
use crate::types::{CompassSettings, FeedbackDecision, LocationFix, OrientationSample, StableOrientation};

/// Render-ready outputs for one stable orientation update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// The stable orientation that passed the hysteresis gate
    pub orientation: StableOrientation,
    /// Feedback to dispatch to the haptic/audio collaborators
    pub feedback: FeedbackDecision,
    /// Whether the Polaris guide line should be shown
    pub polaris_visible: bool,
}

/// Orientation and compass feedback engine
///
/// Owns the hysteresis filter, the declination cache, the feedback policy,
/// the Polaris heuristic, and the stroke-width memo. All cross-cycle state
/// has exactly one writer: this engine, on the host's callback thread.
///
/// # Example
/// ```
/// use northline_core::{Compass, CompassError, DeclinationModel, LocationFix, OrientationSample};
///
/// struct FixedModel;
///
/// impl DeclinationModel for FixedModel {
///     fn declination(&self, _: f64, _: f64, _: f64, _: i64) -> Result<f32, CompassError> {
///         Ok(2.0)
///     }
/// }
///
/// let mut compass = Compass::new(FixedModel);
/// compass.handle_location(&LocationFix {
///     latitude: 40.4,
///     longitude: -3.7,
///     altitude_meters: 650.0,
///     timestamp_millis: 1_700_000_000_000,
///     horizontal_accuracy_meters: 5.0,
/// }).unwrap();
///
/// let sample = OrientationSample { azimuth_deg: 10.0, pitch_deg: 20.0, roll_deg: 0.0 };
/// assert!(compass.handle_orientation(sample).is_none()); // baseline
///
/// let moved = OrientationSample { azimuth_deg: 11.0, ..sample };
/// let frame = compass.handle_orientation(moved).unwrap();
/// assert!((frame.orientation.azimuth_deg - 13.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Compass<M> {
    settings: CompassSettings,
    geomagnetic: GeomagneticService<M>,
    filter: OrientationFilter,
    feedback: AlignmentFeedbackEngine,
    polaris: PolarisVisibilityEstimator,
    line_width: LineWidthCalculator,
    latitude_deg: Option<f64>,
}

impl<M: DeclinationModel> Compass<M> {
    /// Create an engine with default settings around the given model
    pub fn new(model: M) -> Self {
        Self::with_settings(model, CompassSettings::default())
    }

    /// Create an engine with explicit settings
    pub fn with_settings(model: M, settings: CompassSettings) -> Self {
        Self {
            settings,
            geomagnetic: GeomagneticService::new(model),
            filter: OrientationFilter::new(settings.hysteresis_threshold_deg),
            feedback: AlignmentFeedbackEngine::new(settings.exact_threshold_deg),
            polaris: PolarisVisibilityEstimator::new(settings.polaris_tolerance_deg),
            line_width: LineWidthCalculator::new(settings.min_stroke_width_px),
            latitude_deg: None,
        }
    }

    /// Process one location fix
    ///
    /// Remembers the latitude for the Polaris check and recomputes the
    /// declination. On model failure the latitude is still updated and the
    /// previous declination (if any) stays in effect.
    pub fn handle_location(&mut self, fix: &LocationFix) -> Result<f32, CompassError> {
        self.latitude_deg = Some(fix.latitude);
        self.geomagnetic.update(fix)
    }

    /// Process one orientation sample
    ///
    /// Returns `None` when the hysteresis gate suppresses the sample, so
    /// feedback is evaluated exactly once per stable orientation and never
    /// on jitter. Before the first location fix the azimuth flows through
    /// uncorrected and no feedback fires (true north is unknown).
    pub fn handle_orientation(&mut self, sample: OrientationSample) -> Option<FrameOutput> {
        let declination = self.geomagnetic.cached();
        let orientation = self.filter.update(sample, declination)?;

        let feedback = match declination {
            Some(declination) => self.feedback.evaluate(orientation.azimuth_deg, declination),
            None => FeedbackDecision::None,
        };

        let polaris_visible = match self.latitude_deg {
            Some(latitude) => self
                .polaris
                .is_visible(orientation.pitch_deg, latitude as f32),
            None => false,
        };

        Some(FrameOutput {
            orientation,
            feedback,
            polaris_visible,
        })
    }

    /// Stroke width in pixels for the north line overlay
    ///
    /// Uses the cached declination (zero before the first fix) and the
    /// host-provided field of view; `None` means no usable camera and
    /// yields the fixed minimum width.
    pub fn stroke_width(&mut self, view_width_px: u32, fov_deg: Option<f32>) -> u32 {
        let declination = self.geomagnetic.cached().unwrap_or(0.0);
        self.line_width
            .stroke_width(view_width_px, declination, fov_deg)
    }

    /// The cached declination in degrees, `None` until the first fix
    pub fn declination(&self) -> Option<f32> {
        self.geomagnetic.cached()
    }

    /// The engine settings
    pub fn settings(&self) -> CompassSettings {
        self.settings
    }

    /// Drop the orientation baseline so the next sample re-establishes it
    ///
    /// Call when the host pauses and later re-registers its sensor
    /// listener; the declination cache and latitude survive the reset.
    pub fn reset_orientation(&mut self) {
        self.filter.reset();
    }
}
