#![no_std]

//! NorthLine core - the orientation and compass feedback engine behind a
//! true-north camera overlay
//!
//! This library turns raw rotation-vector sensor samples and periodic
//! geo-location fixes into:
//!
//! - a true-north-corrected heading (magnetic azimuth + declination),
//! - a jitter-filtered "stable" heading behind a hysteresis gate,
//! - a feedback decision (silence, proximity vibration, exact-alignment tone),
//! - a Polaris visibility flag (device pitch vs. observer latitude),
//! - a stroke width for the north line overlay, derived from the camera
//!   field of view and the current declination.
//!
//! Everything around it - screen layout, permissions, camera preview,
//! haptic and audio hardware - is a host collaborator: the host feeds plain
//! inputs in and consumes the outputs. The core never blocks, never retries,
//! and every failure path has a defined degraded output.
//!
//! # Quick Start
//!
//! ```rust
//! use northline_core::{
//!     Compass, CompassError, DeclinationModel, LocationFix, OrientationSample,
//! };
//!
//! // Plug in any declination model; WMM/IGRF evaluation is external.
//! struct FixedModel;
//!
//! impl DeclinationModel for FixedModel {
//!     fn declination(&self, _: f64, _: f64, _: f64, _: i64) -> Result<f32, CompassError> {
//!         Ok(2.0)
//!     }
//! }
//!
//! let mut compass = Compass::new(FixedModel);
//!
//! // Location callback
//! compass.handle_location(&LocationFix {
//!     latitude: 40.4,
//!     longitude: -3.7,
//!     altitude_meters: 650.0,
//!     timestamp_millis: 1_700_000_000_000,
//!     horizontal_accuracy_meters: 5.0,
//! })?;
//!
//! // Sensor callback: the first sample establishes the baseline
//! let sample = OrientationSample { azimuth_deg: 10.0, pitch_deg: 20.0, roll_deg: 0.0 };
//! compass.handle_orientation(sample);
//!
//! // Subsequent samples emit a frame when they beat the hysteresis gate
//! let moved = OrientationSample { azimuth_deg: 12.0, ..sample };
//! if let Some(frame) = compass.handle_orientation(moved) {
//!     // frame.orientation, frame.feedback, frame.polaris_visible
//! }
//!
//! // Overlay sizing from the camera field of view
//! let stroke = compass.stroke_width(1080, Some(60.0));
//! # Ok::<(), CompassError>(())
//! ```
//!
//! The host must serialize sensor and location callbacks onto one thread;
//! the core assumes a single writer and takes no locks.

pub mod camera;
mod compass;
mod errors;
pub mod feedback;
mod filter;
mod geomagnetic;
mod line_width;
pub mod math;
pub mod polaris;
mod types;

// Re-export all public types and functions
pub use compass::{Compass, FrameOutput};
pub use errors::CompassError;
pub use feedback::{AlignmentFeedbackEngine, HapticMotor, TonePlayer, dispatch};
pub use filter::OrientationFilter;
pub use geomagnetic::{DeclinationModel, GeomagneticService};
pub use line_width::LineWidthCalculator;
pub use math::{DEG_TO_RAD, RAD_TO_DEG, circular_distance, normalize_degrees};
pub use polaris::PolarisVisibilityEstimator;
pub use types::*;
