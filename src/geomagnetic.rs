//! Declination lookup service for the NorthLine compass core

use crate::errors::CompassError;
use crate::types::{DeclinationFix, LocationFix};

/// External geomagnetic declination model
///
/// The core treats declination computation as a black box: implementations
/// typically wrap a world magnetic model (WMM/IGRF) evaluated at a location
/// and time. Out-of-range coordinates or a missing model are reported as
/// [`CompassError::UnavailableDeclination`].
///
/// # Example
/// ```
/// use northline_core::{CompassError, DeclinationModel};
///
/// /// A model that always reports 5° east, useful for tests.
/// struct FixedModel;
///
/// impl DeclinationModel for FixedModel {
///     fn declination(
///         &self,
///         _latitude: f64,
///         _longitude: f64,
///         _altitude_meters: f64,
///         _timestamp_millis: i64,
///     ) -> Result<f32, CompassError> {
///         Ok(5.0)
///     }
/// }
/// ```
pub trait DeclinationModel {
    /// Magnetic declination in degrees at a location and time
    ///
    /// Positive = magnetic north lies east of true north.
    fn declination(
        &self,
        latitude: f64,
        longitude: f64,
        altitude_meters: f64,
        timestamp_millis: i64,
    ) -> Result<f32, CompassError>;
}

/// Caching wrapper around a declination model
///
/// Holds the most recent [`DeclinationFix`] and replaces it wholesale on
/// each location update. There are no retries: a model failure propagates to
/// the caller and leaves the previous fix in place, so consumers keep their
/// last known declination or degrade to the uncorrected azimuth.
#[derive(Debug, Clone)]
pub struct GeomagneticService<M> {
    model: M,
    cached: Option<DeclinationFix>,
}

impl<M: DeclinationModel> GeomagneticService<M> {
    /// Create a service around the given model with an empty cache
    pub fn new(model: M) -> Self {
        Self { model, cached: None }
    }

    /// Recompute the declination for a new location fix
    ///
    /// On success the cached fix is replaced and the new declination
    /// returned. On failure the cache is left untouched.
    pub fn update(&mut self, fix: &LocationFix) -> Result<f32, CompassError> {
        let declination_deg = self.model.declination(
            fix.latitude,
            fix.longitude,
            fix.altitude_meters,
            fix.timestamp_millis,
        )?;

        log::debug!(
            "declination {declination_deg:.2}° at ({:.4}, {:.4})",
            fix.latitude,
            fix.longitude
        );

        self.cached = Some(DeclinationFix {
            latitude: fix.latitude,
            longitude: fix.longitude,
            altitude_meters: fix.altitude_meters,
            timestamp_millis: fix.timestamp_millis,
            declination_deg,
        });

        Ok(declination_deg)
    }

    /// The cached declination in degrees, `None` until the first fix arrives
    pub fn cached(&self) -> Option<f32> {
        self.cached.map(|fix| fix.declination_deg)
    }

    /// The full cached declination fix
    pub fn cached_fix(&self) -> Option<&DeclinationFix> {
        self.cached.as_ref()
    }
}
