//! Error taxonomy for the NorthLine compass core
//!
//! Every error here is locally recoverable: each failure path has a defined
//! degraded output and none of them propagate past the component boundary as
//! fatal conditions.

use thiserror::Error;

/// Recoverable failure conditions of the compass core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompassError {
    /// The geomagnetic model failed or no location fix has arrived yet.
    ///
    /// Callers fall back to the uncorrected magnetic azimuth rather than
    /// block; the heading is then true-north-uncertain.
    #[error("declination unavailable, falling back to uncorrected azimuth")]
    UnavailableDeclination,

    /// No usable camera field-of-view metadata.
    ///
    /// The stroke-width calculation falls back to the fixed minimum width.
    #[error("camera field of view unavailable, using minimum stroke width")]
    UnavailableFieldOfView,

    /// A feedback resource (vibration motor, tone) is absent or failed to
    /// load. Reportable but never fatal and never retried.
    #[error("feedback resource unavailable: {0}")]
    FeedbackResourceUnavailable(&'static str),
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn test_error_display() {
        let err = CompassError::FeedbackResourceUnavailable("tone");
        assert_eq!(
            err.to_string(),
            "feedback resource unavailable: tone"
        );
        assert!(
            CompassError::UnavailableDeclination
                .to_string()
                .contains("uncorrected azimuth")
        );
    }
}
