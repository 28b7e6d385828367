//! Field-of-view derivation from camera lens metadata
//!
//! The compass core only needs the angular extent of the camera view to size
//! the north line overlay; capture and streaming stay with the host. This
//! module turns the focal length and physical sensor size reported by the
//! camera stack into a field of view in degrees.

use nalgebra::ComplexField;

use crate::errors::CompassError;
use crate::math::RAD_TO_DEG;

/// Diagonal of a full-frame 36mm x 24mm sensor, the crop-factor reference
const REFERENCE_SENSOR_DIAGONAL_MM: f32 = 43.27;

/// Physical lens and sensor metadata for the rear-facing camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraIntrinsics {
    /// Lens focal length in millimeters
    pub focal_length_mm: f32,
    /// Physical sensor width in millimeters
    pub sensor_width_mm: f32,
    /// Physical sensor height in millimeters
    pub sensor_height_mm: f32,
}

/// Display rotation, deciding which sensor dimension bounds the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRotation {
    /// Device upright (or upside down): the vertical sensor dimension applies
    Portrait,
    /// Device on its side: the horizontal sensor dimension applies
    Landscape,
}

/// Field of view in degrees for the given intrinsics and display rotation
///
/// Uses the 35mm-equivalent crop factor so the result matches what the lens
/// actually frames: `fov = 2 * atan(d / (2 * f * crop))` where `d` is the
/// sensor dimension selected by the rotation. Degenerate metadata
/// (non-positive focal length or sensor dimensions) yields
/// [`CompassError::UnavailableFieldOfView`]; callers fall back to the fixed
/// minimum stroke width.
pub fn field_of_view(
    intrinsics: &CameraIntrinsics,
    rotation: DisplayRotation,
) -> Result<f32, CompassError> {
    if intrinsics.focal_length_mm <= 0.0
        || intrinsics.sensor_width_mm <= 0.0
        || intrinsics.sensor_height_mm <= 0.0
    {
        return Err(CompassError::UnavailableFieldOfView);
    }

    let diagonal = ComplexField::sqrt(
        intrinsics.sensor_width_mm * intrinsics.sensor_width_mm
            + intrinsics.sensor_height_mm * intrinsics.sensor_height_mm,
    );
    let crop_factor = REFERENCE_SENSOR_DIAGONAL_MM / diagonal;

    let dimension = match rotation {
        DisplayRotation::Portrait => intrinsics.sensor_height_mm,
        DisplayRotation::Landscape => intrinsics.sensor_width_mm,
    };

    let fov_rad = 2.0
        * ComplexField::atan(dimension / (2.0 * intrinsics.focal_length_mm * crop_factor));

    Ok(fov_rad * RAD_TO_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A typical phone main camera: 5.4mm focal length, 1/1.7" class sensor
    const PHONE: CameraIntrinsics = CameraIntrinsics {
        focal_length_mm: 5.4,
        sensor_width_mm: 7.6,
        sensor_height_mm: 5.7,
    };

    #[test]
    fn test_portrait_uses_vertical_dimension() {
        let portrait = field_of_view(&PHONE, DisplayRotation::Portrait).unwrap();
        let landscape = field_of_view(&PHONE, DisplayRotation::Landscape).unwrap();
        assert!(portrait < landscape);
        assert!(portrait > 0.0 && portrait < 180.0);
        assert!(landscape > 0.0 && landscape < 180.0);
    }

    #[test]
    fn test_full_frame_reference() {
        // A full-frame sensor has crop factor 1, so a 24mm-tall sensor
        // behind a 24mm lens gives fov = 2 * atan(0.5) ~= 53.13°
        let full_frame = CameraIntrinsics {
            focal_length_mm: 24.0,
            sensor_width_mm: 36.0,
            sensor_height_mm: 24.0,
        };
        let fov = field_of_view(&full_frame, DisplayRotation::Portrait).unwrap();
        assert!((fov - 53.13).abs() < 0.05);
    }

    #[test]
    fn test_degenerate_metadata_is_unavailable() {
        let mut bad = PHONE;
        bad.focal_length_mm = 0.0;
        assert_eq!(
            field_of_view(&bad, DisplayRotation::Portrait),
            Err(CompassError::UnavailableFieldOfView)
        );

        let mut bad = PHONE;
        bad.sensor_height_mm = -1.0;
        assert_eq!(
            field_of_view(&bad, DisplayRotation::Landscape),
            Err(CompassError::UnavailableFieldOfView)
        );
    }
}
