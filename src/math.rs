//! Angle utilities and the rotation-vector sensor boundary for the NorthLine
//! compass core

use nalgebra::{ComplexField, Matrix3, RealField, UnitQuaternion};

use crate::types::OrientationSample;

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Normalize an angle in degrees into `[0, 360)`
///
/// The upper bound is exclusive even under float rounding: a tiny negative
/// input wraps to a sum that rounds to exactly 360.0, which must collapse to
/// 0.0 so consumers never see a 360° heading.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Minimal angular distance between two angles in degrees
///
/// Returns `min(|a - b|, 360 - |a - b|)`, which is always `<= 180`. A raw
/// numeric difference misfires across the 0°/360° seam (359° and 1° are 2°
/// apart, not 358°), so all hysteresis deltas go through this.
pub fn circular_distance(a: f32, b: f32) -> f32 {
    let diff = normalize_degrees(a - b);
    diff.min(360.0 - diff)
}

/// Extract azimuth/pitch/roll from a 3x3 rotation matrix
///
/// Matches the sensor-stack orientation decomposition: azimuth is the
/// rotation about the vertical axis measured clockwise from north, pitch the
/// rotation about the device X axis, roll about the device Y axis. Angles
/// are converted to degrees once here, at the boundary.
pub fn orientation_from_rotation_matrix(rotation: &Matrix3<f32>) -> OrientationSample {
    let azimuth_rad = RealField::atan2(rotation[(0, 1)], rotation[(1, 1)]);
    let pitch_rad = ComplexField::asin(-rotation[(2, 1)]);
    let roll_rad = RealField::atan2(-rotation[(2, 0)], rotation[(2, 2)]);

    OrientationSample {
        azimuth_deg: azimuth_rad * RAD_TO_DEG,
        pitch_deg: pitch_rad * RAD_TO_DEG,
        roll_deg: roll_rad * RAD_TO_DEG,
    }
}

/// Extract azimuth/pitch/roll from a rotation-vector quaternion
///
/// The rotation-vector sensor reports device orientation as a unit
/// quaternion; this converts it to a rotation matrix and decomposes it the
/// same way as [`orientation_from_rotation_matrix`].
pub fn orientation_from_rotation_vector(rotation: &UnitQuaternion<f32>) -> OrientationSample {
    orientation_from_rotation_matrix(rotation.to_rotation_matrix().matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(0.0) - 0.0).abs() < EPSILON);
        assert!((normalize_degrees(360.0) - 0.0).abs() < EPSILON);
        assert!((normalize_degrees(-10.0) - 350.0).abs() < EPSILON);
        assert!((normalize_degrees(725.0) - 5.0).abs() < EPSILON);
        assert!((normalize_degrees(-360.0) - 0.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_collapses_float_seam() {
        // -1e-6 % 360 is -1e-6; adding 360 rounds up to exactly 360.0,
        // which must collapse to the inclusive lower bound instead
        assert_eq!(normalize_degrees(-1e-6), 0.0);
        assert_eq!(normalize_degrees(-1e-7), 0.0);
        assert_eq!(normalize_degrees(360.0 - 1e-6), 0.0);
        // A representable value just under 360 passes through untouched
        let just_under = 359.999_94_f32;
        assert!(normalize_degrees(just_under) < 360.0);
        assert!((normalize_degrees(just_under) - just_under).abs() < 1e-3);
    }

    #[test]
    fn test_normalized_range() {
        for i in -720..720 {
            let normalized = normalize_degrees(i as f32 * 0.7);
            assert!((0.0..360.0).contains(&normalized));
        }
    }

    #[test]
    fn test_circular_distance_wraparound() {
        // 359° and 1° are 2° apart, not 358°
        assert!((circular_distance(359.0, 1.0) - 2.0).abs() < EPSILON);
        assert!((circular_distance(1.0, 359.0) - 2.0).abs() < EPSILON);
        assert!((circular_distance(0.0, 180.0) - 180.0).abs() < EPSILON);
        assert!((circular_distance(10.0, 10.0)).abs() < EPSILON);
    }

    #[test]
    fn test_circular_distance_bounded() {
        for a in (0..360).step_by(7) {
            for b in (0..360).step_by(11) {
                let distance = circular_distance(a as f32, b as f32);
                assert!(distance <= 180.0 + EPSILON);
                assert!(distance >= 0.0);
            }
        }
    }

    #[test]
    fn test_orientation_from_identity() {
        let sample = orientation_from_rotation_matrix(&Matrix3::identity());
        assert!(sample.azimuth_deg.abs() < EPSILON);
        assert!(sample.pitch_deg.abs() < EPSILON);
        assert!(sample.roll_deg.abs() < EPSILON);
    }

    #[test]
    fn test_orientation_from_heading_rotation() {
        // A device rotated 90° clockwise about the vertical axis should
        // report a 90° azimuth with level pitch and roll.
        let rotation =
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), -90.0 * DEG_TO_RAD);
        let sample = orientation_from_rotation_vector(&rotation);
        assert!((sample.azimuth_deg - 90.0).abs() < 1e-3);
        assert!(sample.pitch_deg.abs() < 1e-3);
        assert!(sample.roll_deg.abs() < 1e-3);
    }

    #[test]
    fn test_orientation_pitch_only() {
        let rotation =
            UnitQuaternion::from_axis_angle(&Vector3::x_axis(), -30.0 * DEG_TO_RAD);
        let sample = orientation_from_rotation_vector(&rotation);
        assert!((sample.pitch_deg - 30.0).abs() < 1e-3);
    }
}
