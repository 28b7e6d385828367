use northline_core::{
    Compass, CompassError, DeclinationModel, FeedbackDecision, LocationFix, OrientationSample,
};

/// Stand-in for a real world magnetic model evaluation
struct FixedModel;

impl DeclinationModel for FixedModel {
    fn declination(&self, _: f64, _: f64, _: f64, _: i64) -> Result<f32, CompassError> {
        Ok(2.0) // 2° east
    }
}

fn main() {
    let mut compass = Compass::new(FixedModel);

    // One location fix, as the host's location callback would deliver it
    compass
        .handle_location(&LocationFix {
            latitude: 40.4168,
            longitude: -3.7038,
            altitude_meters: 650.0,
            timestamp_millis: 1_700_000_000_000,
            horizontal_accuracy_meters: 5.0,
        })
        .expect("fixed model cannot fail");

    println!(
        "declination: {:.1}°, overlay stroke: {}px",
        compass.declination().unwrap(),
        compass.stroke_width(1080, Some(60.0))
    );

    // Sweep the device heading through true north in half-degree steps
    let mut azimuth = -6.0f32;
    while azimuth <= 2.0 {
        let sample = OrientationSample {
            azimuth_deg: azimuth, // replace with rotation-vector sensor output
            pitch_deg: 40.3,      // close to the latitude, so Polaris shows
            roll_deg: 0.0,
        };

        if let Some(frame) = compass.handle_orientation(sample) {
            let marker = match frame.feedback {
                FeedbackDecision::None => "",
                FeedbackDecision::Proximity => "  << vibrate",
                FeedbackDecision::Exact => "  << ping",
            };
            println!(
                "heading {:6.2}°  polaris {}{}",
                frame.orientation.azimuth_deg,
                if frame.polaris_visible { "shown" } else { "hidden" },
                marker
            );
        }

        azimuth += 0.5;
    }
}
