use criterion::{Criterion, black_box, criterion_group, criterion_main};
use northline_core::{
    Compass, CompassError, DeclinationModel, LineWidthCalculator, LocationFix, OrientationFilter,
    OrientationSample,
};
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

struct FixedModel(f32);

impl DeclinationModel for FixedModel {
    fn declination(
        &self,
        _latitude: f64,
        _longitude: f64,
        _altitude_meters: f64,
        _timestamp_millis: i64,
    ) -> Result<f32, CompassError> {
        Ok(self.0)
    }
}

// Pre-generated sensor data to eliminate RNG overhead during benchmarks
struct PreGeneratedData {
    samples: Vec<OrientationSample>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.01; // 100Hz sample rate

            // Slow sweep through north with sub-degree sensor noise on top
            let sweep_phase = time * 0.1 * 2.0 * PI;

            samples.push(OrientationSample {
                azimuth_deg: 30.0 * sweep_phase.sin() + rng.random_range(-0.05..0.05),
                pitch_deg: 40.0 + 2.0 * (sweep_phase * 0.5).cos() + rng.random_range(-0.05..0.05),
                roll_deg: 0.5 * (sweep_phase * 1.3).sin() + rng.random_range(-0.05..0.05),
            });
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> OrientationSample {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

fn bench_orientation_filter(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(4096, 42);
    let mut filter = OrientationFilter::new(0.2);

    c.bench_function("orientation_filter_update", |b| {
        b.iter(|| {
            let sample = data.next();
            black_box(filter.update(black_box(sample), Some(2.5)))
        })
    });
}

fn bench_full_compass_cycle(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(4096, 7);
    let mut compass = Compass::new(FixedModel(2.5));
    compass
        .handle_location(&LocationFix {
            latitude: 40.4,
            longitude: -3.7,
            altitude_meters: 650.0,
            timestamp_millis: 1_700_000_000_000,
            horizontal_accuracy_meters: 5.0,
        })
        .expect("fixed model cannot fail");

    c.bench_function("compass_handle_orientation", |b| {
        b.iter(|| {
            let sample = data.next();
            black_box(compass.handle_orientation(black_box(sample)))
        })
    });
}

fn bench_stroke_width_cached(c: &mut Criterion) {
    let mut calculator = LineWidthCalculator::new(10);
    calculator.stroke_width(1080, 2.5, Some(60.0)); // warm the memo

    c.bench_function("stroke_width_cache_hit", |b| {
        b.iter(|| black_box(calculator.stroke_width(black_box(1080), 2.5, Some(60.0))))
    });
}

criterion_group!(
    benches,
    bench_orientation_filter,
    bench_full_compass_cycle,
    bench_stroke_width_cached
);
criterion_main!(benches);
