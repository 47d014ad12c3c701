use std::f64::consts::PI;
use std::time::Duration;

use ch_distance::grid::ScalarField2D;
use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Map with two polar coronal holes and a low-latitude extension, `n x 2n` cells.
#[allow(dead_code)]
pub fn polar_holes(n: usize) -> ScalarField2D {
    let t: Vec<f64> = (0..n).map(|i| PI * (i as f64 + 0.5) / n as f64).collect();
    let p: Vec<f64> = (0..2 * n).map(|j| PI * j as f64 / n as f64).collect();
    let mut values = Vec::with_capacity(t.len() * p.len());
    for &pj in &p {
        let reach = 0.5 + 0.3 * (2.0 * pj).sin().max(0.0);
        values.extend(t.iter().map(|&ti| {
            if ti < reach {
                1.0
            } else if ti > PI - 0.45 {
                -1.0
            } else {
                0.0
            }
        }));
    }
    ScalarField2D::new(t, p, values).expect("valid benchmark grid")
}
