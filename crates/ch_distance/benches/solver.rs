mod common;

use std::hint::black_box;

use ch_distance::boundary::{BoundaryPointSet, SeamMode};
use ch_distance::classify::{Class, Classifier};
use ch_distance::mesh::{MeshSource, NearestClassEvaluator, TargetMesh};
use ch_distance::pipeline::{compute_distance, DistanceConfig};
use ch_distance::solver::DistanceSolver;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

const RESOLUTIONS: [usize; 3] = [45, 90, 180];

fn solver_solve_benches(c: &mut Criterion) {
    let classifier = Classifier::default();

    for forced_class in [false, true] {
        let mut group = c.benchmark_group(format!("solver/solve/forced_{forced_class}"));

        for &n in &RESOLUTIONS {
            let field = common::polar_holes(n);
            let boundary = BoundaryPointSet::extract(&field, &classifier, SeamMode::Clamp);
            let solver = DistanceSolver::new(&boundary, &classifier).expect("boundary present");
            let mesh = TargetMesh::from_source(&field);
            let classes: Vec<Class> =
                NearestClassEvaluator::new(&field, classifier).classify_mesh(&mesh);
            group.throughput(common::elements_throughput(mesh.len() * boundary.len()));

            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| {
                    let out = solver
                        .solve(&mesh, &classes, forced_class)
                        .expect("solve succeeds");
                    black_box(out.max());
                });
            });
        }

        group.finish();
    }
}

fn pipeline_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline/compute_distance");
    let config = DistanceConfig::default();

    for &n in &RESOLUTIONS {
        let field = common::polar_holes(n);
        group.throughput(common::elements_throughput(field.len()));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let run = compute_distance(&field, MeshSource::Source, &config)
                    .expect("pipeline succeeds");
                black_box(run.summary.boundary_points);
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = solver_solve_benches, pipeline_benches
}
criterion_main!(benches);
