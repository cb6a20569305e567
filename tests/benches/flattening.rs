#[macro_use]
extern crate criterion;

use criterion::Criterion;

use flatiron::tessellation::{tessellate_polyline, PolylineOptions};
use flatiron_tests::golden_heart::{build_heart_path, heart_cubics};

static TOLERANCES: [f32; 4] = [1.0, 0.1, 0.01, 0.001];

fn flatten_heart_cubics(bench: &mut Criterion) {
    let cubics = heart_cubics();

    for tolerance in &TOLERANCES {
        let tolerance = *tolerance;
        bench.bench_function(&format!("flatten cubics, tolerance {}", tolerance), |b| {
            b.iter(|| {
                for cubic in &cubics {
                    cubic.for_each_flattened(tolerance, &mut |p| {
                        std::hint::black_box(p);
                    });
                }
            })
        });
    }
}

fn tessellate_heart_polyline(bench: &mut Criterion) {
    let path = build_heart_path();

    for tolerance in &TOLERANCES {
        let options = PolylineOptions::tolerance(*tolerance);
        bench.bench_function(&format!("heart polyline, tolerance {}", tolerance), |b| {
            b.iter(|| {
                let polyline = tessellate_polyline(&path, &options).unwrap();
                std::hint::black_box(polyline.num_points());
            })
        });
    }
}

criterion_group!(benches, flatten_heart_cubics, tessellate_heart_polyline);
criterion_main!(benches);
