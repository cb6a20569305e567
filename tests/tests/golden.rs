//! Tests comparing the polyline engine's output against the stored heart
//! shape snapshot.
//!
//! The stored points were generated by another implementation at an
//! unrecorded tolerance and rounded for storage, so everything here asserts
//! closeness of shape (within documented epsilons) and never exact
//! coordinates or point counts.

use flatiron::geom::flatten::MAX_DEPTH;
use flatiron::geom::CubicBezierSegment;
use flatiron::math::{point, Point};
use flatiron::tessellation::{tessellate_polyline, PolylineOptions};

use flatiron_tests::golden_heart::{
    build_heart_path, build_heart_path_from_quads, heart_cubics, heart_points,
};
use flatiron_tests::{
    dense_cubic_samples, directed_polyline_distance, max_deviation_from_cubic,
};

const TOLERANCE: f32 = 0.1;

/// Maximum allowed distance between the stored snapshot and the true curves:
/// the snapshot's own tolerance plus its storage rounding.
const SNAPSHOT_EPSILON: f32 = 0.25;

/// Acceptable point count ratio between our output and the snapshot.
const COUNT_RATIO: (f32, f32) = (0.5, 2.0);

#[test]
fn first_heart_cubic_flattens_within_tolerance() {
    let cubic = CubicBezierSegment {
        from: point(140.0, 20.0),
        ctrl1: point(73.0, 20.0),
        ctrl2: point(20.0, 74.0),
        to: point(20.0, 140.0),
    };

    let mut polyline = vec![cubic.from];
    cubic.for_each_flattened(TOLERANCE, &mut |p| polyline.push(p));

    assert_eq!(*polyline.first().unwrap(), point(140.0, 20.0));
    assert_eq!(*polyline.last().unwrap(), point(20.0, 140.0));
    assert!(max_deviation_from_cubic(&cubic, &polyline) <= TOLERANCE + 1e-3);
}

#[test]
fn each_heart_cubic_ends_exactly_at_its_endpoints() {
    for cubic in &heart_cubics() {
        let mut last = cubic.from;
        cubic.for_each_flattened(TOLERANCE, &mut |p| last = p);
        assert_eq!(last, cubic.to);
    }
}

#[test]
fn heart_cubics_flatten_monotonically_in_t() {
    for cubic in &heart_cubics() {
        let mut prev = 0.0;
        cubic.for_each_flattened_with_t(TOLERANCE, &mut |_, t| {
            assert!(t > prev);
            prev = t;
        });
        assert_eq!(prev, 1.0);
    }
}

#[test]
fn closed_heart_contour_is_watertight() {
    let path = build_heart_path();
    let polyline = tessellate_polyline(&path, &PolylineOptions::tolerance(TOLERANCE)).unwrap();

    assert_eq!(polyline.num_contours(), 1);
    assert!(polyline.contour_is_closed(0));

    let points = polyline.contour_points(0);
    assert_eq!(points.first(), points.last());
    assert_eq!(*points.first().unwrap(), point(140.0, 20.0));
}

#[test]
fn heart_point_count_is_in_the_snapshot_ballpark() {
    let path = build_heart_path();
    let polyline = tessellate_polyline(&path, &PolylineOptions::tolerance(TOLERANCE)).unwrap();

    let ours = polyline.num_points() as f32;
    let snapshot = heart_points().len() as f32;

    assert!(
        ours >= snapshot * COUNT_RATIO.0 && ours <= snapshot * COUNT_RATIO.1,
        "{} points vs {} in the snapshot",
        ours,
        snapshot,
    );
}

#[test]
fn heart_polyline_stays_on_the_true_curves() {
    let path = build_heart_path();
    let polyline = tessellate_polyline(&path, &PolylineOptions::tolerance(TOLERANCE)).unwrap();
    let points = polyline.contour_points(0);

    for cubic in &heart_cubics() {
        // Each true curve must be traced by the polyline within tolerance.
        for sample in dense_cubic_samples(cubic) {
            let dist = flatiron_tests::distance_to_polyline(sample, points);
            assert!(dist <= TOLERANCE + 1e-3, "distance {} at {:?}", dist, sample);
        }
    }
}

#[test]
fn snapshot_points_lie_on_the_true_curves() {
    // Sanity check of the stored data itself: every stored point is close
    // to one of the cubics it was flattened from.
    let dense: Vec<Vec<Point>> = heart_cubics().iter().map(dense_cubic_samples).collect();

    for p in heart_points() {
        let mut min_dist = f32::MAX;
        for samples in &dense {
            min_dist = min_dist.min(flatiron_tests::distance_to_polyline(p, samples));
        }
        assert!(min_dist <= SNAPSHOT_EPSILON, "distance {} at {:?}", min_dist, p);
    }
}

#[test]
fn heart_polyline_matches_snapshot_shape() {
    let path = build_heart_path();
    let polyline = tessellate_polyline(&path, &PolylineOptions::tolerance(TOLERANCE)).unwrap();
    let ours = polyline.contour_points(0);
    let snapshot = heart_points();

    // Both polylines approximate the same curves within their tolerances,
    // so their mutual distance is bounded by the sum of those tolerances.
    let bound = TOLERANCE + SNAPSHOT_EPSILON;
    assert!(directed_polyline_distance(&snapshot, ours) <= bound);
    assert!(directed_polyline_distance(ours, &snapshot) <= bound);
}

#[test]
fn quad_refit_traces_the_same_shape() {
    let cubic_polyline = tessellate_polyline(
        &build_heart_path(),
        &PolylineOptions::tolerance(TOLERANCE),
    )
    .unwrap();
    let quad_polyline = tessellate_polyline(
        &build_heart_path_from_quads(),
        &PolylineOptions::tolerance(TOLERANCE),
    )
    .unwrap();

    // The quads are a separate, lossy re-fit, so the bound is much looser
    // than the flattening tolerance.
    let bound = 2.0;
    let a = cubic_polyline.contour_points(0);
    let b = quad_polyline.contour_points(0);
    assert!(directed_polyline_distance(a, b) <= bound);
    assert!(directed_polyline_distance(b, a) <= bound);
}

#[test]
fn adversarial_cusp_terminates_within_the_depth_cap() {
    // Control points arranged to maximize splitting around a cusp.
    let cusp = CubicBezierSegment {
        from: point(0.0, 0.0),
        ctrl1: point(1000.0, 1000.0),
        ctrl2: point(-1000.0, 1000.0),
        to: point(0.1, 0.0),
    };

    let mut count: u64 = 0;
    let mut last = cusp.from;
    cusp.for_each_flattened(0.01, &mut |p| {
        count += 1;
        last = p;
    });

    assert!(count <= 1u64 << MAX_DEPTH);
    assert_eq!(last, cusp.to);
}
