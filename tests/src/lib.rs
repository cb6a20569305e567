//! Shared helpers for the golden shape tests and benchmarks.

pub mod golden_heart;

use flatiron::geom::{CubicBezierSegment, LineSegment};
use flatiron::math::Point;

/// Number of samples used when treating a curve as its dense polyline.
pub const DENSE_SAMPLES: usize = 1000;

/// Minimum distance from a point to a polyline (the union of the segments
/// joining consecutive points).
pub fn distance_to_polyline(p: Point, polyline: &[Point]) -> f32 {
    debug_assert!(polyline.len() >= 2);

    let mut min_dist = f32::MAX;
    for window in polyline.windows(2) {
        let segment = LineSegment {
            from: window[0],
            to: window[1],
        };
        min_dist = min_dist.min(segment.distance_to_point(p));
    }

    min_dist
}

/// Largest distance from any point of `a` to the polyline `b` (a directed,
/// vertex-sampled Hausdorff distance).
pub fn directed_polyline_distance(a: &[Point], b: &[Point]) -> f32 {
    let mut max_dist: f32 = 0.0;
    for p in a {
        max_dist = max_dist.max(distance_to_polyline(*p, b));
    }

    max_dist
}

/// Samples the curve densely and returns the largest distance from any
/// sample to the polyline approximation.
pub fn max_deviation_from_cubic(curve: &CubicBezierSegment<f32>, polyline: &[Point]) -> f32 {
    let mut max_dist: f32 = 0.0;
    for i in 0..DENSE_SAMPLES {
        let t = i as f32 / (DENSE_SAMPLES - 1) as f32;
        max_dist = max_dist.max(distance_to_polyline(curve.sample(t), polyline));
    }

    max_dist
}

/// The true curve as a densely sampled polyline.
pub fn dense_cubic_samples(curve: &CubicBezierSegment<f32>) -> Vec<Point> {
    (0..DENSE_SAMPLES)
        .map(|i| curve.sample(i as f32 / (DENSE_SAMPLES - 1) as f32))
        .collect()
}
