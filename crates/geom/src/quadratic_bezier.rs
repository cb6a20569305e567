use crate::flatten::{self, ChordDeviation};
use crate::scalar::Scalar;
use crate::segment::{BoundingBox, Segment};
use crate::utils::min_max;
use crate::{Box2D, CubicBezierSegment, LineSegment, Point, Vector};

use std::ops::Range;

/// A flattening iterator for quadratic bézier segments.
pub type Flattened<S> = flatten::Flattened<QuadraticBezierSegment<S>>;

/// A 2d curve segment defined by three points: the beginning of the segment, a control
/// point and the end of the segment.
///
/// The curve is defined by equation:
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Sample the curve at t (expecting t between 0 and 1).
    pub fn sample(&self, t: S) -> Point<S> {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from * one_t2 + self.ctrl.to_vector() * S::TWO * one_t * t + self.to.to_vector() * t2
    }

    /// Sample the x coordinate of the curve at t (expecting t between 0 and 1).
    pub fn x(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.x * one_t2 + self.ctrl.x * S::TWO * one_t * t + self.to.x * t2
    }

    /// Sample the y coordinate of the curve at t (expecting t between 0 and 1).
    pub fn y(&self, t: S) -> S {
        let t2 = t * t;
        let one_t = S::ONE - t;
        let one_t2 = one_t * one_t;

        self.from.y * one_t2 + self.ctrl.y * S::TWO * one_t * t + self.to.y * t2
    }

    #[inline]
    fn derivative_coefficients(&self, t: S) -> (S, S, S) {
        (
            S::TWO * t - S::TWO,
            -S::FOUR * t + S::TWO,
            S::TWO * t,
        )
    }

    /// Sample the curve's derivative at t (expecting t between 0 and 1).
    pub fn derivative(&self, t: S) -> Vector<S> {
        let (c0, c1, c2) = self.derivative_coefficients(t);
        self.from.to_vector() * c0 + self.ctrl.to_vector() * c1 + self.to.to_vector() * c2
    }

    /// Sample the x coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dx(&self, t: S) -> S {
        let (c0, c1, c2) = self.derivative_coefficients(t);
        self.from.x * c0 + self.ctrl.x * c1 + self.to.x * c2
    }

    /// Sample the y coordinate of the curve's derivative at t (expecting t between 0 and 1).
    pub fn dy(&self, t: S) -> S {
        let (c0, c1, c2) = self.derivative_coefficients(t);
        self.from.y * c0 + self.ctrl.y * c1 + self.to.y * c2
    }

    /// Sample the normalized tangent at t, or the zero vector where the
    /// derivative vanishes (degenerate segments and cusps).
    pub fn tangent(&self, t: S) -> Vector<S> {
        crate::utils::normalized_tangent(self.derivative(t))
    }

    /// Swap the beginning and the end of the segment.
    pub fn flip(&self) -> Self {
        QuadraticBezierSegment {
            from: self.to,
            ctrl: self.ctrl,
            to: self.from,
        }
    }

    /// Return the sub-curve inside a given range of t.
    ///
    /// This is equivalent to splitting at the range's end points.
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        let t0 = t_range.start;
        let t1 = t_range.end;

        let from = self.sample(t0);
        let to = self.sample(t1);
        // The control point is the blossom of the curve evaluated at (t0, t1).
        let ctrl = self
            .from
            .lerp(self.ctrl, t0)
            .lerp(self.ctrl.lerp(self.to, t0), t1);

        QuadraticBezierSegment { from, ctrl, to }
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: S) -> (QuadraticBezierSegment<S>, QuadraticBezierSegment<S>) {
        let split_point = self.sample(t);

        (
            QuadraticBezierSegment {
                from: self.from,
                ctrl: self.from.lerp(self.ctrl, t),
                to: split_point,
            },
            QuadraticBezierSegment {
                from: split_point,
                ctrl: self.ctrl.lerp(self.to, t),
                to: self.to,
            },
        )
    }

    /// Return the curve before the split point.
    pub fn before_split(&self, t: S) -> QuadraticBezierSegment<S> {
        QuadraticBezierSegment {
            from: self.from,
            ctrl: self.from.lerp(self.ctrl, t),
            to: self.sample(t),
        }
    }

    /// Return the curve after the split point.
    pub fn after_split(&self, t: S) -> QuadraticBezierSegment<S> {
        QuadraticBezierSegment {
            from: self.sample(t),
            ctrl: self.ctrl.lerp(self.to, t),
            to: self.to,
        }
    }

    /// Elevate this curve to a third order bézier.
    pub fn to_cubic(&self) -> CubicBezierSegment<S> {
        CubicBezierSegment {
            from: self.from,
            ctrl1: (self.from + self.ctrl.to_vector() * S::TWO) / S::THREE,
            ctrl2: (self.to + self.ctrl.to_vector() * S::TWO) / S::THREE,
            to: self.to,
        }
    }

    /// The straight line between this curve's endpoints.
    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from,
            to: self.to,
        }
    }

    /// Whether the control point and both endpoints are within `tolerance`
    /// of each other.
    #[inline]
    pub fn is_a_point(&self, tolerance: S) -> bool {
        let tolerance_squared = tolerance * tolerance;
        (self.from - self.to).square_length() <= tolerance_squared
            && (self.from - self.ctrl).square_length() <= tolerance_squared
    }

    /// Return the t value of the local x extremum, if any.
    pub fn local_x_extremum_t(&self) -> Option<S> {
        let div = self.from.x - S::TWO * self.ctrl.x + self.to.x;
        if div == S::ZERO {
            return None;
        }
        let t = (self.from.x - self.ctrl.x) / div;
        if t > S::ZERO && t < S::ONE {
            return Some(t);
        }

        None
    }

    /// Return the t value of the local y extremum, if any.
    pub fn local_y_extremum_t(&self) -> Option<S> {
        let div = self.from.y - S::TWO * self.ctrl.y + self.to.y;
        if div == S::ZERO {
            return None;
        }
        let t = (self.from.y - self.ctrl.y) / div;
        if t > S::ZERO && t < S::ONE {
            return Some(t);
        }

        None
    }

    pub fn bounding_range_x(&self) -> (S, S) {
        let (mut min_x, mut max_x) = min_max(self.from.x, self.to.x);
        if let Some(t) = self.local_x_extremum_t() {
            let x = self.x(t);
            min_x = S::min(min_x, x);
            max_x = S::max(max_x, x);
        }

        (min_x, max_x)
    }

    pub fn bounding_range_y(&self) -> (S, S) {
        let (mut min_y, mut max_y) = min_max(self.from.y, self.to.y);
        if let Some(t) = self.local_y_extremum_t() {
            let y = self.y(t);
            min_y = S::min(min_y, y);
            max_y = S::max(max_y, y);
        }

        (min_y, max_y)
    }

    pub fn fast_bounding_range_x(&self) -> (S, S) {
        let min_x = self.from.x.min(self.ctrl.x).min(self.to.x);
        let max_x = self.from.x.max(self.ctrl.x).max(self.to.x);

        (min_x, max_x)
    }

    pub fn fast_bounding_range_y(&self) -> (S, S) {
        let min_y = self.from.y.min(self.ctrl.y).min(self.to.y);
        let max_y = self.from.y.max(self.ctrl.y).max(self.to.y);

        (min_y, max_y)
    }

    /// Returns the smallest rectangle the curve is contained in.
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        Box2D {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Returns a conservative rectangle that contains the curve.
    pub fn fast_bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.fast_bounding_range_x();
        let (min_y, max_y) = self.fast_bounding_range_y();

        Box2D {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    /// Approximates the curve with a sequence of line segments, invoking the
    /// callback once per point.
    ///
    /// The points exclude the curve's start point and include its end point,
    /// so that flattening consecutive segments of a path does not emit
    /// duplicate vertices. The `tolerance` parameter is the maximum distance
    /// between the curve and its approximation.
    pub fn for_each_flattened<F: FnMut(Point<S>)>(&self, tolerance: S, callback: &mut F) {
        flatten::flatten_with_t(self, tolerance, &mut |point, _| callback(point));
    }

    /// Same as `for_each_flattened`, also passing the curve parameter of each
    /// point. Parameters come out in strictly increasing order and the last
    /// one is exactly `1.0`.
    pub fn for_each_flattened_with_t<F: FnMut(Point<S>, S)>(&self, tolerance: S, callback: &mut F) {
        flatten::flatten_with_t(self, tolerance, callback);
    }

    /// Returns the flattened representation of the curve as an iterator,
    /// starting *after* the current point.
    pub fn flattened(&self, tolerance: S) -> Flattened<S> {
        Flattened::new(self, tolerance)
    }

    /// Compute the length of the segment using a flattened approximation.
    pub fn approximate_length(&self, tolerance: S) -> S {
        flatten::approximate_length_from_flattening(self, tolerance)
    }
}

impl<S: Scalar> Segment for QuadraticBezierSegment<S> {
    impl_segment!(S);

    fn approximate_length(&self, tolerance: S) -> S {
        self.approximate_length(tolerance)
    }
}

impl<S: Scalar> ChordDeviation for QuadraticBezierSegment<S> {
    fn chord_deviation_squared(&self) -> S {
        let chord = self.to - self.from;
        flatten::control_distance_squared(chord, chord.square_length(), self.ctrl - self.from)
    }

    fn is_a_point(&self, tolerance: S) -> bool {
        self.is_a_point(tolerance)
    }
}

impl<S: Scalar> BoundingBox for QuadraticBezierSegment<S> {
    fn bounding_box(&self) -> Box2D<S> {
        self.bounding_box()
    }
    fn fast_bounding_box(&self) -> Box2D<S> {
        self.fast_bounding_box()
    }
    fn bounding_range_x(&self) -> (S, S) {
        self.bounding_range_x()
    }
    fn bounding_range_y(&self) -> (S, S) {
        self.bounding_range_y()
    }
    fn fast_bounding_range_x(&self) -> (S, S) {
        self.fast_bounding_range_x()
    }
    fn fast_bounding_range_y(&self) -> (S, S) {
        self.fast_bounding_range_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;
    use std::vec::Vec;

    fn max_deviation_from_curve(curve: &QuadraticBezierSegment<f32>, points: &[Point<f32>]) -> f32 {
        let mut polyline = Vec::new();
        polyline.push(curve.from);
        polyline.extend_from_slice(points);

        let mut max_dist: f32 = 0.0;
        for i in 0..1000 {
            let t = i as f32 / 999.0;
            let p = curve.sample(t);
            let mut min_dist = f32::MAX;
            for window in polyline.windows(2) {
                let segment = LineSegment {
                    from: window[0],
                    to: window[1],
                };
                min_dist = min_dist.min(segment.distance_to_point(p));
            }
            max_dist = max_dist.max(min_dist);
        }

        max_dist
    }

    #[test]
    fn sample_is_exact_at_endpoints() {
        let curve = QuadraticBezierSegment {
            from: point(1.0f32, 2.0),
            ctrl: point(100.0, -50.0),
            to: point(6.0, 7.0),
        };

        assert_eq!(curve.sample(0.0), curve.from);
        assert_eq!(curve.sample(1.0), curve.to);
    }

    #[test]
    fn flattened_respects_tolerance() {
        let curve = QuadraticBezierSegment {
            from: point(0.0f32, 0.0),
            ctrl: point(50.0, 100.0),
            to: point(100.0, 0.0),
        };

        for tolerance in &[1.0f32, 0.1, 0.01] {
            let points: Vec<Point<f32>> = curve.flattened(*tolerance).collect();
            assert_eq!(*points.last().unwrap(), curve.to);
            assert!(max_deviation_from_curve(&curve, &points) <= tolerance + 1e-3);
        }
    }

    #[test]
    fn flattened_t_is_monotonic() {
        let curve = QuadraticBezierSegment {
            from: point(0.0f32, 0.0),
            ctrl: point(10.0, 20.0),
            to: point(0.0, 40.0),
        };

        let mut prev = 0.0;
        curve.for_each_flattened_with_t(0.01, &mut |_, t| {
            assert!(t > prev);
            prev = t;
        });
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn degenerate_curve_flattens_to_one_point() {
        let curve = QuadraticBezierSegment {
            from: point(4.0f32, 5.0),
            ctrl: point(4.0, 5.0),
            to: point(4.0, 5.0),
        };

        let points: Vec<Point<f32>> = curve.flattened(0.1).collect();
        assert_eq!(points, std::vec![point(4.0, 5.0)]);
    }

    #[test]
    fn collinear_control_point_does_not_over_subdivide() {
        // The control point lies on the baseline so the curve is a straight
        // line and the deviation estimate is zero everywhere.
        let curve = QuadraticBezierSegment {
            from: point(0.0f32, 0.0),
            ctrl: point(1.0, 0.0),
            to: point(2.0, 0.0),
        };

        let points: Vec<Point<f32>> = curve.flattened(0.01).collect();
        assert_eq!(points, std::vec![point(2.0, 0.0)]);
    }

    #[test]
    fn callback_and_iterator_agree() {
        let curve = QuadraticBezierSegment {
            from: point(0.0f32, 0.0),
            ctrl: point(10.0, 0.0),
            to: point(10.0, 10.0),
        };

        let iter_points: Vec<Point<f32>> = curve.flattened(0.01).collect();
        let mut callback_points = Vec::new();
        curve.for_each_flattened(0.01, &mut |p| callback_points.push(p));

        assert_eq!(iter_points, callback_points);
    }

    #[test]
    fn bounding_box_for_simple_segment() {
        let curve = QuadraticBezierSegment {
            from: point(0.0f32, 0.0),
            ctrl: point(1.0, 1.0),
            to: point(2.0, 0.0),
        };

        let bb = curve.bounding_box();
        assert_eq!(bb.min, point(0.0, 0.0));
        assert_eq!(bb.max, point(2.0, 0.5));

        let fast = curve.fast_bounding_box();
        assert_eq!(fast.min, point(0.0, 0.0));
        assert_eq!(fast.max, point(2.0, 1.0));
    }

    #[test]
    fn length_of_a_straight_line() {
        let len = QuadraticBezierSegment {
            from: point(0.0f32, 0.0),
            ctrl: point(1.0, 0.0),
            to: point(2.0, 0.0),
        }
        .approximate_length(0.01);

        assert_eq!(len, 2.0);
    }

    #[test]
    fn derivatives() {
        let curve = QuadraticBezierSegment {
            from: point(1.0f32, 1.0),
            ctrl: point(2.0, 1.0),
            to: point(2.0, 2.0),
        };

        assert_eq!(curve.dy(0.0), 0.0);
        assert_eq!(curve.dx(1.0), 0.0);
        assert_eq!(curve.dy(0.5), curve.dx(0.5));
    }
}
