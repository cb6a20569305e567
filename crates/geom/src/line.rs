use crate::scalar::Scalar;
use crate::segment::{BoundingBox, Segment};
use crate::utils::min_max;
use crate::{Box2D, Point, Vector};

use std::ops::Range;

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment<S> {
    pub from: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> LineSegment<S> {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        self.from.lerp(self.to, t)
    }

    /// Sample the x coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn x(&self, t: S) -> S {
        self.from.x * (S::ONE - t) + self.to.x * t
    }

    /// Sample the y coordinate of the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn y(&self, t: S) -> S {
        self.from.y * (S::ONE - t) + self.to.y * t
    }

    /// Sample the segment's derivative at t. Constant over the segment.
    #[inline]
    pub fn derivative(&self, _t: S) -> Vector<S> {
        self.to_vector()
    }

    #[inline]
    pub fn dx(&self, _t: S) -> S {
        self.to.x - self.from.x
    }

    #[inline]
    pub fn dy(&self, _t: S) -> S {
        self.to.y - self.from.y
    }

    /// Sample the normalized tangent, or the zero vector for a zero-length
    /// segment.
    #[inline]
    pub fn tangent(&self, t: S) -> Vector<S> {
        crate::utils::normalized_tangent(self.derivative(t))
    }

    /// Returns an inverted version of this segment where the beginning and the end
    /// points are swapped.
    #[inline]
    pub fn flip(&self) -> Self {
        LineSegment {
            from: self.to,
            to: self.from,
        }
    }

    /// Return the sub-segment inside a given range of t.
    ///
    /// This is equivalent to splitting at the range's end points.
    #[inline]
    pub fn split_range(&self, t_range: Range<S>) -> Self {
        LineSegment {
            from: self.from.lerp(self.to, t_range.start),
            to: self.from.lerp(self.to, t_range.end),
        }
    }

    /// Split this curve into two sub-segments.
    #[inline]
    pub fn split(&self, t: S) -> (Self, Self) {
        let split_point = self.sample(t);

        (
            LineSegment {
                from: self.from,
                to: split_point,
            },
            LineSegment {
                from: split_point,
                to: self.to,
            },
        )
    }

    /// Return the segment before the split point.
    #[inline]
    pub fn before_split(&self, t: S) -> Self {
        LineSegment {
            from: self.from,
            to: self.sample(t),
        }
    }

    /// Return the segment after the split point.
    #[inline]
    pub fn after_split(&self, t: S) -> Self {
        LineSegment {
            from: self.sample(t),
            to: self.to,
        }
    }

    /// Returns the vector between this segment's `from` and `to` points.
    #[inline]
    pub fn to_vector(&self) -> Vector<S> {
        self.to - self.from
    }

    /// Computes the length of this segment.
    #[inline]
    pub fn length(&self) -> S {
        self.to_vector().length()
    }

    #[inline]
    pub fn square_length(&self) -> S {
        self.to_vector().square_length()
    }

    /// Whether both endpoints are within `tolerance` of each other.
    #[inline]
    pub fn is_a_point(&self, tolerance: S) -> bool {
        self.square_length() <= tolerance * tolerance
    }

    /// Computes the distance between point `p` and this segment.
    pub fn distance_to_point(&self, p: Point<S>) -> S {
        self.square_distance_to_point(p).sqrt()
    }

    /// Computes the squared distance between point `p` and this segment.
    pub fn square_distance_to_point(&self, p: Point<S>) -> S {
        (self.closest_point(p) - p).square_length()
    }

    /// Computes the closest point on this segment to `p`.
    pub fn closest_point(&self, p: Point<S>) -> Point<S> {
        let v1 = self.to_vector();
        let square_length = v1.square_length();
        if square_length <= S::EPSILON * S::EPSILON {
            return self.from;
        }

        let v2 = p - self.from;
        let t = S::min(S::max(v2.dot(v1) / square_length, S::ZERO), S::ONE);

        self.sample(t)
    }

    /// A line segment is its own flattened approximation: the callback is
    /// invoked exactly once, with the endpoint.
    #[inline]
    pub fn for_each_flattened<F: FnMut(Point<S>)>(&self, _tolerance: S, callback: &mut F) {
        callback(self.to);
    }

    /// Same as `for_each_flattened`, also passing the curve parameter.
    #[inline]
    pub fn for_each_flattened_with_t<F: FnMut(Point<S>, S)>(&self, _tolerance: S, callback: &mut F) {
        callback(self.to, S::ONE);
    }

    #[inline]
    fn bounding_range_x(&self) -> (S, S) {
        min_max(self.from.x, self.to.x)
    }

    #[inline]
    fn bounding_range_y(&self) -> (S, S) {
        min_max(self.from.y, self.to.y)
    }

    /// Return the minimum bounding rectangle.
    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        let (min_x, max_x) = self.bounding_range_x();
        let (min_y, max_y) = self.bounding_range_y();

        Box2D {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    #[inline]
    pub fn fast_bounding_box(&self) -> Box2D<S> {
        self.bounding_box()
    }
}

impl<S: Scalar> Segment for LineSegment<S> {
    impl_segment!(S);

    fn approximate_length(&self, _tolerance: S) -> S {
        self.length()
    }
}

impl<S: Scalar> BoundingBox for LineSegment<S> {
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
        self.bounding_range_x()
    }
    fn fast_bounding_range_y(&self) -> (S, S) {
        self.bounding_range_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;

    #[test]
    fn flattening_emits_exactly_the_endpoint() {
        let segment = LineSegment {
            from: point(1.0f32, 2.0),
            to: point(5.0, 6.0),
        };

        let mut points = std::vec::Vec::new();
        segment.for_each_flattened(0.01, &mut |p| points.push(p));

        assert_eq!(points, std::vec![point(5.0, 6.0)]);
    }

    #[test]
    fn distance_to_point() {
        let segment = LineSegment {
            from: point(0.0f32, 0.0),
            to: point(10.0, 0.0),
        };

        assert!((segment.distance_to_point(point(5.0, 3.0)) - 3.0).abs() < 1e-6);
        assert!((segment.distance_to_point(point(-4.0, 0.0)) - 4.0).abs() < 1e-6);
        assert!((segment.distance_to_point(point(13.0, 4.0)) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn zero_length_segment_does_not_crash() {
        let segment = LineSegment {
            from: point(1.0f32, 1.0),
            to: point(1.0, 1.0),
        };

        assert!(segment.is_a_point(0.0));
        assert_eq!(segment.closest_point(point(5.0, 5.0)), point(1.0, 1.0));
        assert_eq!(segment.sample(0.5), point(1.0, 1.0));
    }
}
