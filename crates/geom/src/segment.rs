use crate::scalar::Scalar;
use crate::{Box2D, CubicBezierSegment, LineSegment, Point, QuadraticBezierSegment, Vector};

use std::ops::Range;

/// Common APIs to segment types.
pub trait Segment: Copy + Sized {
    type Scalar: Scalar;

    /// Start of the curve.
    fn from(&self) -> Point<Self::Scalar>;

    /// End of the curve.
    fn to(&self) -> Point<Self::Scalar>;

    /// Sample the curve at t (expecting t between 0 and 1).
    fn sample(&self, t: Self::Scalar) -> Point<Self::Scalar>;

    /// Sample x at t (expecting t between 0 and 1).
    fn x(&self, t: Self::Scalar) -> Self::Scalar {
        self.sample(t).x
    }

    /// Sample y at t (expecting t between 0 and 1).
    fn y(&self, t: Self::Scalar) -> Self::Scalar {
        self.sample(t).y
    }

    /// Sample the derivative at t (expecting t between 0 and 1).
    fn derivative(&self, t: Self::Scalar) -> Vector<Self::Scalar>;

    /// Sample x derivative at t (expecting t between 0 and 1).
    fn dx(&self, t: Self::Scalar) -> Self::Scalar {
        self.derivative(t).x
    }

    /// Sample y derivative at t (expecting t between 0 and 1).
    fn dy(&self, t: Self::Scalar) -> Self::Scalar {
        self.derivative(t).y
    }

    /// Sample the normalized tangent at t, or the zero vector where the
    /// derivative vanishes (degenerate segments and cusps).
    fn tangent(&self, t: Self::Scalar) -> Vector<Self::Scalar> {
        crate::utils::normalized_tangent(self.derivative(t))
    }

    /// Split this curve into two sub-curves.
    fn split(&self, t: Self::Scalar) -> (Self, Self);

    /// Return the curve before the split point.
    fn before_split(&self, t: Self::Scalar) -> Self;

    /// Return the curve after the split point.
    fn after_split(&self, t: Self::Scalar) -> Self;

    /// Return the curve inside a given range of t.
    ///
    /// This is equivalent to splitting at the range's end points.
    fn split_range(&self, t_range: Range<Self::Scalar>) -> Self;

    /// Swap the direction of the segment.
    fn flip(&self) -> Self;

    /// Compute the length of the segment using a flattened approximation.
    fn approximate_length(&self, tolerance: Self::Scalar) -> Self::Scalar;
}

pub trait BoundingBox: Segment {
    /// Returns the smallest rectangle that contains the curve.
    fn bounding_box(&self) -> Box2D<Self::Scalar>;

    /// Returns a conservative rectangle that contains the curve.
    ///
    /// This does not necessarily return the smallest possible bounding
    /// rectangle but is cheaper to compute.
    fn fast_bounding_box(&self) -> Box2D<Self::Scalar> {
        self.bounding_box()
    }

    /// Returns a range of x values that contains the curve.
    fn bounding_range_x(&self) -> (Self::Scalar, Self::Scalar);

    /// Returns a range of y values that contains the curve.
    fn bounding_range_y(&self) -> (Self::Scalar, Self::Scalar);

    /// Returns a range of x values that contains the curve.
    fn fast_bounding_range_x(&self) -> (Self::Scalar, Self::Scalar);

    /// Returns a range of y values that contains the curve.
    fn fast_bounding_range_y(&self) -> (Self::Scalar, Self::Scalar);
}

macro_rules! impl_segment {
    ($S:ty) => {
        type Scalar = $S;
        fn from(&self) -> Point<$S> {
            self.from
        }
        fn to(&self) -> Point<$S> {
            self.to
        }
        fn sample(&self, t: $S) -> Point<$S> {
            self.sample(t)
        }
        fn x(&self, t: $S) -> $S {
            self.x(t)
        }
        fn y(&self, t: $S) -> $S {
            self.y(t)
        }
        fn derivative(&self, t: $S) -> Vector<$S> {
            self.derivative(t)
        }
        fn split(&self, t: $S) -> (Self, Self) {
            self.split(t)
        }
        fn before_split(&self, t: $S) -> Self {
            self.before_split(t)
        }
        fn after_split(&self, t: $S) -> Self {
            self.after_split(t)
        }
        fn split_range(&self, t_range: Range<$S>) -> Self {
            self.split_range(t_range)
        }
        fn flip(&self) -> Self {
            self.flip()
        }
    };
}

/// Either a line segment, a quadratic or a cubic bézier segment.
///
/// Curve evaluation and flattening dispatch with a `match` on the variant,
/// which keeps per-segment work on the hot path free of virtual calls.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum BezierSegment<S> {
    Linear(LineSegment<S>),
    Quadratic(QuadraticBezierSegment<S>),
    Cubic(CubicBezierSegment<S>),
}

impl<S: Scalar> BezierSegment<S> {
    #[inline]
    pub fn from(&self) -> Point<S> {
        match self {
            BezierSegment::Linear(segment) => segment.from,
            BezierSegment::Quadratic(segment) => segment.from,
            BezierSegment::Cubic(segment) => segment.from,
        }
    }

    #[inline]
    pub fn to(&self) -> Point<S> {
        match self {
            BezierSegment::Linear(segment) => segment.to,
            BezierSegment::Quadratic(segment) => segment.to,
            BezierSegment::Cubic(segment) => segment.to,
        }
    }

    #[inline]
    pub fn sample(&self, t: S) -> Point<S> {
        match self {
            BezierSegment::Linear(segment) => segment.sample(t),
            BezierSegment::Quadratic(segment) => segment.sample(t),
            BezierSegment::Cubic(segment) => segment.sample(t),
        }
    }

    #[inline]
    pub fn derivative(&self, t: S) -> Vector<S> {
        match self {
            BezierSegment::Linear(segment) => segment.derivative(t),
            BezierSegment::Quadratic(segment) => segment.derivative(t),
            BezierSegment::Cubic(segment) => segment.derivative(t),
        }
    }

    /// Sample the normalized tangent at t, or the zero vector where the
    /// derivative vanishes.
    #[inline]
    pub fn tangent(&self, t: S) -> Vector<S> {
        crate::utils::normalized_tangent(self.derivative(t))
    }

    /// The straight line between this segment's endpoints.
    #[inline]
    pub fn baseline(&self) -> LineSegment<S> {
        LineSegment {
            from: self.from(),
            to: self.to(),
        }
    }

    /// Whether all of this segment's points are within `tolerance` of each other.
    #[inline]
    pub fn is_a_point(&self, tolerance: S) -> bool {
        match self {
            BezierSegment::Linear(segment) => segment.is_a_point(tolerance),
            BezierSegment::Quadratic(segment) => segment.is_a_point(tolerance),
            BezierSegment::Cubic(segment) => segment.is_a_point(tolerance),
        }
    }

    #[inline]
    pub fn bounding_box(&self) -> Box2D<S> {
        match self {
            BezierSegment::Linear(segment) => segment.bounding_box(),
            BezierSegment::Quadratic(segment) => segment.bounding_box(),
            BezierSegment::Cubic(segment) => segment.bounding_box(),
        }
    }

    #[inline]
    pub fn fast_bounding_box(&self) -> Box2D<S> {
        match self {
            BezierSegment::Linear(segment) => segment.fast_bounding_box(),
            BezierSegment::Quadratic(segment) => segment.fast_bounding_box(),
            BezierSegment::Cubic(segment) => segment.fast_bounding_box(),
        }
    }

    /// Split this segment into two sub-segments.
    pub fn split(&self, t: S) -> (BezierSegment<S>, BezierSegment<S>) {
        match self {
            BezierSegment::Linear(segment) => {
                let (a, b) = segment.split(t);
                (BezierSegment::Linear(a), BezierSegment::Linear(b))
            }
            BezierSegment::Quadratic(segment) => {
                let (a, b) = segment.split(t);
                (BezierSegment::Quadratic(a), BezierSegment::Quadratic(b))
            }
            BezierSegment::Cubic(segment) => {
                let (a, b) = segment.split(t);
                (BezierSegment::Cubic(a), BezierSegment::Cubic(b))
            }
        }
    }

    /// Approximates the segment with a sequence of line segments, invoking
    /// the callback for each point after the segment's start point, up to and
    /// including its end point.
    pub fn for_each_flattened<F: FnMut(Point<S>)>(&self, tolerance: S, callback: &mut F) {
        match self {
            BezierSegment::Linear(segment) => segment.for_each_flattened(tolerance, callback),
            BezierSegment::Quadratic(segment) => segment.for_each_flattened(tolerance, callback),
            BezierSegment::Cubic(segment) => segment.for_each_flattened(tolerance, callback),
        }
    }

    /// Same as `for_each_flattened` but the callback is also given the
    /// curve parameter of each point.
    pub fn for_each_flattened_with_t<F: FnMut(Point<S>, S)>(&self, tolerance: S, callback: &mut F) {
        match self {
            BezierSegment::Linear(segment) => {
                segment.for_each_flattened_with_t(tolerance, callback)
            }
            BezierSegment::Quadratic(segment) => {
                segment.for_each_flattened_with_t(tolerance, callback)
            }
            BezierSegment::Cubic(segment) => segment.for_each_flattened_with_t(tolerance, callback),
        }
    }
}

impl<S> From<LineSegment<S>> for BezierSegment<S> {
    fn from(segment: LineSegment<S>) -> Self {
        BezierSegment::Linear(segment)
    }
}

impl<S> From<QuadraticBezierSegment<S>> for BezierSegment<S> {
    fn from(segment: QuadraticBezierSegment<S>) -> Self {
        BezierSegment::Quadratic(segment)
    }
}

impl<S> From<CubicBezierSegment<S>> for BezierSegment<S> {
    fn from(segment: CubicBezierSegment<S>) -> Self {
        BezierSegment::Cubic(segment)
    }
}

#[test]
fn bezier_segment_dispatch() {
    use crate::point;

    let segment: BezierSegment<f32> = QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    }
    .into();

    assert_eq!(segment.from(), point(0.0, 0.0));
    assert_eq!(segment.to(), point(2.0, 0.0));
    assert_eq!(segment.sample(0.5), point(1.0, 0.5));

    let (a, b) = segment.split(0.5);
    assert_eq!(a.to(), b.from());
}

#[test]
fn degenerate_tangent_is_zero() {
    use crate::{point, vector};

    let segment: BezierSegment<f32> = CubicBezierSegment {
        from: point(1.0, 1.0),
        ctrl1: point(1.0, 1.0),
        ctrl2: point(1.0, 1.0),
        to: point(1.0, 1.0),
    }
    .into();

    assert_eq!(segment.tangent(0.5), vector(0.0, 0.0));
}
