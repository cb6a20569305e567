//! Adaptive curve flattening, implemented both with callback and iterator
//! based APIs.
//!
//! The flattening routines maintain an explicit worklist of `(t0, t1)`
//! parameter intervals instead of recursing: an interval whose sub-curve
//! strays from its chord by more than the tolerance is split at its midpoint
//! and both halves are pushed back, the earlier one on top so that points
//! come out in increasing parameter order. Intervals that reach `MAX_DEPTH`
//! splits are emitted regardless of the residual deviation, which bounds the
//! amount of work on pathological inputs (NaN or infinite control points,
//! extremely tight cusps) without turning them into errors.

use crate::scalar::{Float, Scalar};
use crate::segment::Segment;
use crate::Point;

use arrayvec::ArrayVec;

/// Maximum number of times a parameter interval is split in half.
///
/// `2^-24` is already below the parameter resolution of an `f32` over
/// `[0, 1]`, so deeper subdivision cannot produce meaningfully different
/// points. A single segment therefore never emits more than `2^24` points.
pub const MAX_DEPTH: u32 = 24;

// Pending intervals during a depth-first traversal: at most one sibling per
// level plus the interval being processed.
const STACK_CAPACITY: usize = MAX_DEPTH as usize + 2;

type IntervalStack<S> = ArrayVec<(S, S, u32), STACK_CAPACITY>;

/// Curve types whose distance to their chord can be cheaply bounded from
/// their control polygon.
pub trait ChordDeviation: Segment {
    /// Squared upper bound of the perpendicular distance between the curve
    /// and the straight line joining its endpoints.
    fn chord_deviation_squared(&self) -> Self::Scalar;

    /// Whether all of this curve's points are within `tolerance` of each other.
    fn is_a_point(&self, tolerance: Self::Scalar) -> bool;
}

/// Squared distance from a control point to the chord, expressed via the
/// offset vectors `chord = to - from` and `v = ctrl - from`.
///
/// Falls back to the control point's distance to the start point when the
/// chord is degenerate, so that loops and cusps whose endpoints coincide
/// still register a deviation.
#[inline]
pub(crate) fn control_distance_squared<S: Scalar>(
    chord: crate::Vector<S>,
    chord_square_length: S,
    v: crate::Vector<S>,
) -> S {
    if chord_square_length <= S::EPSILON * S::EPSILON {
        return v.square_length();
    }

    let cross = chord.cross(v);

    cross * cross / chord_square_length
}

pub(crate) fn flatten_with_t<T, F>(curve: &T, tolerance: T::Scalar, callback: &mut F)
where
    T: ChordDeviation,
    F: FnMut(Point<T::Scalar>, T::Scalar),
{
    // Zero, negative and NaN tolerances all fail every flatness test, which
    // makes the depth cap the only terminating condition ("subdivide as much
    // as possible" rather than an error).
    let tolerance = T::Scalar::max(tolerance, T::Scalar::ZERO);
    let tolerance_squared = tolerance * tolerance;

    if curve.is_a_point(T::Scalar::EPSILON) {
        callback(curve.to(), T::Scalar::ONE);
        return;
    }

    let mut stack: IntervalStack<T::Scalar> = ArrayVec::new();
    stack.push((T::Scalar::ZERO, T::Scalar::ONE, 0));

    while let Some((t0, t1, depth)) = stack.pop() {
        let sub_curve = curve.split_range(t0..t1);
        // The comparison is written so that a NaN deviation (NaN or infinite
        // control points) counts as flat: the interval is emitted as-is and
        // the caller is responsible for detecting non-finite output.
        if depth >= MAX_DEPTH || !(sub_curve.chord_deviation_squared() > tolerance_squared) {
            let point = if t1 == T::Scalar::ONE {
                curve.to()
            } else {
                curve.sample(t1)
            };
            callback(point, t1);
            continue;
        }

        let t_mid = (t0 + t1) * T::Scalar::HALF;
        stack.push((t_mid, t1, depth + 1));
        stack.push((t0, t_mid, depth + 1));
    }
}

/// An iterator over a flattened curve, yielding the approximation's points.
///
/// The iterator starts at the first point *after* the start of the curve and
/// ends exactly at its endpoint.
pub struct Flattened<T: ChordDeviation> {
    curve: T,
    tolerance_squared: T::Scalar,
    stack: IntervalStack<T::Scalar>,
    done: bool,
}

impl<T: ChordDeviation> Flattened<T> {
    pub fn new(curve: &T, tolerance: T::Scalar) -> Self {
        let tolerance = T::Scalar::max(tolerance, T::Scalar::ZERO);

        let mut stack = ArrayVec::new();
        if !curve.is_a_point(T::Scalar::EPSILON) {
            stack.push((T::Scalar::ZERO, T::Scalar::ONE, 0));
        }

        Flattened {
            curve: *curve,
            tolerance_squared: tolerance * tolerance,
            stack,
            done: false,
        }
    }
}

impl<T: ChordDeviation> Iterator for Flattened<T> {
    type Item = Point<T::Scalar>;

    fn next(&mut self) -> Option<Point<T::Scalar>> {
        if self.done {
            return None;
        }

        while let Some((t0, t1, depth)) = self.stack.pop() {
            let sub_curve = self.curve.split_range(t0..t1);
            // NaN deviations count as flat, as in `flatten_with_t`.
            if depth >= MAX_DEPTH || !(sub_curve.chord_deviation_squared() > self.tolerance_squared)
            {
                if t1 == T::Scalar::ONE {
                    self.done = true;
                    return Some(self.curve.to());
                }

                return Some(self.curve.sample(t1));
            }

            let t_mid = (t0 + t1) * T::Scalar::HALF;
            self.stack.push((t_mid, t1, depth + 1));
            self.stack.push((t0, t_mid, depth + 1));
        }

        // Degenerate curve: a single point stands in for the whole segment.
        self.done = true;

        Some(self.curve.to())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (if self.done { 0 } else { 1 }, None)
    }
}

pub(crate) fn approximate_length_from_flattening<T>(curve: &T, tolerance: T::Scalar) -> T::Scalar
where
    T: ChordDeviation,
{
    let mut start = curve.from();
    let mut len = T::Scalar::ZERO;
    flatten_with_t(curve, tolerance, &mut |p, _| {
        len += (p - start).length();
        start = p;
    });

    len
}
