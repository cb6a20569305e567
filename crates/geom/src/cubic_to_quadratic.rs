//! Approximate cubic bézier segments with sequences of quadratic ones.
//!
//! This re-fit is lossy: the quadratics trace the cubic within the requested
//! tolerance but do not preserve its exact shape, and regenerating them with
//! a different subdivision strategy legitimately yields different control
//! points.

use crate::scalar::Scalar;
use crate::{CubicBezierSegment, QuadraticBezierSegment};

/// Approximate a cubic with a single quadratic.
///
/// The quadratic interpolates the cubic's endpoints, with the control point
/// averaged from the two candidates obtained by dropping one of the cubic's
/// control points.
pub fn single_curve_approximation<S: Scalar>(
    cubic: &CubicBezierSegment<S>,
) -> QuadraticBezierSegment<S> {
    let c1 = (cubic.ctrl1.to_vector() * S::THREE - cubic.from.to_vector()) * S::HALF;
    let c2 = (cubic.ctrl2.to_vector() * S::THREE - cubic.to.to_vector()) * S::HALF;

    QuadraticBezierSegment {
        from: cubic.from,
        ctrl: ((c1 + c2) * S::HALF).to_point(),
        to: cubic.to,
    }
}

/// Computes the number of quadratic bézier segments required to approximate
/// the cubic within `tolerance`.
///
/// Derived by Raph Levien from section 10.6 of Sedeberg's CAGD notes
/// <https://scholarsarchive.byu.edu/cgi/viewcontent.cgi?article=1000&context=facpub#section.10.6>
/// and the error metric from the caffein owl blog post
/// <http://caffeineowl.com/graphics/2d/vectorial/cubic2quad01.html>
pub fn num_quadratics<S: Scalar>(curve: &CubicBezierSegment<S>, tolerance: S) -> u32 {
    debug_assert!(tolerance > S::ZERO);

    let x = curve.from.x - S::THREE * curve.ctrl1.x + S::THREE * curve.ctrl2.x - curve.to.x;
    let y = curve.from.y - S::THREE * curve.ctrl1.y + S::THREE * curve.ctrl2.y - curve.to.y;

    let err = x * x + y * y;

    let n = (err / (S::value(432.0) * tolerance * tolerance))
        .powf(S::ONE / S::SIX)
        .ceil()
        .max(S::ONE);

    n.to_u32().unwrap_or(1)
}

/// Approximate the curve with a sequence of quadratic béziers, invoking the
/// callback for each of them in order.
pub fn cubic_to_quadratics<S: Scalar, F>(curve: &CubicBezierSegment<S>, tolerance: S, cb: &mut F)
where
    F: FnMut(&QuadraticBezierSegment<S>),
{
    let num_quadratics = num_quadratics(curve, tolerance);
    let step = S::ONE / S::value(num_quadratics as f32);

    let mut t0 = S::ZERO;
    for _ in 0..(num_quadratics - 1) {
        let t1 = t0 + step;
        cb(&single_curve_approximation(&curve.split_range(t0..t1)));
        t0 = t1;
    }

    // Do the last step manually to make sure we finish at t = 1.0 exactly.
    cb(&single_curve_approximation(&curve.split_range(t0..S::ONE)));
}
