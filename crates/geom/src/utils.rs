//! Various math tools that are mostly useful for the rest of the crate.

use crate::scalar::Scalar;
use crate::Vector;

#[inline]
pub fn min_max<S: Scalar>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Normalize a derivative into a unit tangent, returning the zero vector when
/// the derivative's length is below epsilon instead of dividing by zero.
#[inline]
pub fn normalized_tangent<S: Scalar>(d: Vector<S>) -> Vector<S> {
    let square_length = d.square_length();
    if square_length <= S::EPSILON * S::EPSILON {
        return Vector::new(S::ZERO, S::ZERO);
    }

    d / square_length.sqrt()
}

#[test]
fn normalized_tangent_guards_zero_length() {
    use crate::vector;

    assert_eq!(
        normalized_tangent(vector(0.0f32, 0.0)),
        vector(0.0, 0.0)
    );

    let t = normalized_tangent(vector(3.0f32, 4.0));
    assert!((t.length() - 1.0).abs() < 1e-6);
}
