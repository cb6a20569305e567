#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]
#![allow(clippy::many_single_char_names)]

//! Simple 2D geometric primitives on top of euclid, specialized in flattening
//! curves.
//!
//! This crate is reexported in [flatiron](../flatiron).
//!
//! # Overview.
//!
//! This crate implements some of the maths to work with:
//!
//! - line segments,
//! - quadratic and cubic bézier curves.
//!
//! # Flattening
//!
//! Flattening is the action of approximating a curve with a succession of line
//! segments. The flattening routines here subdivide a curve adaptively: an
//! interval of the parameter range is split in half until the control points
//! of the sub-curve are close enough to its chord, which bounds the distance
//! between the curve and the emitted segments.
//!
//! The tolerance threshold taken as input by the flattening algorithms
//! corresponds to the maximum distance between the curve and its linear
//! approximation. The smaller the tolerance is, the more precise the
//! approximation and the more segments are generated. This value is typically
//! chosen in function of the zoom level; the flattening code itself is
//! agnostic of the display scale and callers are expected to pass an
//! already-scaled tolerance.

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

#[macro_use]
mod segment;
pub mod cubic_bezier;
pub mod cubic_to_quadratic;
pub mod flatten;
mod line;
pub mod quadratic_bezier;
pub mod utils;

#[doc(inline)]
pub use crate::cubic_bezier::CubicBezierSegment;
#[doc(inline)]
pub use crate::flatten::Flattened;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
#[doc(inline)]
pub use crate::segment::{BezierSegment, BoundingBox, Segment};

pub use crate::scalar::Scalar;

mod scalar {
    pub(crate) use num_traits::{Float, FloatConst, NumCast};

    use std::fmt::{Debug, Display};
    use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

    pub trait Scalar:
        Float
        + NumCast
        + FloatConst
        + Sized
        + Display
        + Debug
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
    {
        const HALF: Self;
        const ZERO: Self;
        const ONE: Self;
        const TWO: Self;
        const THREE: Self;
        const FOUR: Self;
        const SIX: Self;

        const MIN: Self;
        const MAX: Self;

        const EPSILON: Self;

        /// Epsilon constants are usually not a good way to deal with float precision.
        /// Float precision depends on the magnitude of the values and so should appropriate
        /// epsilons.
        fn epsilon_for(_reference: Self) -> Self {
            Self::EPSILON
        }

        fn value(v: f32) -> Self;
    }

    impl Scalar for f32 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        const MIN: Self = f32::MIN;
        const MAX: Self = f32::MAX;

        const EPSILON: Self = 1e-4;

        fn epsilon_for(reference: Self) -> Self {
            // The thresholds are chosen by looking at the table at
            // https://blog.demofox.org/2017/11/21/floating-point-precision/ plus a bit
            // of trial and error. They might change in the future.
            let magnitude = reference.abs() as i32;
            match magnitude {
                0..=7 => 1e-5,
                8..=1023 => 1e-3,
                1024..=4095 => 1e-2,
                4096..=65535 => 1e-1,
                65536..=8_388_607 => 0.5,
                _ => 1.0,
            }
        }

        #[inline]
        fn value(v: f32) -> Self {
            v
        }
    }

    impl Scalar for f64 {
        const HALF: Self = 0.5;
        const ZERO: Self = 0.0;
        const ONE: Self = 1.0;
        const TWO: Self = 2.0;
        const THREE: Self = 3.0;
        const FOUR: Self = 4.0;
        const SIX: Self = 6.0;

        const MIN: Self = f64::MIN;
        const MAX: Self = f64::MAX;

        const EPSILON: Self = 1e-8;

        fn epsilon_for(reference: Self) -> Self {
            let magnitude = reference.abs() as i64;
            match magnitude {
                0..=65_535 => 1e-8,
                65_536..=8_388_607 => 1e-5,
                8_388_608..=4_294_967_295 => 1e-3,
                _ => 1e-1,
            }
        }

        #[inline]
        fn value(v: f32) -> Self {
            v as f64
        }
    }
}

/// Alias for `euclid::default::Point2D`.
pub use euclid::default::Point2D as Point;

/// Alias for `euclid::default::Vector2D`.
pub use euclid::default::Vector2D as Vector;

/// Alias for `euclid::default::Size2D`.
pub use euclid::default::Size2D as Size;

/// Alias for `euclid::default::Box2D`
pub use euclid::default::Box2D;

/// Shorthand for `Vector::new(x, y)`.
#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}

/// Shorthand for `Point::new(x, y)`.
#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

/// Shorthand for `Size::new(x, y)`.
#[inline]
pub fn size<S>(w: S, h: S) -> Size<S> {
    Size::new(w, h)
}
