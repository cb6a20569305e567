#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Generation of polylines and fill geometry from 2D paths.
//!
//! ## Overview
//!
//! The most interesting types of this crate are:
//!
//! * [tessellate_polyline](fn.tessellate_polyline.html) - Approximates a path
//!   with a [Polyline](struct.Polyline.html): one flat buffer of points per
//!   path, partitioned into contours.
//! * [fill_convex_polyline](fn.fill_convex_polyline.html) - Produces a
//!   triangulation of convex closed contours, through the
//!   [`GeometryBuilder`](geometry_builder/trait.GeometryBuilder.html)
//!   abstraction which assembles the vertices and triangles into arbitrary
//!   vertex and index buffers.
//!
//! ## The pipeline
//!
//! ```ascii
//! Iterator<PathEvent> -> tessellate_polyline -> Polyline -> fill_convex_polyline -> GeometryBuilder
//! ```
//!
//! The input is not tied to a particular data structure: any iterator of
//! [PathEvent](../flatiron_path/enum.PathEvent.html) works, the
//! [Path](../flatiron_path/struct.Path.html) struct being provided for
//! convenience.
//!
//! ## Flattening and tolerance
//!
//! Curves are approximated with sequences of line segments. This
//! approximation depends on the `tolerance` parameter of
//! [PolylineOptions](struct.PolylineOptions.html), which represents the
//! maximum distance between a curve and its approximation. The tolerance is
//! expressed in the same units as the path's coordinates; choosing it in
//! function of the render scale is the caller's responsibility.
//!
//! Every call is pure: the engine borrows the input path, owns no state
//! across invocations and returns a freshly allocated buffer. Contours (and
//! segments within them) are independent of each other, so callers are free
//! to tessellate them in parallel and concatenate the results in order.

pub use flatiron_path as path;

pub use crate::path::geom;
pub use crate::path::math;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod error;
mod fill;
pub mod geometry_builder;
mod polyline;

#[doc(inline)]
pub use crate::error::*;

#[doc(inline)]
pub use crate::fill::fill_convex_polyline;

#[doc(inline)]
pub use crate::geometry_builder::{
    BuffersBuilder, GeometryBuilder, Positions, VertexBuffers, VertexConstructor,
};

#[doc(inline)]
pub use crate::polyline::{tessellate_polyline, Polyline, PolylineBuilder};

/// Parameters for the polyline generator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct PolylineOptions {
    /// Maximum allowed distance to the path when building an approximation.
    ///
    /// See [Flattening and tolerance](index.html#flattening-and-tolerance).
    /// Default value: `PolylineOptions::DEFAULT_TOLERANCE`.
    pub tolerance: f32,
}

impl PolylineOptions {
    /// Default flattening tolerance.
    pub const DEFAULT_TOLERANCE: f32 = 0.1;

    pub const DEFAULT: Self = PolylineOptions {
        tolerance: Self::DEFAULT_TOLERANCE,
    };

    #[inline]
    pub fn tolerance(tolerance: f32) -> Self {
        Self::DEFAULT.with_tolerance(tolerance)
    }

    #[inline]
    pub const fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for PolylineOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

type Index = u32;

/// A virtual vertex offset in a geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexId(pub Index);

impl VertexId {
    pub fn offset(self) -> Index {
        self.0
    }

    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    pub fn from_usize(v: usize) -> Self {
        VertexId(v as Index)
    }
}

impl From<VertexId> for u32 {
    fn from(v: VertexId) -> Self {
        v.0
    }
}

impl From<VertexId> for usize {
    fn from(v: VertexId) -> Self {
        v.0 as usize
    }
}

#[test]
fn options_builder() {
    let options = PolylineOptions::default();
    assert_eq!(options.tolerance, PolylineOptions::DEFAULT_TOLERANCE);

    let options = PolylineOptions::tolerance(0.01);
    assert_eq!(options.tolerance, 0.01);

    let options = PolylineOptions::default().with_tolerance(0.5);
    assert_eq!(options.tolerance, 0.5);
}
