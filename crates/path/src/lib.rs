#![deny(bare_trait_objects)]

//! Data structures and traits to work with paths (vector graphics).
//!
//! To build and consume paths, see the [builder](builder/index.html) and
//! [events](enum.PathEvent.html) documentation.
//!
//! This crate is reexported in [flatiron](../flatiron).
//!
//! # Examples
//!
//! ```
//! use flatiron_path::Path;
//! use flatiron_path::math::point;
//!
//! // Create a builder object to build the path.
//! let mut builder = Path::builder();
//!
//! // Build a simple path.
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(1.0, 2.0));
//! builder.quadratic_bezier_to(point(2.0, 0.0), point(3.0, 1.0));
//! builder.cubic_bezier_to(point(4.0, 2.0), point(5.0, 0.0), point(6.0, 1.0));
//! builder.end(true);
//!
//! // Generate the actual path object.
//! let path = builder.build();
//!
//! for event in &path {
//!     println!("{:?}", event);
//! }
//! ```

pub use flatiron_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod events;
mod path;
pub(crate) mod private;

#[doc(inline)]
pub use crate::builder::Builder;
#[doc(inline)]
pub use crate::events::PathEvent;
#[doc(inline)]
pub use crate::path::{Iter, Path, PathSlice};

/// The positions of this crate's paths and events are stored as
/// single-precision floating point points and vectors.
pub mod math {
    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = crate::geom::Point<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = crate::geom::Vector<f32>;

    /// Alias for ```euclid::default::Box2D<f32>```
    pub type Box2D = crate::geom::Box2D<f32>;

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }
}
