#![deny(bare_trait_objects)]

//! 2D path flattening: approximating bézier paths with polylines and fill
//! geometry.
//!
//! # Crates
//!
//! This meta-crate (`flatiron`) reexports the following sub-crates for
//! convenience:
//!
//! * **flatiron_tessellation** - Polyline generation and convex fill
//!   tessellation.
//! * **flatiron_path** - Tools to build and iterate over paths.
//! * **flatiron_geom** - 2d utilities for cubic and quadratic bézier curves
//!   and line segments, including the adaptive flattening routines.
//!
//! Each `flatiron_<name>` crate is reexported as a `<name>` module in
//! `flatiron`. For example:
//!
//! ```ignore
//! use flatiron_tessellation::Polyline;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! use flatiron::tessellation::Polyline;
//! ```
//!
//! # Feature flags
//!
//! Serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Example
//!
//! ```
//! use flatiron::math::point;
//! use flatiron::path::Path;
//! use flatiron::tessellation::{tessellate_polyline, PolylineOptions};
//!
//! let mut builder = Path::builder();
//! builder.begin(point(0.0, 0.0));
//! builder.cubic_bezier_to(point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0));
//! builder.end(true);
//! let path = builder.build();
//!
//! let polyline = tessellate_polyline(&path, &PolylineOptions::tolerance(0.01)).unwrap();
//!
//! assert!(polyline.num_points() > 2);
//! ```

pub use flatiron_tessellation as tessellation;

pub use tessellation::geom;
pub use tessellation::path;

pub use crate::path::math;
