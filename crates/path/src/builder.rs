//! Tools to build path objects from a sequence of imperative commands.
//!
//! ## Examples
//!
//! ```
//! use flatiron_path::Path;
//! use flatiron_path::math::point;
//!
//! let mut builder = Path::builder();
//!
//! // All sub-paths *must* have a begin and an end.
//! builder.begin(point(0.0, 0.0));
//! builder.line_to(point(1.0, 0.0));
//! builder.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
//! builder.cubic_bezier_to(point(2.0, 2.0), point(0.0, 2.0), point(0.0, 0.0));
//! // The `true` argument closes the sub-path with a line back to its start.
//! builder.end(true);
//!
//! let path = builder.build();
//! ```

use crate::math::Point;
use crate::path::{Path, Verb};
use crate::private::DebugValidator;
use crate::PathEvent;

/// Builds a [Path](struct.Path.html) from a sequence of commands.
///
/// The builder is flat: it records endpoints and control points as provided
/// without attempting to validate the geometry (zero-length edges and
/// degenerate curves are legal inputs for the consumers of this crate).
/// Command ordering, on the other hand, is enforced in debug builds: every
/// sub-path starts with `begin` and finishes with `end`, and edges are only
/// legal in between.
#[derive(Default)]
pub struct Builder {
    points: Vec<Point>,
    verbs: Vec<Verb>,
    validator: DebugValidator,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            points: Vec::new(),
            verbs: Vec::new(),
            validator: DebugValidator::new(),
        }
    }

    pub fn with_capacity(points: usize, edges: usize) -> Self {
        Builder {
            points: Vec::with_capacity(points),
            verbs: Vec::with_capacity(edges),
            validator: DebugValidator::new(),
        }
    }

    /// Starts a new sub-path at the given position.
    pub fn begin(&mut self, at: Point) {
        self.validator.begin();
        self.points.push(at);
        self.verbs.push(Verb::Begin);
    }

    /// Ends the current sub-path, optionally closing it with an implicit
    /// straight edge back to its first point.
    pub fn end(&mut self, close: bool) {
        self.validator.end();
        self.verbs.push(if close { Verb::Close } else { Verb::End });
    }

    /// Shorthand for `end(true)`.
    pub fn close(&mut self) {
        self.end(true);
    }

    /// Adds a straight edge to the current sub-path.
    pub fn line_to(&mut self, to: Point) {
        self.validator.edge();
        self.points.push(to);
        self.verbs.push(Verb::LineTo);
    }

    /// Adds a quadratic bézier edge to the current sub-path.
    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        self.validator.edge();
        self.points.push(ctrl);
        self.points.push(to);
        self.verbs.push(Verb::QuadraticTo);
    }

    /// Adds a cubic bézier edge to the current sub-path.
    pub fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.validator.edge();
        self.points.push(ctrl1);
        self.points.push(ctrl2);
        self.points.push(to);
        self.verbs.push(Verb::CubicTo);
    }

    /// Applies the provided path event.
    pub fn path_event(&mut self, event: PathEvent) {
        match event {
            PathEvent::Begin { at } => self.begin(at),
            PathEvent::Line { to, .. } => self.line_to(to),
            PathEvent::Quadratic { ctrl, to, .. } => self.quadratic_bezier_to(ctrl, to),
            PathEvent::Cubic {
                ctrl1, ctrl2, to, ..
            } => self.cubic_bezier_to(ctrl1, ctrl2, to),
            PathEvent::End { close, .. } => self.end(close),
        }
    }

    pub fn reserve(&mut self, points: usize, edges: usize) {
        self.points.reserve(points);
        self.verbs.reserve(edges);
    }

    /// Consumes the builder and returns the generated path.
    pub fn build(self) -> Path {
        self.validator.build();

        Path::from_buffers(
            self.points.into_boxed_slice(),
            self.verbs.into_boxed_slice(),
        )
    }
}
